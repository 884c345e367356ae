//! Single-field edits from the command line.
//!
//! Each command loads the document through a [`ContentStore`], applies one
//! mutation and saves it back, either straight to disk or, with `--remote`,
//! through a running dev server.

use crate::config::Config;
use anyhow::{anyhow, bail, Result};
use clap::Args;
use colored::Colorize;
use dwd_content::{CardLine, Document, FooterLink, NetworkNode};
use dwd_editor::{
    mutations, ContentStore, ContentTransport, EditorError, HttpTransport, Mutation,
    MutationError, Path, StoreStatus,
};
use dwd_workspace::LocalTransport;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct Target {
    /// Dev server origin to edit through, e.g. http://127.0.0.1:5173
    #[arg(long)]
    pub remote: Option<String>,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Dotted path, e.g. team.members.0.name (empty for the whole document)
    #[arg(default_value = "")]
    pub path: Path,

    #[command(flatten)]
    pub target: Target,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Dotted path of an existing field
    pub path: Path,

    /// JSON value; taken as a string when it isn't valid JSON or the field
    /// holds text (so `2025` sets a year string)
    pub value: String,

    #[command(flatten)]
    pub target: Target,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Dotted path of a list, e.g. focus.areas
    pub path: Path,

    /// JSON item to append; defaults to the list's new-item template
    pub item: Option<String>,

    #[command(flatten)]
    pub target: Target,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Dotted path of a list
    pub path: Path,

    pub index: usize,

    #[command(flatten)]
    pub target: Target,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Dotted path of a list
    pub path: Path,

    pub from: usize,

    pub to: usize,

    #[command(flatten)]
    pub target: Target,
}

pub fn get(args: GetArgs, cwd: &str) -> Result<()> {
    let mut store = open(cwd, &args.target)?;
    let document = block_on(load(&mut store))?;

    let value = mutations::get_value(&document, &args.path)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    let value = parse_value(&args.value);
    let as_text = match value {
        Value::String(_) => None,
        _ => Some(Mutation::Set {
            path: args.path.clone(),
            value: Value::String(args.value.clone()),
        }),
    };

    let mutation = Mutation::Set {
        path: args.path,
        value,
    };
    apply_or(mutation, as_text, &args.target, cwd)
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let item = match args.item.as_deref() {
        Some(raw) => parse_value(raw),
        None => {
            let mut store = open(cwd, &args.target)?;
            let document = block_on(load(&mut store))?;
            new_item_for(&document, &args.path)?
        }
    };

    let mutation = Mutation::Insert {
        path: args.path,
        item,
    };
    apply(mutation, &args.target, cwd)
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let mutation = Mutation::RemoveAt {
        path: args.path,
        index: args.index,
    };
    apply(mutation, &args.target, cwd)
}

pub fn move_item(args: MoveArgs, cwd: &str) -> Result<()> {
    let mutation = Mutation::MoveItem {
        path: args.path,
        from: args.from,
        to: args.to,
    };
    apply(mutation, &args.target, cwd)
}

fn apply(mutation: Mutation, target: &Target, cwd: &str) -> Result<()> {
    apply_or(mutation, None, target, cwd)
}

/// Apply `mutation`, falling back to `fallback` when the first one
/// doesn't fit the schema
fn apply_or(
    mutation: Mutation,
    fallback: Option<Mutation>,
    target: &Target,
    cwd: &str,
) -> Result<()> {
    let mut store = open(cwd, target)?;

    let saved_at = block_on(apply_and_save(&mut store, &mutation, fallback.as_ref()))?;

    println!(
        "{} {} {} {}",
        "✓".green(),
        mutation.name(),
        mutation.path().to_string().cyan(),
        format!("(saved {})", saved_at).dimmed()
    );
    Ok(())
}

/// Parse `raw` as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// What the editor's "+ Add" button would append to the list at `path`.
///
/// Lists of plain strings get an empty string.
pub fn new_item_for(doc: &Document, path: &Path) -> Result<Value, MutationError> {
    let template = match path.to_string().as_str() {
        "focus.areas" => serde_json::to_value(doc.new_focus_area()),
        "team.members" => serde_json::to_value(doc.new_team_member()),
        "business.steps" => serde_json::to_value(doc.new_business_step()),
        "portfolio.items" => serde_json::to_value(doc.new_portfolio_item()),
        "network.nodes" => serde_json::to_value(NetworkNode::placeholder()),
        "footer.links" => serde_json::to_value(FooterLink::placeholder()),
        "hero.card.lines" => serde_json::to_value(CardLine::placeholder()),
        _ => Ok(Value::String(String::new())),
    };
    template.map_err(|e| MutationError::Shape(e.to_string()))
}

type Store = ContentStore<Box<dyn ContentTransport>>;

/// Store over the local data file, or the `--remote` server
fn open(cwd: &str, target: &Target) -> Result<Store> {
    let transport: Box<dyn ContentTransport> = match &target.remote {
        Some(url) => Box::new(HttpTransport::new(url)),
        None => {
            let repository = Config::load(cwd)?.repository(cwd);
            Box::new(LocalTransport::new(Arc::new(repository)))
        }
    };
    Ok(ContentStore::new(transport))
}

async fn load(store: &mut Store) -> Result<Document> {
    store.load().await;
    loaded(store)
}

/// Load, apply `mutation` (or `fallback` on a shape error), save; the save
/// time on success
async fn apply_and_save(
    store: &mut Store,
    mutation: &Mutation,
    fallback: Option<&Mutation>,
) -> Result<String> {
    load(store).await?;
    let applied = store.apply(mutation).map(|_| ());
    match (applied, fallback) {
        (Ok(_), _) => {}
        (Err(EditorError::Mutation(MutationError::Shape(_))), Some(fallback)) => {
            store.apply(fallback)?;
        }
        (Err(e), _) => return Err(e.into()),
    }

    match store.save().await {
        StoreStatus::Saved { at } => Ok(at.clone()),
        StoreStatus::Error { message } => Err(anyhow!(message.clone())),
        other => Err(anyhow!("Unexpected status after save: {:?}", other)),
    }
}

fn loaded(store: &Store) -> Result<Document> {
    if let StoreStatus::Error { message } = store.status() {
        bail!(message.clone());
    }
    store
        .document()
        .cloned()
        .ok_or_else(|| anyhow!("No content loaded"))
}

fn block_on<T, F>(future: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    tokio::runtime::Runtime::new()?.block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwd_editor::path;
    use dwd_workspace::ContentRepository;
    use tempfile::TempDir;

    fn project() -> (TempDir, ContentRepository) {
        let temp = TempDir::new().unwrap();
        let repository = Config::default().repository(temp.path().to_str().unwrap());
        repository.write(&Document::seed().unwrap()).unwrap();
        (temp, repository)
    }

    fn local() -> Target {
        Target { remote: None }
    }

    #[test]
    fn test_parse_value_falls_back_to_string() {
        assert_eq!(parse_value("42"), Value::from(42));
        assert_eq!(parse_value("true"), Value::from(true));
        assert_eq!(parse_value(r#"["a","b"]"#), serde_json::json!(["a", "b"]));
        assert_eq!(parse_value("Seoul"), Value::from("Seoul"));
        assert_eq!(parse_value(""), Value::from(""));
    }

    #[test]
    fn test_new_item_templates() {
        let doc = Document::seed().unwrap();

        let area = new_item_for(&doc, &path!["focus", "areas"]).unwrap();
        assert_eq!(area["id"], "F07");
        assert_eq!(area["title"], "New Area");

        let member = new_item_for(&doc, &path!["team", "members"]).unwrap();
        assert_eq!(member["name"], "New Member");

        let node = new_item_for(&doc, &path!["network", "nodes"]).unwrap();
        assert_eq!(node, serde_json::json!({"city": "New City", "x": 50, "y": 50}));

        let tag = new_item_for(&doc, &path!["team", "members", 0, "tags"]).unwrap();
        assert_eq!(tag, Value::from(""));
    }

    #[test]
    fn test_set_writes_through_to_disk() {
        let (temp, repository) = project();
        let cwd = temp.path().to_str().unwrap();

        set(
            SetArgs {
                path: "brand.left".parse().unwrap(),
                value: "ACME".to_string(),
                target: local(),
            },
            cwd,
        )
        .unwrap();

        assert_eq!(repository.read().unwrap().brand.left, "ACME");
        assert_eq!(repository.backups().unwrap().len(), 1);
    }

    #[test]
    fn test_set_numeric_text_on_string_field() {
        let (temp, repository) = project();
        let cwd = temp.path().to_str().unwrap();

        set(
            SetArgs {
                path: "portfolio.items.0.year".parse().unwrap(),
                value: "2025".to_string(),
                target: local(),
            },
            cwd,
        )
        .unwrap();

        assert_eq!(repository.read().unwrap().portfolio.items[0].year, "2025");
    }

    #[test]
    fn test_set_number_on_numeric_field() {
        let (temp, repository) = project();
        let cwd = temp.path().to_str().unwrap();

        set(
            SetArgs {
                path: "network.nodes.0.x".parse().unwrap(),
                value: "12.5".to_string(),
                target: local(),
            },
            cwd,
        )
        .unwrap();

        assert_eq!(repository.read().unwrap().network.nodes[0].x, 12.5);
    }

    #[test]
    fn test_set_text_on_numeric_field_fails() {
        let (temp, repository) = project();
        let cwd = temp.path().to_str().unwrap();
        let before = std::fs::read(repository.data_path()).unwrap();

        let result = set(
            SetArgs {
                path: "network.nodes.0.x".parse().unwrap(),
                value: "left".to_string(),
                target: local(),
            },
            cwd,
        );

        assert!(result.is_err());
        assert_eq!(std::fs::read(repository.data_path()).unwrap(), before);
    }

    #[test]
    fn test_add_without_item_uses_template() {
        let (temp, repository) = project();
        let cwd = temp.path().to_str().unwrap();
        let before = repository.read().unwrap().business.steps.len();

        add(
            AddArgs {
                path: "business.steps".parse().unwrap(),
                item: None,
                target: local(),
            },
            cwd,
        )
        .unwrap();

        let steps = repository.read().unwrap().business.steps;
        assert_eq!(steps.len(), before + 1);
        assert_eq!(steps.last().unwrap().title, "New Step");
    }

    #[test]
    fn test_bad_index_leaves_file_untouched() {
        let (temp, repository) = project();
        let cwd = temp.path().to_str().unwrap();
        let before = std::fs::read(repository.data_path()).unwrap();

        let result = remove(
            RemoveArgs {
                path: "footer.links".parse().unwrap(),
                index: 99,
                target: local(),
            },
            cwd,
        );

        assert!(result.is_err());
        assert_eq!(std::fs::read(repository.data_path()).unwrap(), before);
        assert!(repository.backups().unwrap().is_empty());
    }

    #[test]
    fn test_missing_data_file_is_load_error() {
        let temp = TempDir::new().unwrap();
        let err = get(
            GetArgs {
                path: Path::root(),
                target: local(),
            },
            temp.path().to_str().unwrap(),
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("Failed to load content:"));
    }
}
