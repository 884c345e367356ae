use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dwd_content::Document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Content data file
    #[arg(short, long, default_value = "content.data.json")]
    pub data_path: String,

    /// Generated module
    #[arg(short, long, default_value = "src/content.jsx")]
    pub out_path: String,

    /// Overwrite existing config and content
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing content project...".bright_blue().bold());

    let config = Config {
        data_path: args.data_path.clone(),
        out_path: args.out_path.clone(),
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let repository = config.repository(cwd);

    // Seed content, unless there is content to keep
    if !repository.data_path().exists() || args.force {
        let document = Document::seed()?;
        if let Some(parent) = repository.data_path().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(repository.data_path(), document.to_pretty_json()?)?;
        println!("  {} Created {}", "✓".green(), config.data_path);
    }

    repository.regenerate()?;
    println!("  {} Generated {}", "✓".green(), config.out_path);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: dwd serve");
    println!("  2. Edit content in the editor UI, or with dwd set <path> <value>");
    println!("  3. Check output in {}", config.out_path);

    Ok(())
}
