use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use dwd_compiler_js::{compile_content_module, CompileOptions};
use dwd_workspace::{ContentRepository, FileWatcher};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output to stdout instead of the configured file
    #[arg(long)]
    pub stdout: bool,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub out_path: Option<String>,

    /// Regenerate whenever the data file changes
    #[arg(short, long)]
    pub watch: bool,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_path) = args.out_path {
        config.out_path = out_path;
    }
    let repository = config.repository(cwd);

    if !repository.data_path().exists() {
        return Err(anyhow!(
            "Content file does not exist: {:?} (run dwd init)",
            repository.data_path()
        ));
    }

    if args.stdout {
        let document = repository.read()?;
        let options = CompileOptions {
            source_name: repository.data_file_name(),
            ..CompileOptions::default()
        };
        print!("{}", compile_content_module(&document, options)?);
        return Ok(());
    }

    println!("{}", "🔨 Generating content module...".bright_blue().bold());
    generate_once(&repository);

    if args.watch {
        watch(&repository)?;
    }

    Ok(())
}

/// Regenerate and report; failures are printed, not returned, so a bad save
/// doesn't end a watch session
fn generate_once(repository: &ContentRepository) {
    match repository.regenerate() {
        Ok(output) => {
            println!(
                "  {} {} → {}",
                "✓".green(),
                repository.data_file_name(),
                output.display()
            );
        }
        Err(e) => {
            eprintln!("  {} {} - {}", "✗".red(), repository.data_file_name(), e);
        }
    }
}

fn watch(repository: &ContentRepository) -> Result<()> {
    let watcher = FileWatcher::new(repository.data_path().to_path_buf())?;
    println!("\n{}", "👀 Watching for changes...".bright_blue());

    while watcher.next_event().is_some() {
        watcher.drain();
        generate_once(repository);
    }

    Ok(())
}
