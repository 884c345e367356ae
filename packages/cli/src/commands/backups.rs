use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct BackupsArgs {
    /// Only show the newest N backups
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn backups(args: BackupsArgs, cwd: &str) -> Result<()> {
    let repository = Config::load(cwd)?.repository(cwd);
    let backups = repository.backups()?;

    if backups.is_empty() {
        println!("{}", "No backups yet".yellow());
        return Ok(());
    }

    let skip = args
        .limit
        .map(|limit| backups.len().saturating_sub(limit))
        .unwrap_or(0);

    println!("{} backups in {}", backups.len(), repository.backup_dir().display());
    for path in &backups[skip..] {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {} {}", name, format!("({} bytes)", size).dimmed());
    }

    Ok(())
}
