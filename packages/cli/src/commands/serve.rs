use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::net::IpAddr;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (overrides config)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Built site to serve alongside the editor endpoint (overrides config)
    #[arg(long)]
    pub static_dir: Option<String>,
}

pub fn serve(args: ServeArgs, cwd: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::load(cwd)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if args.static_dir.is_some() {
        config.static_dir = args.static_dir;
    }

    let repository = config.repository(cwd);
    let addr = config.addr();

    println!("{}", "🚀 Starting content editor server...".bright_blue().bold());
    println!("   Content: {}", repository.data_path().display());
    println!("   Editor:  {}", format!("http://{}/__editor/content", addr).cyan());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dwd_workspace::serve(addr, repository, config.get_static_dir(cwd)))?;

    Ok(())
}
