use dwd_workspace::{serve, ContentRepository};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 5173;
    let mut host: IpAddr = IpAddr::from([127, 0, 0, 1]);
    let mut root_dir = std::env::current_dir()?;
    let mut static_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                port = match args.get(i + 1).map(|v| v.parse()) {
                    Some(Ok(port)) => port,
                    Some(Err(_)) => fail("Invalid port number"),
                    None => fail("--port requires a value"),
                };
                i += 2;
            }
            "--host" => {
                host = match args.get(i + 1).map(|v| v.parse()) {
                    Some(Ok(host)) => host,
                    Some(Err(_)) => fail("Invalid host address"),
                    None => fail("--host requires a value"),
                };
                i += 2;
            }
            "--static-dir" => {
                match args.get(i + 1) {
                    Some(dir) => static_dir = Some(PathBuf::from(dir)),
                    None => fail("--static-dir requires a value"),
                }
                i += 2;
            }
            "--help" | "-h" => {
                println!("Usage: dwd-server [OPTIONS] [ROOT_DIR]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>       Port to listen on (default: 5173)");
                println!("  --host <ADDR>           Address to bind (default: 127.0.0.1)");
                println!("  --static-dir <DIR>      Directory of built site files to serve");
                println!("  -h, --help              Show this help message");
                println!();
                println!("Arguments:");
                println!("  [ROOT_DIR]              Project directory holding content.data.json (default: current dir)");
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                root_dir = PathBuf::from(arg);
                i += 1;
            }
            _ => fail(&format!("Unknown argument: {}", args[i])),
        }
    }

    let repository = ContentRepository::from_root(&root_dir);
    if !repository.data_path().exists() {
        tracing::warn!(path = ?repository.data_path(), "data file not found; GET will fail until it exists");
    }

    println!("Root directory: {:?}", root_dir);
    println!("Content editor on http://{}:{}", host, port);

    serve(SocketAddr::new(host, port), repository, static_dir).await?;

    Ok(())
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
