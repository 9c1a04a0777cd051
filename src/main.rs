use std::path::PathBuf;

use rolodex::config::{Config, FILE_VAR, LOG_VAR};
use tracing_subscriber::EnvFilter;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut file: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                file = args.next().map(PathBuf::from);
                if file.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Rolodex - Contact Manager");
                println!();
                println!("Usage: rolodex [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contact file path (default: contacts.json)");
                println!("  -h, --help          Show this help");
                println!();
                println!("Environment:");
                println!("  {}        Contact file path, overridden by --file", FILE_VAR);
                println!("  {}         Default log filter (RUST_LOG takes precedence)", LOG_VAR);
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(f) = file {
        config = config.with_file(f);
    }

    // Logs go to stderr so the menu on stdout stays readable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    rolodex::cli::run(&config.file);
}
