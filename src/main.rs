use std::path::{Path, PathBuf};

use clap::Parser;
use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use contacts::config::{Config, DEFAULT_CONFIG_FILE};
use contacts::directory::ContactDirectory;

/// Contacts - a local address book
#[derive(Debug, Parser)]
#[command(name = "contacts", version)]
struct Args {
    /// Database file path (default: .data/contacts.db)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Config file (default: ./contacts.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Import contacts from a JSON file, then exit
    #[arg(long, value_name = "JSON_PATH", conflicts_with = "export")]
    import: Option<PathBuf>,

    /// Export all contacts to a JSON file, then exit
    #[arg(long, value_name = "JSON_PATH")]
    export: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()));
    let mut config = match Config::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(file) = args.file {
        config.database = file;
    }

    init_tracing(&config.log_filter);

    if let Err(e) = config.ensure_database_dir() {
        eprintln!("Error creating database directory: {}", e);
        std::process::exit(1);
    }

    if let Some(json_path) = args.import {
        import(&json_path, &config.database);
        return;
    }
    if let Some(json_path) = args.export {
        export(&config.database, &json_path);
        return;
    }

    let conn = match Connection::open(&config.database) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            std::process::exit(1);
        }
    };

    let mut directory = match ContactDirectory::open(conn) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error initializing database: {}", e);
            std::process::exit(1);
        }
    };

    contacts::cli::run(&mut directory);
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn import(json_path: &Path, db_path: &Path) {
    println!("Importing from {}...", json_path.display());
    match contacts::migrate::import_json(json_path, db_path) {
        Ok(stats) => {
            println!("Import complete!");
            println!("  Imported: {}", stats.imported);
            println!("  Skipped (missing fields): {}", stats.skipped);
        }
        Err(e) => {
            eprintln!("Import failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn export(db_path: &Path, json_path: &Path) {
    match contacts::migrate::export_json(db_path, json_path) {
        Ok(n) => println!("Exported {} contacts to {}", n, json_path.display()),
        Err(e) => {
            eprintln!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
