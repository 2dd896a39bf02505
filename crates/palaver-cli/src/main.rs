//! palaver CLI: Terminal conversation view

use clap::{Parser, Subcommand};
use palaver_engine::{Config, Thread, DEFAULT_CONFIG_PATH};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chat with a responder in the terminal
#[derive(Parser)]
#[command(name = "palaver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed the conversation from a JSONL file of messages
    #[arg(long, global = true)]
    thread: Option<PathBuf>,

    /// Write logs to this file (the terminal belongs to the TUI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Write a default config file
    Init,

    /// Print the resolved config as JSON
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        if let Err(e) = init_logging(log_file) {
            eprintln!("Failed to open log file {}: {e}", log_file.display());
            std::process::exit(1);
        }
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            cmd_tui(&cli.config, cli.thread.as_deref());
        }
        Some(Commands::Init) => {
            cmd_init(&cli.config);
        }
        Some(Commands::Config) => {
            cmd_config(&cli.config);
        }
    }
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => {
            info!(path = %path.display(), "Config loaded");
            config
        }
        Err(e) => {
            eprintln!("Failed to load config {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn cmd_tui(config_path: &Path, thread_path: Option<&Path>) {
    let config = load_config(config_path);

    let thread = match thread_path {
        Some(path) => match Thread::load_jsonl(path) {
            Ok(thread) => {
                info!(path = %path.display(), messages = thread.len(), "Thread loaded");
                thread
            }
            Err(e) => {
                eprintln!("Failed to load thread {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Thread::new(),
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(palaver_tui::run_tui(&config, thread)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_init(config_path: &Path) {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    if let Err(e) = Config::default().save(config_path) {
        eprintln!("Failed to write config: {e}");
        std::process::exit(1);
    }
    println!("Created {}", config_path.display());
}

fn cmd_config(config_path: &Path) {
    let config = load_config(config_path);
    println!(
        "{}",
        serde_json::to_string_pretty(&config).expect("failed to serialize")
    );
}
