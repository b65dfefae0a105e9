//! src/main.rs
//! ============================================================================
//! # Project Navigator CLI Entry Point
//!
//! Locates project directories by name fragment under the configured root
//! folders using a concurrent recursive search, disambiguates interactively
//! when several match, and opens the selection with the OS file opener or
//! the configured editor.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use pnav::{
    Logger,
    config::config::Config,
    error::AppError,
    fs::{expand::expand_home, launcher},
    select,
    tasks::search_task,
};

/// Project navigator CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "pnav", version, about = "Navigate to a project folder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the configured root folders and open the selection.
    #[command(alias = "g")]
    Go {
        /// Name fragment to search for (case-insensitive).
        folder: String,
        /// Open the selection with the configured editor command.
        #[arg(short, long)]
        code: bool,
    },
    /// Print the loaded configuration.
    #[command(alias = "pc")]
    Config,
    /// Open the config file in $EDITOR.
    #[command(alias = "e")]
    Edit,
}

#[tokio::main]
async fn main() -> Result<()> {
    Logger::init_tracing();
    let cli = Cli::parse();

    let config: Config = init_config()
        .await
        .context("failed to initialize configuration")?;

    match cli.command {
        Commands::Go { folder, code } => run_go(&config, &folder, code).await,
        Commands::Config => {
            print_config(&config);
            Ok(())
        }
        Commands::Edit => run_edit().await,
    }
}

/// Load the config file, or walk the user through creating one on first run.
async fn init_config() -> Result<Config> {
    match Config::load().await? {
        Some(config) => {
            config.print_notice_if_due().await;
            Ok(config)
        }
        None => first_run().await,
    }
}

/// First-run flow: offer to write a default config and open it for editing.
/// Declining still returns the in-memory defaults for this invocation.
async fn first_run() -> Result<Config> {
    let path: PathBuf = Config::config_path()?;
    print!(
        "Config file does not exist. Create a default config at {}? {} ",
        path.display(),
        "(y/n)".green()
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let config = Config::default();
    if matches!(line.trim(), "y" | "Y") {
        config.save().await.context("failed to write config file")?;
        println!("Default config file created at {}", path.display());
        launcher::open_in_editor(&path).await?;
    }
    Ok(config)
}

/// Run the search, disambiguate, and launch on the chosen path.
async fn run_go(config: &Config, fragment: &str, code: bool) -> Result<()> {
    if config.folders.is_empty() {
        return Err(AppError::NoRootFolders.into());
    }

    let mut roots: Vec<PathBuf> = Vec::with_capacity(config.folders.len());
    for folder in &config.folders {
        roots.push(expand_home(folder)?);
    }

    let start = Instant::now();
    let rx = search_task::spawn_search(roots, fragment);
    let matches: Vec<PathBuf> = select::collect_matches(rx).await;
    println!(
        "{}",
        format!("Operation took {:.2?}", start.elapsed()).green()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let selected: PathBuf = select::choose(matches, &mut input, &mut output)?;

    println!("You selected: {}", selected.display());
    if code {
        launcher::launch_detached(
            launcher::editor_command(&config.editor_cmd, &selected),
            &config.editor_cmd,
        )?;
    } else {
        launcher::launch_detached(launcher::opener_command(&selected), "file opener")?;
    }
    Ok(())
}

fn print_config(config: &Config) {
    println!("{}: {:?}", "folders".blue(), config.folders);
    println!("{}: {}", "max_depth".blue(), config.max_depth);
    println!("{}: {}", "editor_cmd".blue(), config.editor_cmd);
}

async fn run_edit() -> Result<()> {
    let path: PathBuf = Config::config_path()?;
    if !path.exists() {
        anyhow::bail!(
            "no config file found at {}; run `pnav go` once to create it",
            path.display()
        );
    }
    launcher::open_in_editor(&path).await?;
    Ok(())
}
