//! # CLI Layer
//!
//! The interactive menu is one possible client of the notebook library. This layer is the only
//! place that reads stdin, writes stdout, sets up logging or decides exit codes.
//!
//! - `setup`: clap argument definitions
//! - `menu`: the prompt loop and its command table
//! - `print`: output formatting

mod menu;
mod print;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use notebook::api::NotebookApi;
use notebook::config::NotebookConfig;
use notebook::error::{NotebookError, Result};
use notebook::Notebook;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use menu::Menu;
use setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Config { ref key, ref value }) => {
            handle_config(&cli, key.as_deref(), value.as_deref())
        }
        None => handle_menu(&cli),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or("NOTEBOOK_LOG", default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "notebook", "notebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotebookError::Config("Could not determine config dir".to_string()))
}

/// Loads the config file, then applies command-line overrides.
fn load_config(cli: &Cli) -> NotebookConfig {
    let mut config = match config_dir(cli) {
        Ok(dir) => load_or_default(&dir),
        Err(e) => {
            warn!("using default config: {}", e);
            NotebookConfig::default()
        }
    };

    config.report_missing_notes |= cli.report_missing;
    config.show_creation_date |= cli.dates;
    debug!("effective config: {:?}", config);
    config
}

/// Missing or unreadable config files give the defaults.
fn load_or_default(dir: &Path) -> NotebookConfig {
    NotebookConfig::load(dir).unwrap_or_else(|e| {
        warn!("using default config: {}", e);
        NotebookConfig::default()
    })
}

fn handle_menu(cli: &Cli) -> Result<()> {
    let api = NotebookApi::new(Notebook::new(), load_config(cli));
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(api, stdin.lock(), stdout.lock()).run()
}

fn handle_config(cli: &Cli, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let dir = config_dir(cli)?;
    let mut config = load_or_default(&dir);

    match (key, value) {
        (None, _) => {
            println!("report-missing = {}", config.report_missing_notes);
            println!("dates = {}", config.show_creation_date);
        }
        (Some("report-missing"), None) => println!("{}", config.report_missing_notes),
        (Some("dates"), None) => println!("{}", config.show_creation_date),
        (Some(other), None) => {
            return Err(NotebookError::Config(format!("unknown option: {}", other)))
        }
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(&dir)?;
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}
