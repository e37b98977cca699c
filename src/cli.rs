use std::path::{Path, PathBuf};

mod list;
mod menu;
mod show;
mod terminal;

use anyhow::Context;
use catalog::{Catalog, Config};
use clap::ArgAction;
use list::List;
use menu::Menu;
use show::Show;

/// Configuration file read from the working directory when `--config` is not
/// given.
const CONFIG_FILE: &str = "catalog.toml";

/// Message shown whenever a command needs courses but none are loaded.
const EMPTY_CATALOG: &str = "The course catalog is empty. Please load the courses first.";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    ///
    /// Defaults to 'catalog.toml' in the current directory, if present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
            None => load_config(Path::new(CONFIG_FILE)),
        };

        self.command
            .unwrap_or_else(|| Command::Menu(Menu::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Browse the catalog interactively (default)
    Menu(Menu),

    /// Print every course in order of course number
    List(List),

    /// Show a course and its prerequisites
    Show(Show),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(config)?,
            Self::List(command) => command.run(config)?,
            Self::Show(command) => command.run(config)?,
        }
        Ok(())
    }
}

fn load_config(path: &Path) -> Config {
    Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// Loads the catalog from `file`, or from the configured source if no file is
/// given.
fn load_catalog(config: &Config, file: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let path = file.unwrap_or_else(|| config.source.clone());

    let mut catalog = Catalog::new(config.parser());
    let count = catalog
        .load_file(&path)
        .context("Error loading catalog")?;
    tracing::info!("Loaded {count} courses from {}", path.display());

    Ok(catalog)
}
