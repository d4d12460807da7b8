//! menutree CLI - render navigation menus from a menu store
//!
//! Usage: menutree <COMMAND>
//!
//! Commands:
//!   show    Render a menu, expanding the branch of the selected item
//!   menus   List the menus in the store

mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use menutree::config::Config;
use menutree::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(&cli)?;
    logging::init(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        warn!("{warning}");
    }

    let ui = UiContext::new(cli.json, cli.color, cli.ascii, &config);

    match cli.command {
        Commands::Show { menu, selected } => commands::show::cmd_show(menu, selected, &config, &ui),
        Commands::Menus => commands::menus::cmd_menus(&config, &ui),
    }
}

/// Defaults, then the config file, then the environment, then flags.
fn load_config(cli: &Cli) -> Result<(Config, Vec<menutree::config::ConfigWarning>)> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => Config::discover(std::env::current_dir().ok().as_deref()),
    };

    let (config, warnings) = match path {
        Some(path) => Config::load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    let mut config = config.with_env_overrides();
    if let Some(store) = &cli.store {
        config.store.path = store.clone();
    }
    Ok((config, warnings))
}
