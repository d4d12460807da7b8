//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --ascii, --verbose, --config, --store) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::ItemId;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// menutree - render navigation menus from a menu store
#[derive(Parser, Debug)]
#[command(name = "menutree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output JSON instead of a text tree
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use ASCII markers instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./menutree.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Menu store file (overrides config and MENUTREE_STORE)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a menu, expanding the branch of the selected item
    Show {
        /// Menu name (default: store.default_menu from config)
        menu: Option<String>,

        /// Id of the selected item
        #[arg(short, long)]
        selected: Option<ItemId>,
    },

    /// List the menus in the store
    Menus,
}
