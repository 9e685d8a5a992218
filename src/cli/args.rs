//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Organizational charts: print, search and inspect university hierarchies
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Chart definition (TOML). Default: configured chart, else the sample chart
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub chart: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print chart as indented text
    Print,

    /// Show chart as tree
    Tree,

    /// Find committee by exact name
    Search {
        /// Committee name
        name: String,
    },

    /// List nodes in visit order: depth, kind, name
    List,

    /// Emit the sample chart definition
    Sample {
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Overwrite existing file
        #[arg(short, long, requires = "output")]
        force: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
