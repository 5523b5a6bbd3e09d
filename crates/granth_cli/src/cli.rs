//! Argument definitions for the `granth` binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser.
#[derive(Debug, Parser)]
#[command(name = "granth", version, about = "Browse scripture articles and their shlokas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "GRANTH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "GRANTH_LOG_DIR")]
    pub log_dir: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check core linkage and print its version
    Ping,
    /// List the category selector entries
    Categories,
    /// Filter, search and sort the article listing
    List {
        /// Category value or "all"; unknown values mean "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Case-insensitive text matched against title, description and tags
        #[arg(long, default_value = "")]
        search: String,
        /// "recent" or "popular"; unknown values mean "recent"
        #[arg(long, default_value = "recent")]
        sort: String,
        #[arg(long, value_enum, default_value_t = Layout::Grid)]
        layout: Layout,
    },
    /// Show one article with its shlokas and related articles
    Show { id: String },
    /// Show dashboard stats and rows
    Dashboard {
        /// "all", "published" or "draft"; unknown values mean "all"
        #[arg(long, default_value = "all")]
        status: String,
        /// Case-insensitive title filter
        #[arg(long, default_value = "")]
        search: String,
    },
}

/// Text layout for listing output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Layout {
    /// Multi-line card per article
    Grid,
    /// One line per article
    List,
}
