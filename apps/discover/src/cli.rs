use clap::{ArgAction, Parser, Subcommand};
use discovery::{SortMode, Surface};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of the platform config directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the built-in category table and window of a page (blog or news)
    #[arg(long, global = true)]
    pub surface: Option<Surface>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List content for a category and search query
    List {
        /// Category label, defaults to the first configured one
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Free-text search over title, author, excerpt and body
        #[arg(short, long)]
        query: Option<String>,
        /// Show every result instead of the collapsed window
        #[arg(short, long)]
        all: bool,
        /// Override the collapsed window size
        #[arg(short, long)]
        window: Option<usize>,
        #[arg(short, long, default_value_t = SortMode::Fixture)]
        sort: SortMode,
        #[arg(long)]
        json: bool,
    },
    /// Show one item in full
    Show {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    /// Items to read next after the one at `slug`
    Related {
        slug: String,
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },
    /// List category labels with their rules and member counts
    Categories,
    /// Check the category table against the loaded collection
    CheckRules,
}
