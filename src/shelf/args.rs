use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Local-first inventory tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data directory instead of the default
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the inventory
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Item category (free-form)
        category: String,

        /// Units on hand
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        quantity: i64,

        /// Unit price
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Show only items whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Show only items in this exact category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an item's fields
    #[command(alias = "e")]
    Edit {
        /// Index of the item as printed by `list`
        index: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        quantity: Option<i64>,

        #[arg(short, long)]
        price: Option<f64>,
    },

    /// Remove one or more items
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the items (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Write the inventory to a CSV file
    Export {
        /// Output path (default: the configured export-file, in the
        /// current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep running and rewrite the file at a fixed interval
        #[arg(long)]
        watch: bool,

        /// Seconds between rewrites with --watch
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (export-file, autosave-interval)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
