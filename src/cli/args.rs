// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// A personal URL vault for the terminal
pub struct Cli {
    /// Sets a custom settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the vault files (overrides settings and environment)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print the default settings file and exit
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a URL to the vault
    Add {
        url: String,
        #[arg(long = "title", help = "title, fetched from the page when omitted")]
        title: Option<String>,
        #[arg(short = 'c', long = "category", help = "category, defaults to the first configured one")]
        category: Option<String>,
        #[arg(short = 't', long = "tags", help = "tags, comma separated")]
        tags: Option<String>,
        #[arg(long = "comment", help = "free-text comment")]
        comment: Option<String>,
        #[arg(long = "no-web", help = "do not fetch the page title")]
        no_web: bool,
    },
    /// Edit an entry; only the given fields change
    Edit {
        /// entry id or id prefix
        id: String,
        #[arg(long = "url", help = "new URL")]
        url: Option<String>,
        #[arg(long = "title", help = "new title")]
        title: Option<String>,
        #[arg(short = 'c', long = "category", help = "new category")]
        category: Option<String>,
        #[arg(short = 't', long = "tags", help = "new tags, comma separated, replaces all tags")]
        tags: Option<String>,
        #[arg(long = "comment", help = "new comment")]
        comment: Option<String>,
        #[arg(long = "fetch-title", help = "replace the title with the page title")]
        fetch_title: bool,
    },
    /// Delete entries
    Delete {
        /// entry ids or id prefixes
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(short = 'y', long = "yes", help = "do not ask for confirmation")]
        yes: bool,
    },
    /// List entries, filtered and sorted
    List {
        /// free-text filter on title, URL, comment and tags
        query: Option<String>,
        #[arg(short = 'c', long = "category", help = "only this category (\"All\" for every category)")]
        category: Option<String>,
        #[arg(short = 't', long = "tags", help = "entries having all of these tags, comma separated")]
        tags: Option<String>,
        #[arg(short = 's', long = "sort", help = "sort column, defaults to the saved sort state")]
        sort: Option<String>,
        #[arg(long = "asc", help = "ascending", conflicts_with = "desc")]
        asc: bool,
        #[arg(long = "desc", help = "descending")]
        desc: bool,
        #[arg(short = 'l', long = "limit", help = "limit number of results")]
        limit: Option<usize>,
        #[arg(long = "json", help = "output as json")]
        json: bool,
        #[arg(long = "np", help = "print ids only")]
        ids_only: bool,
    },
    /// Show entries in detail
    Show {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Open an entry's URL in the default browser
    Open { id: String },
    /// Copy an entry's URL to the clipboard
    Copy { id: String },
    /// Fetch and print the title of a web page
    FetchTitle { url: String },
    /// Click a column header: sort by it, or reverse the direction if already sorted by it
    Sort {
        /// Title, URL, Category, Tags, Comment or "Date Saved"
        column: String,
    },
    /// Show or change the column layout of `list`
    Columns {
        #[arg(long = "set", value_name = "LAYOUT", help = "e.g. \"Title:40,URL,Date Saved:20\"", conflicts_with = "reset")]
        set: Option<String>,
        #[arg(long = "reset", help = "restore the default layout")]
        reset: bool,
    },
    /// Manage the category vocabulary
    Category {
        #[command(subcommand)]
        action: VocabularyAction,
    },
    /// Manage the tag vocabulary
    Tag {
        #[command(subcommand)]
        action: VocabularyAction,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completion for (bash, zsh, fish)
        shell: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum VocabularyAction {
    /// List all values
    List,
    /// Add a value
    Add { name: String },
    /// Remove a value
    Remove { name: String },
}
