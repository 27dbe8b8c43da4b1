use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quicknotes")]
#[command(version, about = "Text notes in a single JSON file, served over HTTP")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file holding the notes (default: $QUICKNOTES_DATA_FILE or ./data.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Fail on a corrupt or unreadable store file instead of treating it as empty
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on (default: $QUICKNOTES_BIND or 127.0.0.1:3000)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Create a note
    Add {
        /// Note title
        title: String,

        /// Note content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes (titles and dates only)
    List {
        /// Sort by title, creationDate or modificationDate
        #[arg(long, value_name = "KEY")]
        sort: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note with its content
    Get {
        /// Note ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a note's title and/or content
    Update {
        /// Note ID
        id: String,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one or more notes
    Delete {
        /// Note IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}
