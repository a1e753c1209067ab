use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sift_core::{ObjectType, QueueVariant};

/// Translate alert and event filters between URL query strings and
/// typed filter sets.
///
/// Object type and queue default to the configured values
/// (`DEFAULT_OBJECT_TYPE`, `DEFAULT_QUEUE`).
#[derive(Parser, Debug)]
#[command(name = "sift", about = "Filter query translation for alerts and events")]
pub struct CliArgs {
    /// Object type whose filter table is active: alerts or events
    #[arg(long, global = true)]
    pub object: Option<ObjectType>,

    /// Queue variant: internal or external
    #[arg(long, global = true)]
    pub queue: Option<QueueVariant>,

    /// JSON file with reference collections keyed by provider
    #[arg(long, global = true, env = "REFERENCE_DATA")]
    pub references: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the filters of the active table
    Descriptors,

    /// Decode a query string and print the filter set as JSON
    Decode {
        /// Query string, with or without the leading '?'
        query: String,
    },

    /// Encode a filter set JSON file into an API query string
    Encode {
        /// Path to a filter set JSON file
        filters: PathBuf,

        #[arg(long)]
        limit: Option<u64>,

        #[arg(long)]
        offset: Option<u64>,
    },

    /// Decode then re-encode a query string
    Roundtrip { query: String },

    /// Decode a query string and persist it for the active object type
    Save { query: String },

    /// Print the persisted filters of the active object type as a query string
    Show,
}
