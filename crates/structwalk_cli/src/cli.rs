//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// structwalk - Inspect the nesting structure of JSON documents
#[derive(Parser)]
#[command(name = "swalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every traversal event with its reconstructed context
    Outline {
        /// JSON document to walk
        file: PathBuf,

        /// Do not descend past this depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Omit leaf values
        #[arg(long)]
        no_values: bool,

        /// Spaces of indentation per depth level
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=16))]
        indent: Option<u8>,
    },

    /// Summarize the shape of a document
    Stats {
        /// JSON document to walk
        file: PathBuf,

        /// Do not descend past this depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
