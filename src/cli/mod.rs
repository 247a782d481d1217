//! CLI Module
//!
//! Command-line interface for Wavescan. The CLI is the file-loading
//! collaborator around the pure library: it sources bytes from disk and
//! hands them to `parse_header`/`decode`.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wavescan - WAVE metadata extraction and sample decoding
#[derive(Parser, Debug)]
#[command(name = "wavescan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and print the WAVE header of a file
    #[command(name = "info")]
    Info {
        /// Path to the WAVE file
        path: PathBuf,

        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode the sample payload and report statistics
    #[command(name = "decode")]
    Decode {
        /// Path to the WAVE file
        path: PathBuf,
    },
}
