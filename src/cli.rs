use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "traitmap")]
#[command(about = "Five-factor workplace personality assessment scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a JSON file of responses and print the report
    Score {
        /// JSON object mapping item id to a 1-5 rating
        responses: PathBuf,

        /// Item catalog (TOML, JSON or YAML); the built-in battery by default
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Configuration file (skips .traitmap.toml discovery)
        #[arg(long, env = "TRAITMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Output format (default from config, else terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ASCII-only output without colors or emoji
        #[arg(long)]
        plain: bool,
    },

    /// List the items of a catalog
    Catalog {
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only items of this factor
        #[arg(long)]
        factor: Option<crate::core::Factor>,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(long)]
        plain: bool,
    },

    /// Check a catalog file and report every problem found
    ValidateCatalog {
        path: PathBuf,
    },

    /// Show progress of a saved assessment session
    Progress {
        /// Session snapshot JSON
        snapshot: PathBuf,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Write a default .traitmap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
