//! CLI command definitions and handlers.

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod config;

/// notewise - AI summaries and category suggestions for notes
#[derive(Parser)]
#[command(name = "notewise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a note and suggest categories for it
    Analyze(analyze::AnalyzeArgs),

    /// Show the effective inference configuration
    Config(config::ConfigArgs),
}
