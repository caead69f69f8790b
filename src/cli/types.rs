//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::check::CheckArgs;
use super::commands::keys::KeysArgs;

#[derive(Parser)]
#[command(name = "boilerplate-config")]
#[command(about = "Load and inspect the boilerplate service configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate configuration from the environment
    Check(CheckArgs),

    /// List every recognised environment variable
    Keys(KeysArgs),
}
