//! Command-line interface for inspecting the service configuration.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

/// Report a command failure and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    output::output_error(&err, json_mode);
    std::process::exit(1);
}
