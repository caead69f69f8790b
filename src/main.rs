//! boilerplate-config CLI entry point.

use clap::Parser;

use boilerplate_config::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => boilerplate_config::cli::commands::check::execute(args, cli.json),
        Commands::Keys(args) => boilerplate_config::cli::commands::keys::execute(&args, cli.json),
    };

    if let Err(err) = result {
        boilerplate_config::cli::handle_error(err, cli.json);
    }
}
