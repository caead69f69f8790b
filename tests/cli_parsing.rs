use boilerplate_config::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["boilerplate-config", "check"]).unwrap();
    match cli.command {
        Commands::Check(args) => assert!(!args.log),
        Commands::Keys(_) => panic!("Expected Check command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_check_with_logger() {
    let cli = Cli::try_parse_from(["boilerplate-config", "check", "--log"]).unwrap();
    assert!(matches!(cli.command, Commands::Check(args) if args.log));
}

#[test]
fn test_parse_keys_global_json() {
    let cli = Cli::try_parse_from(["boilerplate-config", "keys", "--required", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
        Commands::Keys(args) => assert!(args.required),
        Commands::Check(_) => panic!("Expected Keys command"),
    }
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["boilerplate-config"]).is_err());
    assert!(Cli::try_parse_from(["boilerplate-config", "serve"]).is_err());
}
