use chalkboard::cli::{Cli, Commands};
use chalkboard::cli_handlers;
use clap::Parser;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Traverse => cli_handlers::handle_traverse(),
        Commands::Sort => cli_handlers::handle_sort(),
        Commands::Bsp => cli_handlers::handle_bsp(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
