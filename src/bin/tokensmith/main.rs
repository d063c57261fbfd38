//! tokensmith CLI - typed symbols for design tokens

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tokensmith::util::config::{global_config_path, load_config};
use tokensmith::util::diagnostic::{self, Diagnostic};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        diagnostic::emit(&Diagnostic::from_error(&e), color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("tokensmith=debug")
    } else {
        EnvFilter::new("tokensmith=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    // Load configuration (global + project)
    let config = load_config(global_config_path().as_deref(), &cli.config);

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, &config),
        Commands::Verify(args) => commands::verify::execute(args, &config),
        Commands::Resolve(args) => commands::resolve::execute(args, &config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
