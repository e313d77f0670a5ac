mod cli;
mod commands;
mod error;
mod logging;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use commands::analyze::AnalyzeArgs;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Commands::Analyze {
            source,
            json,
            metrics,
            probabilities,
        } => commands::analyze::execute(
            global,
            AnalyzeArgs {
                source,
                json,
                metrics,
                probabilities,
            },
        ),
        Commands::Stats { json } => commands::stats::execute(global, json),
        Commands::TextStats { source, json } => commands::text_stats::execute(global, source, json),
        Commands::Metrics => commands::metrics::execute(global),
        Commands::Init { force } => commands::init::execute(global, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
