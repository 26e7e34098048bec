//! Tarnish CLI - synthetic data-quality corruption.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Batch {
            input_dir,
            output_dir,
            seed,
            delimiter,
            report,
        } => commands::batch::run(input_dir, output_dir, seed, delimiter, report, cli.verbose),

        Commands::File {
            file,
            output,
            seed,
            delimiter,
            json,
        } => commands::file::run(file, output, seed, delimiter, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
