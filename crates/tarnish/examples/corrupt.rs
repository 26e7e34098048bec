//! Example: Corrupt a single CSV file and print what changed.
//!
//! Usage:
//!   cargo run --example corrupt -- <file_path> [seed]
//!
//! Example:
//!   cargo run --example corrupt -- clean_datasets/orders.csv 42

use std::env;
use std::path::Path;

use tarnish::{BatchProcessor, CorruptionConfig, CorruptionPipeline, batch::output_file_name};

fn main() -> tarnish::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example corrupt -- <file_path> [seed]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example corrupt -- clean_datasets/orders.csv 42");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let mut config = CorruptionConfig::new();
    if let Some(seed) = args.get(2).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let output = path.with_file_name(output_file_name(path));
    let processor = BatchProcessor::with_pipeline(CorruptionPipeline::with_config(config));
    let outcome = processor.process_file(path, &output)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Tarnish: {}", outcome.source.file);
    println!("{}", separator);
    println!(
        "Rows: {}  Columns: {}",
        outcome.source.row_count, outcome.source.column_count
    );
    println!();

    for stage in &outcome.report.stages {
        println!(
            "{:<24} p={:<5} {} cell(s) changed",
            stage.stage.label(),
            stage.probability,
            stage.cells_changed
        );
        for (column, count) in &stage.columns {
            println!("    {:<20} {}", column, count);
        }
    }

    println!();
    println!(
        "Total: {} of {} cells ({:.1}%) -> {}",
        outcome.report.cells_changed,
        outcome.report.total_cells,
        outcome.report.corruption_rate() * 100.0,
        outcome.output.display()
    );

    Ok(())
}
