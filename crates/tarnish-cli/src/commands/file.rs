//! File command - corrupt a single CSV file.

use std::path::PathBuf;

use colored::Colorize;
use tarnish::batch::output_file_name;
use tarnish::{BatchProcessor, CorruptionConfig, CorruptionPipeline, ParserConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    seed: Option<u64>,
    delimiter: u8,
    json: bool,
    _verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Data file not found: {}", file.display()).into());
    }

    let output_path = output.unwrap_or_else(|| file.with_file_name(output_file_name(&file)));

    let mut config = CorruptionConfig::new();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let processor = BatchProcessor::with_pipeline(CorruptionPipeline::with_config(config))
        .with_parser_config(ParserConfig {
            delimiter,
            ..Default::default()
        });

    let outcome = processor.process_file(&file, &output_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows × {} columns)",
        "Corrupted".cyan().bold(),
        outcome.source.file,
        outcome.source.row_count,
        outcome.source.column_count
    );

    for stage in &outcome.report.stages {
        println!(
            "  {} {:<24} {}",
            "•".dimmed(),
            stage.stage.label(),
            stage.cells_changed.to_string().yellow()
        );
    }

    println!();
    println!(
        "{} {} of {} cells changed ({:.1}%) → {}",
        "Done:".green().bold(),
        outcome.report.cells_changed.to_string().white().bold(),
        outcome.report.total_cells,
        outcome.report.corruption_rate() * 100.0,
        output_path.display().to_string().cyan()
    );

    Ok(())
}
