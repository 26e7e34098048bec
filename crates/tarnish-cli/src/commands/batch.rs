//! Batch command - corrupt every CSV file in a folder.

use std::path::PathBuf;

use colored::Colorize;
use tarnish::{BatchProcessor, CorruptionConfig, CorruptionPipeline, ParserConfig};

pub fn run(
    input_dir: PathBuf,
    output_dir: PathBuf,
    seed: Option<u64>,
    delimiter: u8,
    report: Option<PathBuf>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input_dir.is_dir() {
        return Err(format!("Input folder not found: {}", input_dir.display()).into());
    }

    let mut config = CorruptionConfig::new();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let processor = BatchProcessor::with_pipeline(CorruptionPipeline::with_config(config))
        .with_parser_config(ParserConfig {
            delimiter,
            ..Default::default()
        });

    let summary = processor.process_folder_with(&input_dir, &output_dir, |path| {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("{} {}", "Corrupting:".cyan(), name);
    })?;

    if summary.files.is_empty() {
        println!(
            "{} No .csv files found in {}",
            "Note:".yellow(),
            input_dir.display()
        );
        return Ok(());
    }

    if verbose > 0 {
        for outcome in &summary.files {
            println!(
                "  {} {} -> {} ({} cells changed)",
                "•".dimmed(),
                outcome.source.file,
                outcome.output.display().to_string().cyan(),
                outcome.report.cells_changed
            );
        }
    }

    if let Some(report_path) = report {
        summary.save(&report_path)?;
        println!(
            "{} {}",
            "Report written to".dimmed(),
            report_path.display().to_string().cyan()
        );
    }

    println!();
    println!(
        "{} All {} dataset(s) corrupted successfully.",
        "Done:".green().bold(),
        summary.files.len().to_string().white().bold()
    );

    Ok(())
}
