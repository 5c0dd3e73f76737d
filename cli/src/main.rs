//! doctoc CLI - document outline extraction tool
//!
//! Reads layout page dumps (JSON arrays of pages, as produced by any
//! upstream layout tool) and writes one outline JSON per input.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use doctoc::{
    file_stem, sanitize, to_json, HeuristicConfig, JsonFormat, JsonLayoutProvider,
    OutlineExtractor,
};

#[derive(Parser)]
#[command(name = "doctoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract document outlines from layout page dumps", long_about = None)]
struct Cli {
    /// Input page-dump file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single document
    Outline {
        /// Input page-dump file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Maximum word count for heading candidates
        #[arg(long)]
        max_heading_words: Option<usize>,
    },

    /// Process every page dump in a directory
    Batch {
        /// Input directory of page-dump files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (one JSON per input stem)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
            max_heading_words,
        }) => cmd_outline(&input, output.as_deref(), compact, max_heading_words),
        Some(Commands::Batch {
            input,
            output,
            compact,
        }) => cmd_batch(&input, output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_outline(&input, cli.output.as_deref(), false, None)
            } else {
                println!("{}", "Usage: doctoc <FILE> [OUTPUT]".yellow());
                println!("       doctoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_extractor(max_heading_words: Option<usize>) -> OutlineExtractor<JsonLayoutProvider> {
    let mut config = HeuristicConfig::new();
    if let Some(words) = max_heading_words {
        config = config.with_max_heading_words(words);
    }
    OutlineExtractor::new(JsonLayoutProvider::new()).with_config(config)
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    max_heading_words: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = build_extractor(max_heading_words);

    let (mut result, report) = extractor.extract_with_report(input);
    sanitize(&mut result, &file_stem(input));

    if report.degraded {
        eprintln!(
            "{}: {}",
            "Warning".yellow().bold(),
            report.failure.as_deref().unwrap_or("degraded result")
        );
    }

    let format = if compact { JsonFormat::Compact } else { JsonFormat::Pretty };
    let json = to_json(&result, format)?;

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.join("outlines"));
    fs::create_dir_all(&output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false)
        })
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        println!("{}", "No page dumps found.".yellow());
        return Ok(());
    }

    let extractor = build_extractor(None);
    let format = if compact { JsonFormat::Compact } else { JsonFormat::Pretty };

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut degraded = 0usize;
    for path in &inputs {
        let stem = file_stem(path);
        pb.set_message(stem.clone());

        let (mut result, report) = extractor.extract_with_report(path);
        sanitize(&mut result, &stem);
        if report.degraded {
            degraded += 1;
            log::warn!(
                "{}: {}",
                path.display(),
                report.failure.as_deref().unwrap_or("degraded result")
            );
        }

        let json = to_json(&result, format)?;
        fs::write(output_dir.join(format!("{}.json", stem)), json)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let ok = inputs.len() - degraded;
    println!(
        "{} {} processed, {} degraded -> {}",
        "Done:".green().bold(),
        ok,
        degraded,
        output_dir.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("doctoc {}", env!("CARGO_PKG_VERSION"));
}
