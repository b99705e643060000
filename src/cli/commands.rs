use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};

use crate::domain::Model;
use crate::infra::ClientConfig;
use crate::summary::TranscriptSummarizer;

#[derive(Parser)]
#[command(name = "talksum")]
#[command(about = "Summarize speaker-tagged transcripts via the remote summary API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path of the transcript to summarize (.txt or .json)
    #[arg(short = 'i', long = "input_file_path")]
    pub input_file_path: PathBuf,

    /// Directory where the summary is written (created if absent)
    #[arg(short = 'o', long = "output_folder")]
    pub output_folder: PathBuf,

    /// Summarization model
    #[arg(short = 'm', long = "model", value_enum)]
    pub model: Model,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    validate_extension(&cli.input_file_path)?;

    let config = ClientConfig::load()?;

    println!("Processing file: {}", cli.input_file_path.display());

    let summarizer = TranscriptSummarizer::new(config);
    let out_path = summarizer
        .summarize_file(&cli.input_file_path, &cli.output_folder, cli.model)
        .await?;

    println!("{} Summary written to {}", "✓".green(), out_path.display());
    Ok(())
}

fn validate_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") | Some("json") => Ok(()),
        _ => anyhow::bail!(
            "invalid input file {}: must be a .txt or .json transcript",
            path.display()
        ),
    }
}
