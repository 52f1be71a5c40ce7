//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use crate::llm::prompts::AnalysisMode;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "AI-powered tool to evaluate your resume against job descriptions")]
#[command(long_about = "Review a PDF resume against a job description with a generative model, either as a detailed HR-style evaluation or as an ATS-style match percentage")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description text, instead of a file
        #[arg(long)]
        job_text: Option<String>,

        /// Analysis type: review, match
        #[arg(short, long, default_value = "review")]
        mode: String,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save formatted output to file. Without a path, the name is derived from the resume
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Write the raw analysis text to the configured export file
        #[arg(short, long)]
        export: bool,

        /// Generative model to use instead of the configured one
        #[arg(long)]
        model: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Parse the analysis type selector
pub fn parse_analysis_mode(mode: &str) -> Result<AnalysisMode, String> {
    match mode.to_lowercase().as_str() {
        "review" | "detailed" => Ok(AnalysisMode::DetailedReview),
        "match" | "percentage" => Ok(AnalysisMode::MatchPercentage),
        _ => Err(format!("Invalid analysis type: {}. Supported: review, match", mode)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
