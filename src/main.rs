//! Resume analyzer: AI-powered resume review and ATS match scoring

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::error::{Result, ResumeAnalyzerError};
use resume_analyzer::input::InputManager;
use resume_analyzer::llm::{GeminiClient, ResilientGenerator, RetryPolicy, TextGenerator};
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_analyzer::output::report::{export_analysis, AnalysisReport, ReportMetadata};
use resume_analyzer::processing::AnalysisOrchestrator;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // .env is optional
    dotenvy::dotenv().ok();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config.with_env_api_key(),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            mode,
            output,
            save,
            export,
            model,
        } => {
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md", "markdown"])
                    .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let mode = cli::parse_analysis_mode(&mode).map_err(ResumeAnalyzerError::InvalidInput)?;
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };
            if let Some(model) = model {
                config.generation.model = model;
            }

            let input_manager = InputManager::new(config.input.max_resume_bytes);
            let resume_bytes = input_manager.read_resume(&resume).await?;
            let (job_description, job_source) = match (job, job_text) {
                (Some(path), _) => {
                    let job = input_manager.read_job_description(&path).await?;
                    (job, path.display().to_string())
                }
                (None, Some(text)) => (InputManager::job_description_from_text(text)?, "inline text".to_string()),
                (None, None) => {
                    return Err(ResumeAnalyzerError::InvalidInput(
                        "Provide a job description with --job or --job-text".to_string(),
                    ))
                }
            };

            let client = GeminiClient::new(&config.generation)?;
            let generator = ResilientGenerator::new(client, RetryPolicy::from_config(&config.generation));
            let model_used = generator.model_name().to_string();
            let orchestrator = AnalysisOrchestrator::new(generator);

            info!("Running {} for {}", mode, resume.display());
            let spinner = analysis_spinner();
            let started = Instant::now();
            let outcome = orchestrator.analyze(resume_bytes, &job_description, mode).await;
            spinner.finish_and_clear();
            let result = outcome?;

            let metadata = ReportMetadata::new(&resume, job_source, model_used, started.elapsed());
            let report = AnalysisReport::new(result, metadata);

            let generator = ReportGenerator::with_options(config.output.color_output, true, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = path.unwrap_or_else(|| {
                        PathBuf::from(suggest_filename(&output_format, &report.metadata.resume_file, true))
                    });
                    save_report_to_file(&rendered, &path)?;
                    println!("📁 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            if export {
                let path = export_analysis(
                    &report.result,
                    &config.output.export_dir,
                    &config.output.export_file_name,
                )?;
                println!("📥 Analysis exported to {}", path.display());
            }

            Ok(())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => show_config(&config, &path),
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset to defaults: {}", path.display());
                    Ok(())
                }
                ConfigAction::Path => {
                    println!("{}", path.display());
                    Ok(())
                }
            }
        }
    }
}

fn show_config(config: &Config, path: &Path) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;
    println!("# {}", path.display());
    println!("{}", rendered);
    let key_state = if config.generation.api_key.is_some() { "set" } else { "not set" };
    println!("# {} is {}", resume_analyzer::config::API_KEY_ENV, key_state);
    Ok(())
}

fn analysis_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing your resume... Please wait ⏳");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
