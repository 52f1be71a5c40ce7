//! Resume analyzer library
//!
//! Scores a PDF resume against a job description with a generative model:
//! text extraction, prompt selection, generation and match-percentage
//! interpretation.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AnalysisError, ExtractionError, GenerationError, Result, ResumeAnalyzerError};
pub use llm::{AnalysisMode, TextGenerator};
pub use processing::{AnalysisOrchestrator, AnalysisResult, JobDescription};
