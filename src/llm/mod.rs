//! Generative model integration module

pub mod client;
pub mod generator;
pub mod prompts;

pub use client::GeminiClient;
pub use generator::{ResilientGenerator, RetryPolicy, TextGenerator};
pub use prompts::{AnalysisMode, PromptCatalog, PromptTemplate};
