//! Analysis pipeline: documents, orchestration and response interpretation

pub mod analyzer;
pub mod document;
pub mod interpreter;

pub use analyzer::{AnalysisOrchestrator, AnalysisResult};
pub use document::{JobDescription, ResumeDocument};
pub use interpreter::ResponseInterpreter;
