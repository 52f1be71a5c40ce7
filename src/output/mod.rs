//! Output generation module
//! Report structures, formatters and plain-text export

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{export_analysis, AnalysisReport, MatchGauge, ReportMetadata};
