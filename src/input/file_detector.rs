//! File type detection by extension

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Job descriptions are accepted as plain text or markdown.
    pub fn is_job_description(self) -> bool {
        matches!(self, FileType::Text | FileType::Markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(FileType::from_path(Path::new("resume.PDF")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("job.Markdown")), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("job")), FileType::Unknown);
    }

    #[test]
    fn test_job_description_types() {
        assert!(FileType::Text.is_job_description());
        assert!(FileType::Markdown.is_job_description());
        assert!(!FileType::Pdf.is_job_description());
    }
}
