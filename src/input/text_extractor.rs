//! Text extraction from resume PDFs and job description files

use crate::error::{ExtractionError, Result};
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use std::any::Any;
use std::panic;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Turns PDF bytes into flat text, page by page.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extracts every page in document order and concatenates the results
    /// with no separator. Any failure, including a panic inside the PDF
    /// backend, fails the whole document.
    pub fn extract(bytes: &[u8]) -> std::result::Result<String, ExtractionError> {
        let pages = Self::extract_pages(bytes)?;
        debug!("Extracted {} page(s) from PDF", pages.len());
        Ok(pages.concat())
    }

    pub fn extract_pages(bytes: &[u8]) -> std::result::Result<Vec<String>, ExtractionError> {
        panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|payload| ExtractionError::Aborted(panic_message(payload.as_ref())))?
            .map_err(|e| ExtractionError::Pdf(e.to_string()))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Strips markdown syntax, keeping one line per block element.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
