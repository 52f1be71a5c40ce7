//! Shared helpers: in-memory PDFs and fake generators

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_analyzer::error::GenerationError;
use resume_analyzer::llm::{AnalysisMode, PromptTemplate, TextGenerator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Builds a PDF with one page per entry. An empty entry produces a page that
/// only paints a rectangle, like a scanned image with no text layer.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            vec![
                Operation::new("re", vec![50.into(), 50.into(), 200.into(), 200.into()]),
                Operation::new("f", vec![]),
            ]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize pdf");
    bytes
}

/// Returns a canned response and records every call.
pub struct StubGenerator {
    response: String,
    calls: AtomicUsize,
    seen: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub mode: AnalysisMode,
    pub instruction: String,
    pub resume_text: String,
    pub job_description: String,
}

impl StubGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.seen.lock().unwrap().clone()
    }
}

impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        template: &PromptTemplate,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(RecordedCall {
            mode: template.mode(),
            instruction: template.text().to_string(),
            resume_text: resume_text.to_string(),
            job_description: job_description.to_string(),
        });
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}

/// Always fails the way an over-quota provider does.
pub struct FailingGenerator {
    calls: AtomicUsize,
}

impl FailingGenerator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _template: &PromptTemplate,
        _resume_text: &str,
        _job_description: &str,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GenerationError::Api {
            status: 429,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        })
    }
}
