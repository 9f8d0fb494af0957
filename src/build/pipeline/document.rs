//! Document types for pipeline processing.

use crate::build::document::Document;

/// A document being processed through the pipeline.
///
/// Wraps the original `Document` with mutable state that evolves
/// through pipeline stages:
///
/// 1. Initially: `content` = raw markdown
/// 2. After markdown: `content` = HTML fragment
/// 3. After highlight: `content` = HTML fragment with highlighted code blocks
/// 4. After template: `output_html` = final page HTML
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The original document
    pub doc: Document,

    /// Content being processed.
    pub content: String,

    /// Final HTML output after template rendering.
    ///
    /// None until the template stage populates it.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    pub fn new(doc: Document) -> Self {
        let content = doc.raw_content.clone();
        Self {
            doc,
            content,
            output_html: None,
        }
    }

    /// Display name used in diagnostics.
    pub fn display_path(&self) -> String {
        self.doc.source_path.display().to_string()
    }
}
