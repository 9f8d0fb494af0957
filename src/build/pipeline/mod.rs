//! Build pipeline for document processing.
//!
//! The pipeline transforms the document through a series of stages:
//! 1. Markdown rendering (to an HTML fragment)
//! 2. Code block highlighting
//! 3. Template rendering (page template wrapper plus stylesheet)
//! 4. Output writing
//!
//! Stages run strictly in order and the first error stops the run.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{HighlightStage, MarkdownStage, TemplateStage, WriteStage};

/// A stage in the document processing pipeline.
pub trait Stage {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Process the document through this stage.
    ///
    /// The document is passed by mutable reference so stages can transform
    /// its content in place. The `ctx` provides access to shared resources
    /// like the renderer and highlighter.
    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The document processing pipeline.
///
/// The default pipeline is: markdown → highlight → template → write.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(HighlightStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run the pipeline on a document.
    pub fn run(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), "running stage");
            stage.process(doc, ctx)?;
        }
        Ok(())
    }

    /// Get the names of all stages in order.
    #[cfg(test)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::build::document::Document;
    use crate::build::highlight::SyntaxHighlighter;
    use crate::build::render::Renderer;
    use crate::config::{MarkdownConfig, UnknownLanguage};

    const TEMPLATE: &str = "<html><head><style>{{ style }}</style></head><body>{{ content }}</body></html>\n";

    fn document(markdown: &str) -> ProcessingDocument {
        ProcessingDocument::new(Document {
            source_path: PathBuf::from("example.md"),
            raw_content: markdown.to_string(),
        })
    }

    fn renderer(dir: &tempfile::TempDir) -> Renderer {
        let path = dir.path().join("template.html");
        std::fs::write(&path, TEMPLATE).unwrap();
        Renderer::new(&path).unwrap()
    }

    fn run(markdown: &str, policy: UnknownLanguage) -> (Result<(), PipelineError>, String) {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer(&dir);
        let highlighter = SyntaxHighlighter::new("dracula", policy);
        let markdown_config = MarkdownConfig::default();
        let mut output: Vec<u8> = Vec::new();

        let result = {
            let mut ctx =
                PipelineContext::new(&markdown_config, &highlighter, &renderer, &mut output);
            let mut doc = document(markdown);
            Pipeline::default_pipeline().run(&mut doc, &mut ctx)
        };

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(
            Pipeline::default().stage_names(),
            vec!["markdown", "highlight", "template", "write"]
        );
    }

    #[test]
    fn test_heading_only_document() {
        let (result, output) = run("# Title", UnknownLanguage::Error);
        result.unwrap();

        let css = SyntaxHighlighter::new("dracula", UnknownLanguage::Error)
            .stylesheet()
            .unwrap();
        assert_eq!(
            output,
            format!("<html><head><style>{css}</style></head><body><h1>Title</h1>\n</body></html>\n")
        );
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let (result, output) = run(
            "Intro\n\n```rust\nfn main() { println!(\"hi\"); }\n```\n",
            UnknownLanguage::Error,
        );
        result.unwrap();

        assert!(output.contains("<p>Intro</p>"));
        assert!(output.contains("<pre class=\"athl\"><code class=\"language-rust\">"));
        assert!(output.contains("<span"));
        // the inlined stylesheet styles that block
        assert!(output.contains("pre.athl"));
        assert!(!output.contains("fn main() { println!"));
    }

    #[test]
    fn test_failure_writes_nothing() {
        let (result, output) = run(
            "```rust\nfn a() {}\n```\n\n```nosuchlang\nx\n```\n",
            UnknownLanguage::Error,
        );

        assert!(matches!(result, Err(PipelineError::CodeBlocks(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_write_requires_template_stage() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer(&dir);
        let highlighter = SyntaxHighlighter::new("dracula", UnknownLanguage::Plain);
        let markdown_config = MarkdownConfig::default();
        let mut output: Vec<u8> = Vec::new();
        let mut ctx = PipelineContext::new(&markdown_config, &highlighter, &renderer, &mut output);

        let mut pipeline = Pipeline::new();
        pipeline.add_stage(MarkdownStage).add_stage(WriteStage);
        let result = pipeline.run(&mut document("text"), &mut ctx);

        assert!(matches!(result, Err(PipelineError::Stage { stage, .. }) if stage == "write"));
    }
}
