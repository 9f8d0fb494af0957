//! Pipeline context for sharing state across stages.

use std::io::Write;

use crate::build::highlight::SyntaxHighlighter;
use crate::build::render::Renderer;
use crate::config::MarkdownConfig;

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Markdown processing configuration
    pub markdown_config: &'a MarkdownConfig,

    /// Syntax highlighter for code blocks and the page stylesheet
    pub highlighter: &'a SyntaxHighlighter,

    /// Page template renderer
    pub renderer: &'a Renderer,

    /// Where the finished page is written (stdout for the CLI)
    pub output: &'a mut dyn Write,
}

impl<'a> PipelineContext<'a> {
    pub fn new(
        markdown_config: &'a MarkdownConfig,
        highlighter: &'a SyntaxHighlighter,
        renderer: &'a Renderer,
        output: &'a mut dyn Write,
    ) -> Self {
        Self {
            markdown_config,
            highlighter,
            renderer,
            output,
        }
    }
}
