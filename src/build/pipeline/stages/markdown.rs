//! Markdown rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that renders the markdown content to an HTML fragment.
///
/// After this stage, `doc.content` contains HTML. Code blocks are still
/// plain `<pre><code class="language-xxx">` elements.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.content = render_markdown(&doc.content, ctx.markdown_config)?;
        tracing::debug!(bytes = doc.content.len(), "rendered markdown");
        Ok(())
    }
}
