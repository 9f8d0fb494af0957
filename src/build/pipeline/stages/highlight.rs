//! Code block highlighting stage.

use crate::build::code_blocks::highlight_code_blocks;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that syntax-highlights every `code[class*="language-"]` element
/// in the HTML fragment.
///
/// Either every block is processed or the stage fails; a partially
/// highlighted fragment never replaces `doc.content`.
pub struct HighlightStage;

impl Stage for HighlightStage {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let output = highlight_code_blocks(&doc.content, ctx.highlighter)?;
        tracing::info!(
            highlighted = output.highlighted,
            skipped = output.skipped,
            theme = ctx.highlighter.theme_name(),
            "highlighted code blocks"
        );

        doc.content = output.html;
        Ok(())
    }
}
