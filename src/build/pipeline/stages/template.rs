//! Page template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::render::PageContext;

/// Stage that applies the page template to the highlighted content.
///
/// The stylesheet comes from the same theme the highlighter was built
/// with. After this stage, `doc.output_html` contains the complete page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let page_context = PageContext {
            content: doc.content.clone(),
            style: ctx.highlighter.stylesheet()?,
        };

        let html = ctx.renderer.render_page(&page_context)?;
        tracing::debug!(bytes = html.len(), "rendered page template");

        doc.output_html = Some(html);
        Ok(())
    }
}
