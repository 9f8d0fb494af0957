//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **MarkdownStage** - Convert markdown to an HTML fragment
//! 2. **HighlightStage** - Replace annotated code blocks with highlighted markup
//! 3. **TemplateStage** - Render the page template with content and stylesheet
//! 4. **WriteStage** - Write the page to the output sink

mod highlight;
mod markdown;
mod template;
mod write;

pub use highlight::HighlightStage;
pub use markdown::MarkdownStage;
pub use template::TemplateStage;
pub use write::WriteStage;
