mod code_blocks;
mod document;
mod highlight;
mod markdown;
pub mod pipeline;
mod render;

pub use document::Document;
pub use highlight::SyntaxHighlighter;
pub use render::Renderer;
