//! Configuration loading and types for mdpage.
//!
//! - Type definitions for config structures (`types`)
//! - Loading configs from files (`load`)

mod load;
mod types;

pub use types::{Config, HighlightConfig, MarkdownConfig, UnknownLanguage};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("config file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),

    #[error("{0}")]
    Validation(String),
}
