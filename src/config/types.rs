//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use serde::{Deserialize, Serialize};

/// Top-level configuration, read from `mdpage.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Markdown processing settings
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Code block highlighting and stylesheet settings
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// Markdown processing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing.
    /// Empty means plain CommonMark.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Highlighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Theme used for both code block markup and the generated stylesheet
    #[serde(default = "default_theme")]
    pub theme: String,

    /// What to do with a code block whose language has no grammar
    #[serde(default)]
    pub unknown_language: UnknownLanguage,
}

fn default_theme() -> String {
    "github_light".to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            unknown_language: UnknownLanguage::default(),
        }
    }
}

/// Policy for code blocks annotated with a language we cannot highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLanguage {
    /// Leave the block as rendered by the markdown stage
    #[default]
    Plain,
    /// Abort the whole run
    Error,
}
