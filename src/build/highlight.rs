use autumnus::{HtmlLinkedBuilder, formatter::Formatter, languages::Language, themes};

use crate::config::{HighlightConfig, UnknownLanguage};

#[derive(thiserror::Error, Debug)]
pub enum HighlightError {
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    #[error("failed to format {language} code: {message}")]
    Format { language: String, message: String },
}

/// A syntax highlighter using autumnus (tree-sitter based).
///
/// Code is rendered with CSS classes rather than inline styles, so the one
/// configured theme only shows up in [`SyntaxHighlighter::stylesheet`].
pub struct SyntaxHighlighter {
    theme_name: String,
    unknown_language: UnknownLanguage,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the given theme.
    pub fn new(theme_name: &str, unknown_language: UnknownLanguage) -> Self {
        Self {
            theme_name: theme_name.to_string(),
            unknown_language,
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(&config.theme, config.unknown_language)
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Highlight code and return HTML with CSS classes.
    ///
    /// Returns `Ok(None)` when the code should be left as it is: plain text
    /// languages, and unknown languages under the `plain` policy.
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>, HighlightError> {
        if language == "plaintext" || language == "text" {
            return Ok(None);
        }

        // Resolve by name or extension only; the source is never sniffed
        let lang = if language.is_empty() {
            Language::PlainText
        } else {
            Language::guess(language, "")
        };

        if matches!(lang, Language::PlainText) {
            return match self.unknown_language {
                UnknownLanguage::Plain => {
                    tracing::warn!(language, "no grammar for language, leaving code block as is");
                    Ok(None)
                }
                UnknownLanguage::Error => {
                    Err(HighlightError::UnsupportedLanguage(language.to_string()))
                }
            };
        }

        let format_error = |message: String| HighlightError::Format {
            language: language.to_string(),
            message,
        };

        let formatter = HtmlLinkedBuilder::new()
            .source(code)
            .lang(lang)
            .build()
            .map_err(|e| format_error(e.to_string()))?;

        let mut output: Vec<u8> = Vec::new();
        formatter
            .format(&mut output)
            .map_err(|e| format_error(e.to_string()))?;

        String::from_utf8(output)
            .map(Some)
            .map_err(|e| format_error(e.to_string()))
    }

    /// Generate CSS for the current theme.
    pub fn stylesheet(&self) -> Result<String, HighlightError> {
        let theme = themes::get(&self.theme_name)
            .map_err(|_| HighlightError::ThemeNotFound(self.theme_name.clone()))?;
        Ok(theme.css(false)) // false = don't enable italic
    }
}
