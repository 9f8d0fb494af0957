use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("template {} does not use the '{placeholder}' placeholder", .path.display())]
    MissingPlaceholder {
        path: PathBuf,
        placeholder: &'static str,
    },
}

/// Name the page template is registered under.
const PAGE_TEMPLATE: &str = "page";

/// The page template renderer, wrapping Tera.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load the page template from a single file.
    ///
    /// Autoescaping is off: `content` is HTML and `style` is CSS, both
    /// inserted verbatim. The template must output both placeholders.
    pub fn new(template_path: &Path) -> Result<Self, RenderError> {
        if !template_path.is_file() {
            return Err(RenderError::TemplateNotFound(template_path.to_path_buf()));
        }

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_template_file(template_path, Some(PAGE_TEMPLATE))?;

        let renderer = Self { tera };
        renderer.check_placeholders(template_path)?;
        Ok(renderer)
    }

    /// Render with marker values and make sure each one reaches the output.
    fn check_placeholders(&self, template_path: &Path) -> Result<(), RenderError> {
        const CONTENT_MARKER: &str = "\u{1}mdpage:content\u{1}";
        const STYLE_MARKER: &str = "\u{1}mdpage:style\u{1}";

        let probe = self.render_page(&PageContext {
            content: CONTENT_MARKER.to_string(),
            style: STYLE_MARKER.to_string(),
        })?;

        for (placeholder, marker) in [("content", CONTENT_MARKER), ("style", STYLE_MARKER)] {
            if !probe.contains(marker) {
                return Err(RenderError::MissingPlaceholder {
                    path: template_path.to_path_buf(),
                    placeholder,
                });
            }
        }
        Ok(())
    }

    /// Render the page with the given context.
    pub fn render_page(&self, context: &PageContext) -> Result<String, RenderError> {
        let tera_context = Context::from_serialize(context)?;
        Ok(self.tera.render(PAGE_TEMPLATE, &tera_context)?)
    }
}

/// Context passed to the page template.
#[derive(Debug, Serialize)]
pub struct PageContext {
    /// Highlighted HTML body
    pub content: String,
    /// Stylesheet for the highlighting theme
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(dir: &tempfile::TempDir, source: &str) -> PathBuf {
        let path = dir.path().join("template.html");
        std::fs::write(&path, source).unwrap();
        path
    }

    #[test]
    fn test_render_page_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = template(
            &dir,
            "<style>{{ style }}</style><main>{{ content }}</main>",
        );

        let renderer = Renderer::new(&path).unwrap();
        let html = renderer
            .render_page(&PageContext {
                content: "<p>a & b</p>".to_string(),
                style: "pre > code { color: red; }".to_string(),
            })
            .unwrap();

        assert_eq!(
            html,
            "<style>pre > code { color: red; }</style><main><p>a & b</p></main>"
        );
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let result = Renderer::new(&dir.path().join("template.html"));

        assert!(matches!(result, Err(RenderError::TemplateNotFound(_))));
    }

    #[test]
    fn test_missing_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = template(&dir, "<main>{{ content }}</main>");

        let result = Renderer::new(&path);
        assert!(matches!(
            result,
            Err(RenderError::MissingPlaceholder { placeholder: "style", .. })
        ));
    }

    #[test]
    fn test_unbound_variable() {
        let dir = tempfile::tempdir().unwrap();
        let path = template(&dir, "{{ style }}{{ content }}{{ title }}");

        let result = Renderer::new(&path);
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_malformed_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = template(&dir, "{{ style }}{{ content ");

        let result = Renderer::new(&path);
        assert!(matches!(result, Err(RenderError::Template(_))));
    }
}
