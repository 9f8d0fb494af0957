//! Syntax highlighting of code blocks inside a rendered HTML fragment.
//!
//! The fragment is parsed into an html5ever tree, every
//! `code[class*="language-"]` element has its children replaced with
//! highlighted markup, and the tree is serialized back. Only the children
//! of `<body>` are written out, so the `<html>`/`<head>`/`<body>` wrappers the
//! parser synthesizes never reach the output.

use kuchikiki::NodeRef;
use kuchikiki::traits::TendrilSink;

use super::highlight::{HighlightError, SyntaxHighlighter};

const CODE_BLOCK_SELECTOR: &str = r#"code[class*="language-"]"#;
const LANGUAGE_PREFIX: &str = "language-";

#[derive(thiserror::Error, Debug)]
pub enum CodeBlockError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("code block {index} ({language:?}): {source}")]
    Highlight {
        index: usize,
        language: String,
        #[source]
        source: HighlightError,
    },

    #[error("failed to serialize HTML: {0}")]
    Serialize(#[from] std::io::Error),
}

/// Result of highlighting a fragment.
#[derive(Debug)]
pub struct HighlightedFragment {
    pub html: String,
    /// Code blocks whose content was replaced
    pub highlighted: usize,
    /// Code blocks left untouched (plain text or unknown language)
    pub skipped: usize,
}

/// Highlight every annotated code block in `fragment`.
///
/// Blocks are processed in document order. The first failing block aborts
/// the whole fragment; nothing partially highlighted is returned.
pub fn highlight_code_blocks(
    fragment: &str,
    highlighter: &SyntaxHighlighter,
) -> Result<HighlightedFragment, CodeBlockError> {
    let document = kuchikiki::parse_html().one(fragment);

    let blocks: Vec<_> = document
        .select(CODE_BLOCK_SELECTOR)
        .map_err(|()| CodeBlockError::Parse(format!("invalid selector {CODE_BLOCK_SELECTOR}")))?
        .collect();

    let mut highlighted = 0;
    let mut skipped = 0;

    for (index, block) in blocks.iter().enumerate() {
        // `class*=` also matches e.g. "nolanguage-x", which has no language token
        let Some(language) = language_of(block.attributes.borrow().get("class")) else {
            skipped += 1;
            continue;
        };

        let code = block.as_node().text_contents();
        let markup = highlighter
            .highlight(&code, &language)
            .map_err(|source| CodeBlockError::Highlight {
                index: index + 1,
                language: language.clone(),
                source,
            })?;

        match markup {
            Some(markup) => {
                replace_children(block.as_node(), &markup)?;
                highlighted += 1;
            }
            None => skipped += 1,
        }
    }

    Ok(HighlightedFragment {
        html: serialize_fragment(&document)?,
        highlighted,
        skipped,
    })
}

/// Extract the language from a class attribute: the first token that
/// starts with `language-`, with the prefix removed.
fn language_of(class: Option<&str>) -> Option<String> {
    class?
        .split_ascii_whitespace()
        .find_map(|token| token.strip_prefix(LANGUAGE_PREFIX))
        .map(str::to_string)
}

/// Replace the children of `node` with the nodes of `markup`.
///
/// The highlighter wraps its output in its own `<pre><code>`; only the
/// contents of that inner `<code>` are spliced in. The classes of its `<pre>`
/// carry the theme's base colors, so they move to the enclosing `<pre>`.
fn replace_children(node: &NodeRef, markup: &str) -> Result<(), CodeBlockError> {
    let parsed = kuchikiki::parse_html().one(markup);
    let source = match parsed.select_first("code") {
        Ok(code) => code.as_node().clone(),
        Err(()) => body_of(&parsed)?,
    };

    if let Ok(pre) = parsed.select_first("pre") {
        let attributes = pre.attributes.borrow();
        if let Some(classes) = attributes.get("class") {
            add_parent_pre_classes(node, classes);
        }
    }

    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
    for child in source.children().collect::<Vec<_>>() {
        node.append(child);
    }
    Ok(())
}

/// Merge `classes` into the class attribute of `node`'s parent if it is a `<pre>`.
fn add_parent_pre_classes(node: &NodeRef, classes: &str) {
    let Some(parent) = node.parent() else {
        return;
    };
    let Some(element) = parent.as_element() else {
        return;
    };
    if &*element.name.local != "pre" {
        return;
    }

    let mut attributes = element.attributes.borrow_mut();
    let mut merged: Vec<String> = attributes
        .get("class")
        .map(|existing| existing.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    for class in classes.split_ascii_whitespace() {
        if !merged.iter().any(|c| c == class) {
            merged.push(class.to_string());
        }
    }
    attributes.insert("class", merged.join(" "));
}

fn body_of(document: &NodeRef) -> Result<NodeRef, CodeBlockError> {
    document
        .select_first("body")
        .map(|body| body.as_node().clone())
        .map_err(|()| CodeBlockError::Parse("document has no <body>".to_string()))
}

/// Serialize the children of `<body>`, i.e. the original fragment.
fn serialize_fragment(document: &NodeRef) -> Result<String, CodeBlockError> {
    let body = body_of(document)?;

    let mut output: Vec<u8> = Vec::new();
    for child in body.children() {
        child.serialize(&mut output)?;
    }

    String::from_utf8(output).map_err(|e| {
        CodeBlockError::Serialize(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
