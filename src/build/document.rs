use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// A markdown source document, loaded once and never modified.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the document was read from
    pub source_path: PathBuf,
    /// Raw markdown content
    pub raw_content: String,
}

impl Document {
    /// Read a markdown document from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let raw_content = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            source_path: path.to_path_buf(),
            raw_content,
        })
    }
}
