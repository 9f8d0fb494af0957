//! Configuration loading from files.

use std::path::Path;

use super::{Config, ConfigError};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mdpage.yaml";

impl Config {
    /// Load the config from the command line argument.
    ///
    /// Without an argument, `mdpage.yaml` is used if it exists and the
    /// defaults apply otherwise. A file named explicitly must exist.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match config_file {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if required && !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        Self::load_from_file(path, required)
    }

    /// Load the config from a file path, layered over the defaults.
    pub(crate) fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let config: Config = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Yaml)
                    .required(required),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.highlight.theme.trim().is_empty() {
            return Err(ConfigError::Validation(
                "highlight.theme must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownLanguage;

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(&dir.path().join("mdpage.yaml"), false).unwrap();

        assert_eq!(config.highlight.theme, "github_light");
        assert_eq!(config.highlight.unknown_language, UnknownLanguage::Plain);
        assert!(config.markdown.extensions.is_empty());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");

        let result = Config::load_from_arg(Some(&path));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdpage.yaml");
        std::fs::write(
            &path,
            "highlight:\n  theme: dracula\n  unknown_language: error\nmarkdown:\n  extensions: [tables]\n",
        )
        .unwrap();

        let config = Config::load_from_arg(Some(&path)).unwrap();
        assert_eq!(config.highlight.theme, "dracula");
        assert_eq!(config.highlight.unknown_language, UnknownLanguage::Error);
        assert_eq!(config.markdown.extensions, vec!["tables".to_string()]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdpage.yaml");
        std::fs::write(&path, "highlight:\n  unknown_language: error\n").unwrap();

        let config = Config::load_from_arg(Some(&path)).unwrap();
        assert_eq!(config.highlight.theme, "github_light");
        assert_eq!(config.highlight.unknown_language, UnknownLanguage::Error);
    }

    #[test]
    fn test_empty_theme_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdpage.yaml");
        std::fs::write(&path, "highlight:\n  theme: \"\"\n").unwrap();

        let result = Config::load_from_arg(Some(&path));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
