//! TOML secrets-file credential source.
//!
//! Reads the UI framework's secrets store (`.streamlit/secrets.toml`). Only
//! top-level scalar entries are used.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::ports::CredentialSource;

#[derive(Debug, Error)]
pub enum SecretsFileError {
    #[error("failed to read secrets file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse secrets file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Credentials loaded once from a TOML file.
#[derive(Debug, Clone, Default)]
pub struct SecretsFileCredentialSource {
    values: HashMap<String, String>,
}

impl SecretsFileCredentialSource {
    /// Loads `path`. A missing file yields an empty source: the process is
    /// not running inside the UI framework.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SecretsFileError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SecretsFileError::Read {
                    path: display,
                    source,
                })
            }
        };

        Self::parse(&content).map_err(|source| SecretsFileError::Parse {
            path: display,
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = content.parse()?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Integer(i) => i.to_string(),
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CredentialSource for SecretsFileCredentialSource {
    fn name(&self) -> &str {
        "secrets_file"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_top_level_scalars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "HF_TOKEN = \"hf_from_file\"\nINTASEND_TEST_MODE = false\n\n[connections]\nurl = \"ignored\""
        )
        .unwrap();

        let source = SecretsFileCredentialSource::load(file.path()).unwrap();

        assert_eq!(source.lookup("HF_TOKEN").as_deref(), Some("hf_from_file"));
        assert_eq!(source.lookup("INTASEND_TEST_MODE").as_deref(), Some("false"));
        assert_eq!(source.lookup("url"), None);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = SecretsFileCredentialSource::load(dir.path().join("secrets.toml")).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "HF_TOKEN = ").unwrap();

        let result = SecretsFileCredentialSource::load(file.path());
        assert!(matches!(result, Err(SecretsFileError::Parse { .. })));
    }
}
