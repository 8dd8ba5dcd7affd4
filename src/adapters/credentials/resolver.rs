//! Credential resolution across ordered sources.

use secrecy::SecretString;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::ports::CredentialSource;

use super::{EnvCredentialSource, SecretsFileCredentialSource, SettingsCredentialSource};

/// Resolves a secret by trying every source in priority order, and within
/// each source every candidate name in order.
#[derive(Clone, Default)]
pub struct CredentialResolver {
    sources: Vec<Arc<dyn CredentialSource>>,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source with lower priority than those already added.
    pub fn with_source(mut self, source: Arc<dyn CredentialSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Process environment first, then settings, then the secrets file.
    ///
    /// An unreadable secrets file is logged and skipped.
    pub fn standard(config: &AppConfig) -> Self {
        let resolver = Self::new()
            .with_source(Arc::new(EnvCredentialSource::new()))
            .with_source(Arc::new(SettingsCredentialSource::from_config(config)));

        match SecretsFileCredentialSource::load(&config.inference.secrets_path) {
            Ok(source) if !source.is_empty() => resolver.with_source(Arc::new(source)),
            Ok(_) => resolver,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable secrets file");
                resolver
            }
        }
    }

    /// First non-empty value, or `None` when nothing is configured.
    pub fn resolve(&self, names: &[&str]) -> Option<SecretString> {
        self.resolve_plain(names).map(SecretString::new)
    }

    /// Same lookup for values that are not secret (URLs, flags).
    pub fn resolve_plain(&self, names: &[&str]) -> Option<String> {
        for source in &self.sources {
            for name in names {
                if let Some(value) = source.lookup(name) {
                    let value = value.trim();
                    if !value.is_empty() {
                        tracing::trace!(source = source.name(), key = *name, "Resolved credential");
                        return Some(value.to_string());
                    }
                }
            }
        }
        None
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

/// The resolver is itself a source, so callers can depend on the port.
/// Multi-name lookups keep source priority ahead of name order.
impl CredentialSource for CredentialResolver {
    fn name(&self) -> &str {
        "resolver"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.resolve_plain(&[key])
    }

    fn lookup_first(&self, names: &[&str]) -> Option<String> {
        self.resolve_plain(names)
    }
}

impl std::fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("sources", &self.source_names())
            .finish()
    }
}
