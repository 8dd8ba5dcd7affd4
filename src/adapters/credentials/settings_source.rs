//! Application settings credential source.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::ports::CredentialSource;

/// Credentials supplied through [`AppConfig`], keyed by their legacy
/// environment variable names.
#[derive(Debug, Clone, Default)]
pub struct SettingsCredentialSource {
    values: HashMap<String, SecretString>,
}

impl SettingsCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under `key`; blank values are ignored.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.values
                .insert(key.into(), SecretString::new(value.trim().to_string()));
        }
        self
    }

    fn with_optional(self, key: &str, value: Option<&String>) -> Self {
        match value {
            Some(v) => self.with_value(key, v.clone()),
            None => self,
        }
    }

    /// Maps configuration fields onto the names the resolver asks for.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_optional("HUGGING_FACE_API_KEY", config.inference.api_key.as_ref())
            .with_optional("SUPABASE_URL", config.store.url.as_ref())
            .with_optional("SUPABASE_KEY", config.store.key.as_ref())
            .with_optional("INTASEND_SECRET_TOKEN", config.payment.secret_token.as_ref())
            .with_optional(
                "INTASEND_PUBLISHABLE_KEY",
                config.payment.publishable_key.as_ref(),
            )
            .with_value(
                "INTASEND_TEST_MODE",
                if config.payment.test_mode { "true" } else { "false" },
            )
    }
}

impl CredentialSource for SettingsCredentialSource {
    fn name(&self) -> &str {
        "settings"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|v| v.expose_secret().clone())
    }
}
