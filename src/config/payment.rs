//! Payment configuration (IntaSend)

use serde::Deserialize;

use super::error::ValidationError;
use super::inference::is_http_url;

const SANDBOX_BASE_URL: &str = "https://sandbox.intasend.com";
const LIVE_BASE_URL: &str = "https://payment.intasend.com";

/// Payment configuration
///
/// Tokens here form the settings layer of credential resolution; environment
/// variables such as `INTASEND_SECRET_TOKEN` take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// IntaSend secret API token
    pub secret_token: Option<String>,

    /// IntaSend publishable key
    pub publishable_key: Option<String>,

    /// Target the sandbox environment
    #[serde(default = "default_test_mode")]
    pub test_mode: bool,

    /// Expected `challenge` value on incoming webhooks
    pub webhook_challenge: Option<String>,

    /// Override for the provider base URL
    pub base_url: Option<String>,
}

impl PaymentConfig {
    /// Provider base URL for the given mode, honouring any override
    pub fn api_base_url(&self, test_mode: bool) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if test_mode => SANDBOX_BASE_URL.to_string(),
            None => LIVE_BASE_URL.to_string(),
        }
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.base_url {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl("payment.base_url"));
            }
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_token: None,
            publishable_key: None,
            test_mode: default_test_mode(),
            webhook_challenge: None,
            base_url: None,
        }
    }
}

fn default_test_mode() -> bool {
    true
}

/// Interpret a textual test-mode flag (`1`, `true`, `yes`; case-insensitive)
pub fn parse_test_mode_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_test_mode() {
        let config = PaymentConfig::default();
        assert!(config.test_mode);
        assert_eq!(config.api_base_url(true), "https://sandbox.intasend.com");
        assert_eq!(config.api_base_url(false), "https://payment.intasend.com");
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = PaymentConfig {
            base_url: Some("http://localhost:9999/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_base_url(false), "http://localhost:9999");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_override() {
        let config = PaymentConfig {
            base_url: Some("intasend.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_test_mode_flag() {
        assert!(parse_test_mode_flag("1"));
        assert!(parse_test_mode_flag("TRUE"));
        assert!(parse_test_mode_flag(" yes "));
        assert!(!parse_test_mode_flag("0"));
        assert!(!parse_test_mode_flag("false"));
        assert!(!parse_test_mode_flag("live"));
    }
}
