//! Credential source port.
//!
//! A source answers "what is the value named `key`?" from one place: the
//! process environment, application settings, or a secrets file. The
//! resolver chains sources in priority order.

// Well-known credential names, in lookup order.

pub const INFERENCE_TOKEN_NAMES: &[&str] = &["HUGGING_FACE_API_KEY", "HF_TOKEN"];

pub const STORE_URL_NAMES: &[&str] = &["SUPABASE_URL"];

pub const STORE_KEY_NAMES: &[&str] = &[
    "SUPABASE_SERVICE_ROLE_KEY",
    "SUPABASE_KEY",
    "SUPABASE_ANON_KEY",
];

pub const PAYMENT_TOKEN_NAMES: &[&str] = &["INTASEND_SECRET_TOKEN"];
pub const PAYMENT_PUBLISHABLE_KEY_NAMES: &[&str] = &["INTASEND_PUBLISHABLE_KEY"];
pub const PAYMENT_TEST_MODE_NAMES: &[&str] = &["INTASEND_TEST_MODE"];

/// One place credentials can come from.
///
/// Lookups are synchronous and cheap; sources that read files do so once
/// at construction.
pub trait CredentialSource: Send + Sync {
    /// Short name for logs (never the value).
    fn name(&self) -> &str;

    /// Raw value for `key`, if this source has one. Blank values count as
    /// absent.
    fn lookup(&self, key: &str) -> Option<String>;

    /// First value found for any of `names`, tried in order.
    fn lookup_first(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.lookup(name))
    }
}
