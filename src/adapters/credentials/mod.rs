//! Credential sources and the resolver that searches them in order.

mod env_source;
mod resolver;
mod secrets_file_source;
mod settings_source;

pub use env_source::EnvCredentialSource;
pub use resolver::CredentialResolver;
pub use secrets_file_source::{SecretsFileCredentialSource, SecretsFileError};
pub use settings_source::SettingsCredentialSource;
