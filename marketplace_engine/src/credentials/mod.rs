//! The identity and credential registry: application API keys and user OAuth tokens. Each registry has its own lock.
mod api_keys;
mod scopes;
mod tokens;

pub use api_keys::{ApiKeyEntry, ApiKeyRegistry, ApiKeyStatus, CredentialError};
pub use scopes::Scope;
pub use tokens::{generate_token, TokenEntry, TokenRegistry};
