//! Application credentials (`x-api-key: keystring:shared_secret`).
use std::collections::HashMap;

use log::*;
use marketplace_common::Secret;
use parking_lot::RwLock;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiKeyStatus {
    Valid,
    /// Revoked. Requests with this key are forbidden even with the right secret.
    Banned,
    Expired,
}

#[derive(Debug, Clone)]
pub struct ApiKeyEntry {
    pub keystring: String,
    pub shared_secret: Secret<String>,
    pub status: ApiKeyStatus,
    /// Human-readable name, for logs.
    pub label: String,
}

impl ApiKeyEntry {
    pub fn new(keystring: &str, shared_secret: &str, status: ApiKeyStatus, label: &str) -> Self {
        Self { keystring: keystring.into(), shared_secret: Secret::from(shared_secret), status, label: label.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Invalid API key: keystring not recognized")]
    UnknownKeystring,
    #[error("Invalid shared secret for the provided keystring")]
    SecretMismatch,
    #[error("This API key has been revoked or the application has been banned")]
    Banned,
    #[error("This API key has expired. Please renew your application credentials")]
    Expired,
}

#[derive(Debug, Default)]
pub struct ApiKeyRegistry {
    keys: RwLock<HashMap<String, ApiKeyEntry>>,
}

impl ApiKeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the well-known test applications, including one banned and one expired key.
    pub fn with_test_keys() -> Self {
        let registry = Self::new();
        [
            ApiKeyEntry::new("test-key", "test-secret", ApiKeyStatus::Valid, "Test App (valid)"),
            ApiKeyEntry::new("alice-app", "alice-secret", ApiKeyStatus::Valid, "Alice's App (valid)"),
            ApiKeyEntry::new("bob-app", "bob-secret", ApiKeyStatus::Valid, "Bob's App (valid)"),
            ApiKeyEntry::new("banned-app", "banned-secret", ApiKeyStatus::Banned, "Banned App (revoked)"),
            ApiKeyEntry::new("expired-app", "expired-secret", ApiKeyStatus::Expired, "Expired App"),
        ]
        .into_iter()
        .for_each(|entry| registry.register(entry));
        registry
    }

    /// Adds or replaces a key.
    pub fn register(&self, entry: ApiKeyEntry) {
        debug!("🔐️ Registered API key '{}' ({})", entry.keystring, entry.label);
        self.keys.write().insert(entry.keystring.clone(), entry);
    }

    /// Checks the keystring, then the secret, then the key's status. The status of a key is only revealed to callers
    /// that know its secret.
    pub fn validate(&self, keystring: &str, shared_secret: &str) -> Result<ApiKeyEntry, CredentialError> {
        let keys = self.keys.read();
        let entry = keys.get(keystring).ok_or(CredentialError::UnknownKeystring)?;
        if !entry.shared_secret.matches(&shared_secret.to_string()) {
            return Err(CredentialError::SecretMismatch);
        }
        match entry.status {
            ApiKeyStatus::Valid => Ok(entry.clone()),
            ApiKeyStatus::Banned => Err(CredentialError::Banned),
            ApiKeyStatus::Expired => Err(CredentialError::Expired),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation_outcomes() {
        let registry = ApiKeyRegistry::with_test_keys();
        assert_eq!(registry.validate("test-key", "test-secret").unwrap().label, "Test App (valid)");
        assert_eq!(registry.validate("nobody", "test-secret").unwrap_err(), CredentialError::UnknownKeystring);
        assert_eq!(registry.validate("test-key", "wrong").unwrap_err(), CredentialError::SecretMismatch);
        assert_eq!(registry.validate("banned-app", "banned-secret").unwrap_err(), CredentialError::Banned);
        assert_eq!(registry.validate("banned-app", "wrong").unwrap_err(), CredentialError::SecretMismatch);
        assert_eq!(registry.validate("expired-app", "expired-secret").unwrap_err(), CredentialError::Expired);
    }

    #[test]
    fn register_replaces() {
        let registry = ApiKeyRegistry::new();
        registry.register(ApiKeyEntry::new("k", "s", ApiKeyStatus::Expired, "old"));
        registry.register(ApiKeyEntry::new("k", "s", ApiKeyStatus::Valid, "new"));
        assert_eq!(registry.validate("k", "s").unwrap().label, "new");
    }
}
