//! OAuth2 access and refresh tokens.
//!
//! Tokens are never modified. A refresh issues a brand new pair and leaves the old entry in place; the old access
//! token stays usable until it expires.
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use log::*;
use parking_lot::RwLock;
use rand::{thread_rng, Rng};

use crate::credentials::Scope;

/// Number of random bytes in every issued token.
const TOKEN_ENTROPY_BYTES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: i64,
    pub scopes: Vec<Scope>,
    pub expires_at: DateTime<Utc>,
}

impl TokenEntry {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    pub fn has_scope(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }
}

/// `"{user_id}.{32 hex chars}"`. The random part makes collisions practically impossible, so the registry is never
/// consulted.
pub fn generate_token(user_id: i64) -> String {
    let bytes = thread_rng().gen::<[u8; TOKEN_ENTROPY_BYTES]>();
    let hex = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
    format!("{user_id}.{hex}")
}

#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: RwLock<HashMap<String, TokenEntry>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with a day-long, all-scopes token for each of the two fixture users.
    pub fn with_test_tokens() -> Self {
        let registry = Self::new();
        let expires_at = Utc::now() + Duration::hours(24);
        for (access, refresh, user_id) in [("test-token-alice", "refresh-alice", 1001), ("test-token-bob", "refresh-bob", 1002)]
        {
            registry.store(TokenEntry {
                access_token: access.into(),
                refresh_token: refresh.into(),
                user_id,
                scopes: Scope::all(),
                expires_at,
            });
        }
        registry
    }

    /// The entry for `access_token`, unless it has expired.
    pub fn get(&self, access_token: &str) -> Option<TokenEntry> {
        self.tokens.read().get(access_token).filter(|t| !t.is_expired()).cloned()
    }

    /// Linear scan for the entry whose refresh token matches.
    pub fn get_by_refresh(&self, refresh_token: &str) -> Option<TokenEntry> {
        self.tokens.read().values().find(|t| t.refresh_token == refresh_token).cloned()
    }

    /// Inserts the entry, replacing any entry with the same access token.
    pub fn store(&self, entry: TokenEntry) {
        self.tokens.write().insert(entry.access_token.clone(), entry);
    }

    /// Issues and stores a new token pair.
    pub fn issue(&self, user_id: i64, scopes: Vec<Scope>, ttl: Duration) -> TokenEntry {
        let entry = TokenEntry {
            access_token: generate_token(user_id),
            refresh_token: format!("refresh_{}", generate_token(user_id)),
            user_id,
            scopes,
            expires_at: Utc::now() + ttl,
        };
        self.store(entry.clone());
        debug!("🔐️ Issued token pair for user {user_id}, valid until {}", entry.expires_at);
        entry
    }

    /// Exchanges a refresh token for a fresh pair bound to the same user and scopes. `None` if the refresh token is
    /// unknown. The superseded pair is not revoked.
    pub fn refresh(&self, refresh_token: &str, ttl: Duration) -> Option<TokenEntry> {
        let previous = self.get_by_refresh(refresh_token)?;
        Some(self.issue(previous.user_id, previous.scopes, ttl))
    }
}
