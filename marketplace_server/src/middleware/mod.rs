mod api_key;
mod scope;

pub use api_key::{is_public_path, ApiKeyAuthFactory, ApiKeyAuthService};
pub use scope::{ScopeGuardFactory, ScopeGuardService};
