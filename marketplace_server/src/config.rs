use std::{env, path::PathBuf};

use chrono::Duration;
use log::*;
use marketplace_common::parse_boolean_flag;
use marketplace_engine::{Fixtures, SeedConfig};

use crate::errors::ServerError;

const DEFAULT_MKT_HOST: &str = "127.0.0.1";
const DEFAULT_MKT_PORT: u16 = 8080;
const DEFAULT_TOKEN_TTL: Duration = Duration::seconds(3600);

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// If true, requests are not required to carry an `x-api-key` header. Bearer tokens are still honoured, so
    /// scope-gated endpoints keep working.
    pub disable_auth: bool,
    /// Start (and reset) with an empty store.
    pub no_seed: bool,
    /// When set, the store is populated by the random generator configured from this JSON file instead of the
    /// static fixtures.
    pub seed_config: Option<PathBuf>,
    /// Lifetime of tokens handed out by the token endpoint.
    pub token_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MKT_HOST.to_string(),
            port: DEFAULT_MKT_PORT,
            disable_auth: false,
            no_seed: false,
            seed_config: None,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("MKT_HOST").ok().unwrap_or_else(|| DEFAULT_MKT_HOST.into());
        let port = env::var("MKT_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for MKT_PORT. {e} Using the default, {DEFAULT_MKT_PORT}, instead."
                    );
                    DEFAULT_MKT_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_MKT_PORT);
        let disable_auth = parse_boolean_flag(env::var("MKT_DISABLE_AUTH").ok(), false);
        if disable_auth {
            warn!("🪛️ MKT_DISABLE_AUTH is set. Requests will not be checked for an x-api-key header.");
        }
        let no_seed = parse_boolean_flag(env::var("MKT_NO_SEED").ok(), false);
        let seed_config = env::var("MKT_SEED_CONFIG").ok().filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        let token_ttl = configure_token_ttl();
        Self { host, port, disable_auth, no_seed, seed_config, token_ttl }
    }

    /// Decides how the store is populated at startup and on every admin reset.
    ///
    /// `no_seed` wins over a seed configuration file. A seed file that cannot be read or parsed is a configuration
    /// error, rather than a silent fallback to the static data.
    pub fn fixtures(&self) -> Result<Fixtures, ServerError> {
        if self.no_seed {
            return Ok(Fixtures::Empty);
        }
        match &self.seed_config {
            None => Ok(Fixtures::Static),
            Some(path) => {
                let config = SeedConfig::load(path).map_err(|e| {
                    ServerError::ConfigurationError(format!("Could not load seed config {}. {e}", path.display()))
                })?;
                info!("🪛️ Using random fixtures from {}", path.display());
                Ok(Fixtures::Random(config))
            },
        }
    }
}

fn configure_token_ttl() -> Duration {
    env::var("MKT_TOKEN_TTL")
        .map_err(|_| {
            debug!("🪛️ MKT_TOKEN_TTL is not set. Using the default value of {}s.", DEFAULT_TOKEN_TTL.num_seconds())
        })
        .and_then(|s| {
            s.parse::<i64>()
                .map_err(|e| warn!("🪛️ Invalid configuration value for MKT_TOKEN_TTL. {e}"))
                .and_then(|secs| {
                    if secs > 0 {
                        Ok(Duration::seconds(secs))
                    } else {
                        warn!("🪛️ MKT_TOKEN_TTL must be positive. Ignoring {secs}.");
                        Err(())
                    }
                })
        })
        .ok()
        .unwrap_or(DEFAULT_TOKEN_TTL)
}
