//! Server configuration.
//!
//! Read from environment variables at start-up:
//!
//! - `ROUTES_ADDR`: socket address to listen on (default `127.0.0.1:3000`)
//! - `ROUTES_SEED`: optional path to a JSON seed file for the rail network
//! - `ROUTES_MAX_CITIES`, `ROUTES_MAX_CANDIDATES`, `ROUTES_MAX_EXPLORED`:
//!   search safety limits

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

/// Configuration for the route server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,

    /// Seed file for the rail network, if any.
    pub seed: Option<PathBuf>,

    /// Route search limits.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = parse_var(&lookup, "ROUTES_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let seed = lookup("ROUTES_SEED")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let defaults = SearchConfig::default();
        let search = SearchConfig::new(
            parse_var(&lookup, "ROUTES_MAX_CITIES")?.unwrap_or(defaults.max_cities),
            parse_var(&lookup, "ROUTES_MAX_CANDIDATES")?.unwrap_or(defaults.max_candidates),
            parse_var(&lookup, "ROUTES_MAX_EXPLORED")?.unwrap_or(defaults.max_explored),
        );

        Ok(Self { addr, seed, search })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError { var, value }),
        },
    }
}
