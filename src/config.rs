//! Process configuration read from the environment.
//!
//! The binary calls [`dotenvy::dotenv`] first, so a `.env` file in the
//! working directory can supply any of these variables:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | required |
//! | `GUILD_BOARD_POOL_SIZE` | `8` |
//! | `GUILD_BOARD_LOG` | `guild_board=info` |

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

const DATABASE_URL: &str = "DATABASE_URL";
const POOL_SIZE: &str = "GUILD_BOARD_POOL_SIZE";
const LOG_DIRECTIVE: &str = "GUILD_BOARD_LOG";

const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_LOG_DIRECTIVE: &str = "guild_board=info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    /// A variable is set to a value that cannot be used.
    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
        /// What was expected instead.
        reason: &'static str,
    },
}

/// Guild board process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildBoardConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_directive: String,
}

impl GuildBoardConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a value
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL))?;

        let pool_size = match lookup(POOL_SIZE) {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => parse_pool_size(&raw)?,
        };

        let log_directive = lookup(LOG_DIRECTIVE)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_owned());

        Ok(Self {
            database_url,
            pool_size,
            log_directive,
        })
    }

    /// Builds a `PostgreSQL` connection pool shared by the quest and
    /// adventurer adapters.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when the pool cannot establish its initial
    /// connections.
    pub fn connect(&self) -> Result<Pool<ConnectionManager<PgConnection>>, PoolError> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        Pool::builder().max_size(self.pool_size).build(manager)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: POOL_SIZE,
        value: raw.to_owned(),
        reason: "expected a positive integer",
    };
    let size = raw.trim().parse::<u32>().map_err(|_| invalid())?;
    if size == 0 {
        return Err(invalid());
    }
    Ok(size)
}
