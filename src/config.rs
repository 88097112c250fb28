use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbPoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool: DbPoolConfig,
    pub argon2: Argon2Config,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let database_url = required("DATABASE_URL")?;
        let host = required("HOST")?;
        let port = parse(&lookup, "PORT", None)?;

        let pool = DbPoolConfig {
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", Some(50))?,
            min_connections: parse(&lookup, "DB_MIN_CONNECTIONS", Some(5))?,
            connect_timeout: Duration::from_secs(parse(
                &lookup,
                "DB_CONNECT_TIMEOUT_SECS",
                Some(5),
            )?),
            idle_timeout: Duration::from_secs(parse(&lookup, "DB_IDLE_TIMEOUT_SECS", Some(300))?),
        };

        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let argon2 = Argon2Config {
            memory_kib: parse(&lookup, "ARGON2_MEMORY_KIB", Some(4 * 1024))?,
            iterations: parse(&lookup, "ARGON2_ITERATIONS", Some(3))?,
            parallelism: parse(&lookup, "ARGON2_PARALLELISM", Some(1))?,
        };

        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: pool.min_connections.to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            pool,
            argon2,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match (lookup(key), default) {
        (Some(raw), _) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError::Missing(key)),
    }
}
