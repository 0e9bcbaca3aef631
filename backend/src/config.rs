//! Runtime configuration for the viewer.
//!
//! Every setting comes from the process environment. `load` first pulls in an
//! optional `.env` file through `dotenvy`, so a local checkout can keep its
//! database path next to the binary without exporting anything.
//!
//! | variable            | default           |
//! |---------------------|-------------------|
//! | `FISH_DB_PATH`      | `aquarium.sqlite` |
//! | `FISH_HOST`         | `127.0.0.1`       |
//! | `FISH_PORT`         | `8080`            |
//! | `FISH_OPEN_BROWSER` | `true`            |
//! | `FISH_SEED_SCRIPT`  | unset             |

use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "aquarium.sqlite";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

/// Where the `FISH` table lives. Handed to `FishDao`, which opens a fresh
/// connection from it on every call.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
    /// Open the viewer page in the desktop browser once the server is up.
    pub open_browser: bool,
    /// Script run against the database before the server starts.
    pub seed_script: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("FISH_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let host = lookup("FISH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("FISH_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: "FISH_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let open_browser = match lookup("FISH_OPEN_BROWSER") {
            Some(value) => parse_flag("FISH_OPEN_BROWSER", value)?,
            None => true,
        };

        let seed_script = lookup("FISH_SEED_SCRIPT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database: DatabaseConfig {
                path: PathBuf::from(path),
            },
            host,
            port,
            open_browser,
            seed_script,
        })
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
