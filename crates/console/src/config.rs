//! Environment-driven configuration.

use std::path::PathBuf;

use url::Url;

use velvetine_api::{Session, SessionError};

/// Configuration read from the environment.
///
/// | Variable               | Default                      |
/// |------------------------|------------------------------|
/// | `VELVETINE_API_URL`    | value from the session file  |
/// | `VELVETINE_STATE_FILE` | `.velvetine/session.json`    |
/// | `VELVETINE_LOG`        | `info` (read by the binary)  |
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL override. When unset, the session file's stored URL (or
    /// the built-in default) is used.
    pub api_base_url: Option<Url>,
    /// Where the session state file lives.
    pub state_file: PathBuf,
}

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

impl ConsoleConfig {
    /// Read configuration from the environment, loading `.env` first when
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if `VELVETINE_API_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is the common case, not an error.
        let _ = dotenvy::dotenv();

        let api_base_url = match get_env("VELVETINE_API_URL") {
            Some(raw) => Some(Url::parse(&raw).map_err(|err| ConfigError::Invalid {
                name: "VELVETINE_API_URL",
                message: err.to_string(),
            })?),
            None => None,
        };

        let state_file = get_env("VELVETINE_STATE_FILE")
            .map_or_else(|| PathBuf::from(".velvetine/session.json"), PathBuf::from);

        Ok(Self {
            api_base_url,
            state_file,
        })
    }

    /// Load the persistent session this configuration points at, applying
    /// the environment's base URL override when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file exists but cannot be read.
    pub fn session(&self) -> Result<Session, SessionError> {
        let session = Session::load(&self.state_file)?;
        if let Some(base_url) = &self.api_base_url {
            session.set_base_url(base_url.clone());
        }
        Ok(session)
    }
}

fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
