//! Persistent session: API base URL plus the admin bearer token.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Base URL used when neither the environment nor the state file names one.
pub const DEFAULT_API_BASE_URL: &str = "https://api.velvetine.shop";

/// Errors loading or persisting session state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read or write session state: {0}")]
    Io(#[from] std::io::Error),

    #[error("session state file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid API base URL: {0}")]
    Url(#[from] url::ParseError),
}

/// On-disk form of the session. Tokens are stored verbatim; the state file
/// is the moral equivalent of a browser's local storage and should live
/// under the user's home directory with normal file permissions.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
}

struct State {
    base_url: Url,
    token: Option<SecretString>,
}

/// Shared mutable session handed to every [`crate::ApiClient`].
///
/// Cloning is cheap; all clones observe the same base URL and token, so a
/// login performed through one client is visible to the rest of the
/// application immediately.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<State>>,
    state_path: Option<PathBuf>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Session")
            .field("base_url", &state.base_url.as_str())
            .field(
                "token",
                &state.token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("state_path", &self.state_path)
            .finish()
    }
}

impl Session {
    /// In-memory session with the default base URL and no token. Nothing is
    /// persisted.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                // The constant is a valid URL; parsing it cannot fail.
                base_url: Url::parse(DEFAULT_API_BASE_URL)
                    .unwrap_or_else(|_| unreachable!("default base URL is valid")),
                token: None,
            })),
            state_path: None,
        }
    }

    /// Load a session from `path`, creating a default one if the file does
    /// not exist. Subsequent token changes are written back to the same
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if it names an invalid base URL.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let persisted = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<PersistedSession>(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => PersistedSession::default(),
            Err(err) => return Err(err.into()),
        };

        let base_url = match persisted.api_base_url {
            Some(raw) => Url::parse(&raw)?,
            None => Url::parse(DEFAULT_API_BASE_URL)?,
        };

        Ok(Self {
            state: Arc::new(RwLock::new(State {
                base_url,
                token: persisted.auth_token.map(SecretString::from),
            })),
            state_path: Some(path.to_path_buf()),
        })
    }

    /// Write the current session to its state file. No-op for ephemeral
    /// sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn persist(&self) -> Result<(), SessionError> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };

        let persisted = {
            let state = self.read();
            PersistedSession {
                api_base_url: Some(state.base_url.as_str().to_owned()),
                auth_token: state
                    .token
                    .as_ref()
                    .map(|token| token.expose_secret().to_owned()),
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&persisted)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Current API base URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        self.read().base_url.clone()
    }

    /// Replace the API base URL.
    pub fn set_base_url(&self, base_url: Url) {
        self.write().base_url = base_url;
    }

    /// Current bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.read().token.clone()
    }

    /// Whether the session holds a token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Store a bearer token (after login).
    pub fn set_token(&self, token: SecretString) {
        self.write().token = Some(token);
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        self.write().token = None;
    }

    // A poisoned lock only means another thread panicked mid-write of a
    // plain field swap; the data is still coherent, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
