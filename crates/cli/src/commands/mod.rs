//! Command implementations, one module per command group.

pub mod auth;
pub mod hero;
pub mod orders;
pub mod products;
pub mod testimonials;

use velvetine_api::{ApiClient, ApiError, SessionError};
use velvetine_console::{ConfigError, ConsoleConfig};

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session state could not be loaded or persisted.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// The API call failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A local file could not be read.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command input.
    #[error("Invalid input: {0}")]
    Input(String),
}

/// Build an API client from the environment and the stored session.
pub fn client() -> Result<ApiClient, CliError> {
    let config = ConsoleConfig::from_env()?;
    let session = config.session()?;
    Ok(ApiClient::new(session))
}

/// Resolve an `--image` argument: URLs pass through, anything else is
/// treated as a local file and uploaded.
pub async fn resolve_image(client: &ApiClient, image: &str) -> Result<String, CliError> {
    if image.starts_with("http://") || image.starts_with("https://") {
        return Ok(image.to_owned());
    }
    let bytes = std::fs::read(image)?;
    let filename = std::path::Path::new(image)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image");
    Ok(client.upload_image(filename, bytes).await?)
}
