//! Authentication and connectivity commands.
//!
//! # Usage
//!
//! ```bash
//! # Log in; the password is read from VELVETINE_PASSWORD or prompted
//! velvetine auth login -e admin@velvetine.shop
//!
//! # Drop the stored token
//! velvetine auth logout
//! ```

use std::io::Write as _;

use super::{client, CliError};

/// Log in as an admin and store the bearer token in the session file.
///
/// The password is taken from `VELVETINE_PASSWORD` when set, otherwise
/// read from standard input.
pub async fn login(email: &str) -> Result<(), CliError> {
    let password = match std::env::var("VELVETINE_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => prompt_password()?,
    };

    let client = client()?;
    client.login(email, &password).await?;
    tracing::info!("Logged in as {email}");
    Ok(())
}

/// Drop the stored session token.
pub fn logout() -> Result<(), CliError> {
    let client = client()?;
    client.logout()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Check that the API is reachable.
pub async fn health() -> Result<(), CliError> {
    let client = client()?;
    let base_url = client.session().base_url();
    client.health().await?;
    tracing::info!("API at {base_url} is reachable");
    Ok(())
}

fn prompt_password() -> Result<String, CliError> {
    print!("Password: ");
    std::io::stdout().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']).to_owned();
    if password.is_empty() {
        return Err(CliError::Input("password must not be empty".into()));
    }
    Ok(password)
}
