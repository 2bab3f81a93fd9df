//! Configuration management for the Portfolio Content Manager.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the portfolio backend's base URL, the public site
//! address, and other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `foliocli/.env`. This allows users to store
/// configuration without hardcoding values into shell profiles.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/foliocli/.env`
/// - macOS: `~/Library/Application Support/foliocli/.env`
/// - Windows: `%LOCALAPPDATA%/foliocli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use foliocli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("foliocli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // No .env file is fine; the variables may come from the environment.
    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the portfolio REST backend.
///
/// Retrieves the `PORTFOLIO_API_URL` environment variable which contains the
/// address of the backend serving the `/api/...` collection endpoints. All
/// collection requests are issued against this base.
///
/// # Panics
///
/// Panics if the `PORTFOLIO_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = portfolio_api_url(); // e.g., "http://localhost:8080"
/// ```
pub fn portfolio_api_url() -> String {
    env::var("PORTFOLIO_API_URL").expect("PORTFOLIO_API_URL must be set")
}

/// Returns the public URL of the portfolio website.
///
/// Retrieves the `PORTFOLIO_SITE_URL` environment variable which contains the
/// address of the rendered site. Used by the `site` command to open the
/// portfolio in a browser.
///
/// # Panics
///
/// Panics if the `PORTFOLIO_SITE_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let site_url = portfolio_site_url(); // e.g., "https://example.dev"
/// ```
pub fn portfolio_site_url() -> String {
    env::var("PORTFOLIO_SITE_URL").expect("PORTFOLIO_SITE_URL must be set")
}
