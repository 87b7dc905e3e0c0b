//! Configuration management for the MusicBrainz matcher.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. Unlike a credentialed API, the
//! MusicBrainz search endpoint needs no secrets, so every accessor falls
//! back to a sensible public default when the variable is unset; the
//! overrides exist for mirrors and for tests that point the client at a
//! local server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lidarrify/.env`. A missing file is not an
/// error; the application runs fine on defaults.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lidarrify/.env`
/// - macOS: `~/Library/Application Support/lidarrify/.env`
/// - Windows: `%LOCALAPPDATA%/lidarrify/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lidarrify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the MusicBrainz web service base URL.
///
/// Reads the `MUSICBRAINZ_API_URL` environment variable and falls back to
/// the public API endpoint when unset.
///
/// # Example
///
/// ```
/// let api_url = musicbrainz_apiurl(); // "https://musicbrainz.org/ws/2"
/// ```
pub fn musicbrainz_apiurl() -> String {
    env::var("MUSICBRAINZ_API_URL").unwrap_or_else(|_| "https://musicbrainz.org/ws/2".to_string())
}

/// Returns the identifying User-Agent sent with every lookup request.
///
/// MusicBrainz requires anonymous clients to identify themselves; the
/// default is built from the crate name and version. Override with the
/// `MUSICBRAINZ_USER_AGENT` environment variable to include contact
/// information.
///
/// # Example
///
/// ```
/// let ua = musicbrainz_useragent(); // e.g. "lidarrify/0.1.0"
/// ```
pub fn musicbrainz_useragent() -> String {
    env::var("MUSICBRAINZ_USER_AGENT").unwrap_or_else(|_| {
        format!(
            "{name}/{version}",
            name = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION")
        )
    })
}
