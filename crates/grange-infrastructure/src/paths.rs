//! Unified path management for grange configuration files.
//!
//! All grange configuration and session data live under the platform config
//! directory, resolved via the `dirs` crate. This ensures consistency across
//! Linux, macOS and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for grange.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/grange/            # Config directory
/// ├── config.toml              # Application configuration (backend URL)
/// └── session.json             # Durable session entries (AccessToken, FarmId)
/// ```
pub struct GrangePaths;

impl GrangePaths {
    /// Returns the grange configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/grange/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("grange"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file (config.toml).
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable session file.
    ///
    /// # Security Note
    ///
    /// The session file holds the bearer token in plaintext; it is written
    /// with 600 permissions on Unix systems.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = GrangePaths::config_dir().unwrap();
        assert!(config_dir.ends_with("grange"));
    }

    #[test]
    fn test_config_file() {
        let config_file = GrangePaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = GrangePaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_session_file() {
        let session_file = GrangePaths::session_file().unwrap();
        assert!(session_file.ends_with("session.json"));
        let config_dir = GrangePaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }
}
