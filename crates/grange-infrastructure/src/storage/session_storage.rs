//! Durable session file storage.
//!
//! Persists the two session entries (`AccessToken`, `FarmId`) as a JSON file
//! under ~/.config/grange/session.json. Writes are atomic (tmp file + rename)
//! so a crash mid-write never leaves a torn file; the startup restore then
//! resolves any disagreement between storage and in-memory state.

use crate::paths::GrangePaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Errors that can occur during session storage operations.
#[derive(Debug)]
pub enum SessionStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for SessionStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            SessionStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            SessionStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine config directory")
            }
        }
    }
}

impl std::error::Error for SessionStorageError {}

impl From<std::io::Error> for SessionStorageError {
    fn from(e: std::io::Error) -> Self {
        SessionStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for SessionStorageError {
    fn from(e: serde_json::Error) -> Self {
        SessionStorageError::ParseError(e)
    }
}

impl From<SessionStorageError> for grange_core::GrangeError {
    fn from(e: SessionStorageError) -> Self {
        grange_core::GrangeError::session_storage(e.to_string())
    }
}

/// The persisted form of the session: two key-value entries.
///
/// The `FarmId` entry is a stringified integer, matching the storage format
/// of the mobile app this backend was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(rename = "FarmId", default, skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<String>,
}

impl SessionRecord {
    /// Parses the stored farm id, ignoring unparseable values.
    pub fn farm_id_value(&self) -> Option<i64> {
        self.farm_id.as_deref().and_then(|raw| raw.parse().ok())
    }

    /// Sets the farm id entry from an integer.
    pub fn set_farm_id_value(&mut self, farm_id: i64) {
        self.farm_id = Some(farm_id.to_string());
    }
}

/// Storage for the durable session file (session.json).
///
/// Responsibilities:
/// - Load session.json from ~/.config/grange/
/// - Save the record atomically with 600 permissions on Unix
/// - Clear both entries on logout
///
/// Does NOT:
/// - Validate the token against the backend
/// - Handle encryption (plaintext JSON storage)
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Creates a new SessionStorage with the default path
    /// (~/.config/grange/session.json).
    pub fn new() -> Result<Self, SessionStorageError> {
        let path = GrangePaths::session_file()
            .map_err(|_| SessionStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new SessionStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the session record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SessionRecord))`: Successfully loaded and parsed
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<SessionRecord>, SessionStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let record = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    /// Saves the session record atomically.
    ///
    /// Writes to a temporary file in the same directory, fsyncs, then
    /// renames over the target. Sets 600 permissions on Unix.
    pub fn save(&self, record: &SessionRecord) -> Result<(), SessionStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(record)?;
        let tmp_path = self.path.with_extension("json.tmp");

        {
            use std::io::Write;
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Removes the session file. A missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the path to the session file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
