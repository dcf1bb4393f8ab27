use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Session file name inside the per-origin data directory
const SESSION_FILE: &str = "session.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Keychain error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A single persistent slot holding the bearer token for one backend origin.
///
/// Reads never fail: anything that cannot be read back is reported as no
/// token. An empty stored token also reads as no token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process token slot. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let slot = self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.clone().filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    stored_at: DateTime<Utc>,
}

/// Token slot persisted as JSON on disk, one directory per backend origin.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn read(path: &Path) -> Result<Option<StoredToken>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let path = self.path();
        match Self::read(&path) {
            Ok(stored) => stored.map(|s| s.token).filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Unreadable session file, treating as signed out");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let stored = StoredToken {
            token: token.to_string(),
            stored_at: Utc::now(),
        };
        let contents = serde_json::to_string_pretty(&stored)?;
        write_private(&self.path(), &contents)?;
        debug!(dir = %self.dir.display(), "Session token saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(path)?;
            debug!(dir = %self.dir.display(), "Session token removed");
        }
        Ok(())
    }
}

/// Write a file only its owner can read. Tightens an existing file too.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents.as_bytes())
}
