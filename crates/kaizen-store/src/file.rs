//! File-backed store: one JSON blob per user under the store root, written
//! atomically, guarded by an advisory lock while a save is in flight.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use kaizen_core::UserState;

use crate::{migrate, StateStore, StoreError};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    /// Platform data dir: `~/.local/share/kaizen` (Linux),
    /// `%APPDATA%\kaizen` (Windows), falling back to `~/.kaizen`.
    pub fn default_root() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("kaizen")
        } else if let Some(home) = dirs::home_dir() {
            home.join(".kaizen")
        } else {
            PathBuf::from(".kaizen-store")
        }
    }

    /// Filesystem-safe partition key for a user id:
    /// blake3(user_id) → hex, first 32 chars.
    pub fn user_key(user_id: &str) -> String {
        let hash = blake3::hash(user_id.as_bytes());
        hash.to_hex()[..32].to_string()
    }

    fn user_path(&self, user_id: &str) -> PathBuf {
        self.root
            .join("users")
            .join(format!("{}.json", Self::user_key(user_id)))
    }

    fn lock_path(&self, user_id: &str) -> PathBuf {
        self.root
            .join("users")
            .join(format!("{}.lock", Self::user_key(user_id)))
    }
}

/// Atomic write: temp file in the same dir, then rename.
fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("no parent dir for {}", path.display()),
        )
    })?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Exclusive advisory lock, released on drop.
struct LockGuard {
    _file: fs::File,
}

fn lock_file(path: &Path) -> std::io::Result<LockGuard> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;
    file.lock_exclusive()?;
    Ok(LockGuard { _file: file })
}

impl StateStore for FileStore {
    fn load(&self, user_id: &str) -> Result<Option<UserState>, StoreError> {
        let path = self.user_path(user_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            user_id: user_id.to_string(),
            source,
        })?;
        let mut state: UserState =
            serde_json::from_str(&content).map_err(|source| StoreError::Decode {
                user_id: user_id.to_string(),
                source,
            })?;
        migrate::normalize_loaded(&mut state);
        Ok(Some(state))
    }

    fn save(&self, user_id: &str, state: &UserState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state).map_err(|source| StoreError::Encode {
            user_id: user_id.to_string(),
            source,
        })?;
        let wrap_io = |source| StoreError::Write {
            user_id: user_id.to_string(),
            source,
        };
        let _guard = lock_file(&self.lock_path(user_id)).map_err(wrap_io)?;
        write_atomic(&self.user_path(user_id), json.as_bytes()).map_err(wrap_io)?;
        Ok(())
    }
}
