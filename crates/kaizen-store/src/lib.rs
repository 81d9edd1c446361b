//! Persistence for the user-state aggregate. The port is a plain trait so
//! the session layer never knows what is behind it; this crate ships a
//! file-backed implementation and an in-memory one. Granularity is the
//! whole blob, keyed by user id, last write wins.

use kaizen_core::UserState;
use thiserror::Error;

pub mod file;
pub mod memory;
pub mod migrate;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use migrate::normalize_loaded;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading state for {user_id}: {source}")]
    Read {
        user_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("writing state for {user_id}: {source}")]
    Write {
        user_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("decoding state for {user_id}: {source}")]
    Decode {
        user_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding state for {user_id}: {source}")]
    Encode {
        user_id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The persistence port. `load` returns `None` for a user with no blob yet;
/// that is a normal first-login state, not an error. Implementations apply
/// [`normalize_loaded`] before handing a blob back.
pub trait StateStore {
    fn load(&self, user_id: &str) -> Result<Option<UserState>, StoreError>;
    fn save(&self, user_id: &str, state: &UserState) -> Result<(), StoreError>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self, user_id: &str) -> Result<Option<UserState>, StoreError> {
        (**self).load(user_id)
    }

    fn save(&self, user_id: &str, state: &UserState) -> Result<(), StoreError> {
        (**self).save(user_id, state)
    }
}
