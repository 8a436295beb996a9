//! # steer-storage
//!
//! Persistence backends for feedback-loop state. All backends implement
//! [`IStatePersistence`] from `steer-core` and round-trip
//! [`PersistedState`](steer_core::types::PersistedState) exactly:
//!
//! - [`MemoryStore`]: in-process, lost on restart;
//! - [`SqliteStore`]: durable single-process file store;
//! - [`HttpKvStore`]: remote key-value record shared across processes,
//!   last-writer-wins.
//!
//! Backends are selected through the tagged [`PersistenceConfig`] union at
//! construction time.

pub mod http_kv;
pub mod memory;
pub mod sqlite;

pub use http_kv::HttpKvStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use steer_core::config::PersistenceConfig;
use steer_core::errors::PersistenceError;
use steer_core::traits::IStatePersistence;

/// Build the backend named by the config.
pub fn build_backend(
    config: &PersistenceConfig,
) -> Result<Box<dyn IStatePersistence>, PersistenceError> {
    match config {
        PersistenceConfig::Memory => Ok(Box::new(MemoryStore::new())),
        PersistenceConfig::Sqlite { path } => Ok(Box::new(SqliteStore::open(path)?)),
        PersistenceConfig::HttpKv { endpoint, key } => {
            Ok(Box::new(HttpKvStore::new(endpoint.clone(), key.clone())?))
        }
    }
}
