//! Durable single-process backend: feedback-loop state in a SQLite file.
//! History entries are stored as ordered JSON payloads, baselines as one row
//! per metric; a save replaces the stored state in a single transaction.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use steer_core::errors::PersistenceError;
use steer_core::traits::IStatePersistence;
use steer_core::types::{ActionRecord, Baseline, PersistedState};

pub struct SqliteStore {
    // SQLite connections are not Sync; a single serialized writer is all the
    // one-loop-per-store access pattern needs.
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) the database file and ensure the schema.
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path).map_err(sqlite_err)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&self) -> Result<(), PersistenceError> {
        let conn = self.lock();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS history (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 payload TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS baselines (
                 metric TEXT PRIMARY KEY,
                 value REAL NOT NULL
             );",
        )
        .map_err(sqlite_err)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IStatePersistence for SqliteStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let conn = self.lock();

        let mut stmt = conn
            .prepare("SELECT payload FROM history ORDER BY id ASC")
            .map_err(sqlite_err)?;
        let payloads = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(sqlite_err)?
            .collect::<Result<Vec<String>, _>>()
            .map_err(sqlite_err)?;

        let history = payloads
            .iter()
            .map(|payload| serde_json::from_str::<ActionRecord>(payload))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| PersistenceError::corrupt(err.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT metric, value FROM baselines")
            .map_err(sqlite_err)?;
        let baseline: Baseline = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })
            .map_err(sqlite_err)?
            .collect::<Result<Vec<(String, f64)>, _>>()
            .map_err(sqlite_err)?
            .into_iter()
            .collect();

        if history.is_empty() && baseline.is_empty() {
            return Ok(None);
        }
        Ok(Some(PersistedState::new(history, baseline)))
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let payloads = state
            .history
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| PersistenceError::corrupt(err.to_string()))?;

        let mut conn = self.lock();
        let tx = conn.transaction().map_err(sqlite_err)?;

        tx.execute("DELETE FROM history", []).map_err(sqlite_err)?;
        tx.execute("DELETE FROM baselines", []).map_err(sqlite_err)?;

        {
            let mut insert = tx
                .prepare("INSERT INTO history (payload) VALUES (?1)")
                .map_err(sqlite_err)?;
            for payload in &payloads {
                insert.execute([payload]).map_err(sqlite_err)?;
            }

            let mut insert = tx
                .prepare("INSERT INTO baselines (metric, value) VALUES (?1, ?2)")
                .map_err(sqlite_err)?;
            for (metric, value) in state.baseline.iter() {
                insert
                    .execute(rusqlite::params![metric, value])
                    .map_err(sqlite_err)?;
            }
        }

        tx.commit().map_err(sqlite_err)
    }
}

fn sqlite_err(err: rusqlite::Error) -> PersistenceError {
    PersistenceError::sqlite(err.to_string())
}
