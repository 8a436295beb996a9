use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Backend selection, as an explicit tagged union picked at construction
/// time, never by runtime type inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum PersistenceConfig {
    /// In-process only; state is lost on restart.
    #[default]
    Memory,
    /// Durable single-process store in a SQLite file.
    Sqlite { path: PathBuf },
    /// Durable store shared across processes: one record per key in a remote
    /// key-value service. Last-writer-wins on concurrent writers.
    HttpKv { endpoint: String, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_tagged_mappings() {
        let memory: PersistenceConfig = serde_json::from_str(r#"{"backend": "memory"}"#).unwrap();
        assert_eq!(memory, PersistenceConfig::Memory);

        let sqlite: PersistenceConfig =
            serde_json::from_str(r#"{"backend": "sqlite", "path": "/tmp/steer.db"}"#).unwrap();
        assert_eq!(
            sqlite,
            PersistenceConfig::Sqlite {
                path: PathBuf::from("/tmp/steer.db")
            }
        );

        let kv: PersistenceConfig = serde_json::from_str(
            r#"{"backend": "http_kv", "endpoint": "http://kv.local", "key": "loop-1"}"#,
        )
        .unwrap();
        assert_eq!(
            kv,
            PersistenceConfig::HttpKv {
                endpoint: "http://kv.local".to_string(),
                key: "loop-1".to_string()
            }
        );
    }
}
