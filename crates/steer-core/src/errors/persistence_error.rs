/// Persistence-backend errors. These are always recovered locally by the
/// feedback loop (cold start on load failure, logged warning on save failure)
/// and never surfaced from `suggest_actions`.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("remote store error: {message}")]
    Remote { message: String },

    #[error("persisted state failed to deserialize: {details}")]
    Corrupt { details: String },
}

impl PersistenceError {
    pub fn sqlite(message: impl Into<String>) -> Self {
        Self::Sqlite {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn corrupt(details: impl Into<String>) -> Self {
        Self::Corrupt {
            details: details.into(),
        }
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
