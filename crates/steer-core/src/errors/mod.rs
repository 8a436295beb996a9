//! Error types, one enum per error domain, unified under [`SteerError`].

pub mod config_error;
pub mod persistence_error;
pub mod strategy_error;

pub use config_error::ConfigError;
pub use persistence_error::PersistenceError;
pub use strategy_error::StrategyError;

/// Top-level error for the steer workspace.
#[derive(Debug, thiserror::Error)]
pub enum SteerError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the workspace.
pub type SteerResult<T> = Result<T, SteerError>;
