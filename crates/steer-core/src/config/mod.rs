//! Configuration structs. All carry `#[serde(default)]` so the pipeline
//! assembler can supply partial mappings, and all validate eagerly: a
//! misconfigured loop fails at construction, not on its first call.

pub mod defaults;
pub mod persistence_config;
pub mod retention_config;
pub mod strategy_config;
pub mod worker_config;

pub use persistence_config::PersistenceConfig;
pub use retention_config::RetentionConfig;
pub use strategy_config::StrategyConfig;
pub use worker_config::WorkerConfig;
