//! Capability traits at the seams: persistence backends, feedback strategies,
//! and cycle observers. All are object-safe and `Send + Sync` so the loop can
//! hold them as trait objects behind one lock.

pub mod observer;
pub mod persistence;
pub mod strategy;

pub use observer::{CycleReport, IFeedbackObserver};
pub use persistence::IStatePersistence;
pub use strategy::IFeedbackStrategy;
