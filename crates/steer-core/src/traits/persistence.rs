use crate::errors::PersistenceError;
use crate::types::PersistedState;

/// Persistence backend for feedback-loop state.
///
/// The loop reads at construction/recovery and writes after each mutation;
/// the backend never initiates mutation. `load` returning `Ok(None)` means
/// cold start (no prior state). The loop treats a `load` error the same way
/// and a `save` error as a logged, non-fatal loss of durability for that
/// cycle: persistence is at most best-effort.
///
/// The underlying store may be shared across processes (remote key-value
/// backend); last-writer-wins is the documented conflict policy.
pub trait IStatePersistence: Send + Sync {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError>;
    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError>;
}
