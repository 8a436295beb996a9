use std::sync::Mutex;

use steer_core::errors::PersistenceError;
use steer_core::traits::IStatePersistence;
use steer_core::types::PersistedState;

/// In-process backend. No durability: state lives exactly as long as the
/// store. Useful as the default backend and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<PersistedState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IStatePersistence for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let guard = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let mut guard = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steer_core::types::{ActionRecord, Baseline};

    #[test]
    fn cold_start_until_first_save() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        let state = PersistedState::new(
            vec![ActionRecord::from_metrics([("progress", 4.0)])],
            Baseline::from_iter([("progress".to_string(), 4.0)]),
        );
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }
}
