use std::sync::Arc;

use record_core::store::RowStore;
use record_core::CommandRouter;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: CommandRouter,
}

impl AppState {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            router: CommandRouter::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_core::store::MemoryStore;

    #[test]
    fn new_state_shares_store() {
        let store: Arc<dyn RowStore> = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone());
        assert!(Arc::ptr_eq(state.router.store(), &store));
    }
}
