use std::sync::Arc;

use aeromed_store::Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub jwt_secret: Arc<[u8]>,
}

impl AppState {
    pub fn new(store: Store, jwt_secret: &[u8]) -> Self {
        Self {
            store,
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}
