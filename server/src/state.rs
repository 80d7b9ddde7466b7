use database::GameStore;

/// Shared application state handed to every handler. Cheap to clone: the
/// store wraps a pooled connection.
#[derive(Clone)]
pub struct AppState {
    pub store: GameStore,
    /// Token for the logo.dev proxy; absent means the endpoint is
    /// unconfigured and answers 500.
    pub logo_token: Option<String>,
}

impl AppState {
    pub fn new(store: GameStore, logo_token: Option<String>) -> Self {
        Self { store, logo_token }
    }
}
