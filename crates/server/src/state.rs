use symcheck_core::Catalog;

/// Shared across all handlers behind an `Arc`; never mutated after startup.
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
