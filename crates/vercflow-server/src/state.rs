use std::path::PathBuf;

/// Shared application state passed to all route handlers.
///
/// The store root is injected here rather than read from a global; every
/// handler goes through it.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
