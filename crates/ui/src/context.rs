use std::sync::{Arc, PoisonError, RwLock};

use brief_core::{BackendOrigin, ContentBundle};

pub trait UiApp: Send + Sync {
    fn backend_origin(&self) -> BackendOrigin;
    fn initial_results(&self) -> Option<ContentBundle>;
}

#[derive(Clone)]
pub struct AppContext {
    backend_origin: BackendOrigin,
    // Navigation state handed from the upload flow to the results page.
    results: Arc<RwLock<Option<Arc<ContentBundle>>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let backend_origin = app.backend_origin();
        let results = app.initial_results().map(Arc::new);

        Self {
            backend_origin,
            results: Arc::new(RwLock::new(results)),
        }
    }

    #[must_use]
    pub fn backend_origin(&self) -> &BackendOrigin {
        &self.backend_origin
    }

    /// Snapshot of the bundle currently held in navigation state.
    #[must_use]
    pub fn current_results(&self) -> Option<Arc<ContentBundle>> {
        let guard = self.results.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(Arc::clone)
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        self.current_results().is_some()
    }

    pub fn set_results(&self, bundle: ContentBundle) {
        let mut guard = self.results.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(bundle));
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
