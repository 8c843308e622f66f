//! Shared application state for the HTTP layer

use quizpanel_application::ResolveBatchUseCase;
use quizpanel_domain::CourseCatalog;
use std::sync::Arc;

/// State injected into every handler
///
/// The catalog is constructed once at process start and shared by
/// reference; nothing here is mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CourseCatalog>,
    pub batch: Arc<ResolveBatchUseCase>,
}

impl AppState {
    pub fn new(catalog: Arc<CourseCatalog>, batch: Arc<ResolveBatchUseCase>) -> Self {
        Self { catalog, batch }
    }
}
