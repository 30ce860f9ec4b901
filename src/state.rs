//! Shared application state for all routes. Read-only after startup.

use crate::settings::Settings;
use crate::source::ModelSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Loaded afresh on every `/schema` request.
    pub models: Arc<dyn ModelSource>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(models: impl ModelSource + 'static, settings: Settings) -> Self {
        Self {
            models: Arc::new(models),
            settings: Arc::new(settings),
        }
    }
}
