use std::sync::Arc;

use mlboard_core::TaskRunner;

#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<dyn TaskRunner>,
}
