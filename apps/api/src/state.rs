use std::sync::Arc;

use crate::config::Config;
use crate::screening::ScreeningConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Read-only keyword tables, scoring policy, and the stemmer both the
    /// tokenizer and matcher go through.
    pub screening: Arc<ScreeningConfig>,
}
