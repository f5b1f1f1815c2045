use std::sync::Arc;

use crate::config::Config;
use crate::critique::service::CritiqueService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Holds the model provider (absent in demo mode) and the randomness source.
    pub critique: Arc<CritiqueService>,
}
