pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::critique::handlers::{handle_critique, handle_critique_upload};
use crate::extraction::handlers::handle_extract;
use crate::extraction::MAX_PDF_BYTES;
use crate::state::AppState;

/// Room for multipart framing on top of the largest accepted PDF.
const BODY_LIMIT_BYTES: usize = MAX_PDF_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/critique", post(handle_critique))
        .route("/api/critique/upload", post(handle_critique_upload))
        .route("/api/extract", post(handle_extract))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
