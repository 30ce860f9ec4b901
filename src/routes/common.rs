//! Common routes: greetings, diagnostics, health, version.

use crate::handlers::common::{diagnostics, health, hello, root, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Common routes (no state): GET /, GET /api/hello, GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/hello", get(hello))
        .route("/health", get(health))
        .route("/version", get(version))
}

/// GET /test: backend and database diagnostics. Requires AppState.
pub fn diagnostics_routes(state: AppState) -> Router {
    Router::new()
        .route("/test", get(diagnostics))
        .with_state(state)
}
