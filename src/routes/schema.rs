//! Schema catalog route.

use crate::handlers::schema::get_schemas;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn schema_routes(state: AppState) -> Router {
    Router::new()
        .route("/schema", get(get_schemas))
        .with_state(state)
}
