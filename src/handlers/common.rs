//! Plumbing endpoints: greetings, diagnostics, health, version.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

/// Diagnostics reported by GET /test.
#[derive(Serialize)]
pub struct DiagnosticsBody {
    pub backend: &'static str,
    pub database: &'static str,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

pub async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello from the schema catalog backend!",
    })
}

pub async fn hello() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello from the backend API!",
    })
}

/// Persistence is not enabled in this build, so the database is always reported as missing;
/// only the presence of its connection variables is checked.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsBody> {
    let flag = |set: bool| if set { "✅ Set" } else { "❌ Not Set" };
    Json(DiagnosticsBody {
        backend: "✅ Running",
        database: "❌ Database module not found (persistence is not enabled)",
        database_url: flag(state.settings.database_url_set),
        database_name: flag(state.settings.database_name_set),
        connection_status: "Not Connected",
        collections: Vec::new(),
    })
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
