//! Demo backend: serves the compiled-in models, or a declaration directory when `SCHEMAS_PATH` is set.
//!
//! Run from repo root: `cargo run -p demo-backend`

mod schemas;

use schema_catalog::{app, init_tracing, AppState, DeclarationDir, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("schema_catalog=info,demo_backend=info,tower_http=info");

    let settings = Settings::from_env()?;
    let state = match &settings.schemas_path {
        Some(dir) => {
            tracing::info!("serving model declarations from {}", dir.display());
            AppState::new(DeclarationDir::new(dir), settings.clone())
        }
        None => {
            tracing::info!("serving compiled-in models");
            AppState::new(schemas::namespace(), settings.clone())
        }
    };

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
