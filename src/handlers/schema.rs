//! GET /schema: every published model as JSON Schema, keyed by lowercase name.

use crate::catalog::{load_catalog, SchemaCatalog};
use crate::error::{AppError, CatalogError};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

pub async fn get_schemas(State(state): State<AppState>) -> Result<Json<SchemaCatalog>, AppError> {
    let catalog = load_catalog(state.models.as_ref()).await.map_err(|e| {
        match &e {
            // missing declarations are an application setup problem, not a server fault
            CatalogError::Unavailable { .. } => {
                tracing::warn!(source = %state.models.name(), error = %e, "model declarations not found")
            }
            CatalogError::Internal(_) => {
                tracing::error!(source = %state.models.name(), error = %e, "schema catalog failed")
            }
        }
        e
    })?;
    Ok(Json(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::DeclarationDir;
    use crate::settings::Settings;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    async fn logs_for(dir: &std::path::Path) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);
        let state = AppState::new(DeclarationDir::new(dir), Settings::default());
        assert!(get_schemas(State(state)).await.is_err());
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_declarations_log_at_warn() {
        let dir = tempfile::tempdir().unwrap();
        let logs = logs_for(dir.path()).await;
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("model declarations not found"), "{logs}");
        assert!(!logs.contains("ERROR"), "{logs}");
    }

    #[tokio::test]
    async fn malformed_declarations_log_at_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(crate::DECLARATION_FILE), "{").unwrap();
        let logs = logs_for(dir.path()).await;
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("schema catalog failed"), "{logs}");
    }
}
