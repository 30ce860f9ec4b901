//! Schema catalog backend: publishes declared data models as JSON Schema documents.

pub mod case;
pub mod catalog;
pub mod declarations;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod namespace;
pub mod routes;
pub mod settings;
pub mod source;
pub mod state;

pub use catalog::{build_catalog, load_catalog, SchemaCatalog};
pub use declarations::{DeclarationDir, DECLARATION_FILE};
pub use error::{AppError, CatalogError, ConfigError, ModelSchemaError};
pub use logging::init_tracing;
pub use namespace::{ModelNamespace, Symbol, SymbolKind, BASE_MODEL};
pub use routes::{app, common_routes, diagnostics_routes, schema_routes};
pub use settings::{CorsOrigins, Settings};
pub use source::ModelSource;
pub use state::AppState;
