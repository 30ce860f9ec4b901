//! Schema catalog: lowercase model name -> JSON Schema document.

use crate::case::{catalog_key, is_internal};
use crate::error::CatalogError;
use crate::namespace::{ModelNamespace, SymbolKind};
use crate::source::ModelSource;
use serde_json::Value;
use std::collections::BTreeMap;

pub type SchemaCatalog = BTreeMap<String, Value>;

/// Build the catalog for every published model in `namespace`.
///
/// Members are visited in name order. A model is published when it carries the
/// model capability (the base marker itself does not) and its name has no leading
/// underscore. Two names that fold to the same key keep the later one. A model
/// whose schema cannot be generated is logged and left out.
pub fn build_catalog(namespace: &ModelNamespace) -> SchemaCatalog {
    let mut catalog = SchemaCatalog::new();
    for symbol in namespace.members() {
        let SymbolKind::Model(generate) = &symbol.kind else {
            continue;
        };
        if is_internal(&symbol.name) {
            continue;
        }
        match generate() {
            Ok(schema) => {
                catalog.insert(catalog_key(&symbol.name), schema);
            }
            Err(e) => {
                tracing::warn!(model = %symbol.name, error = %e, "skipping model schema");
            }
        }
    }
    tracing::debug!(models = catalog.len(), "schema catalog built");
    catalog
}

/// Load the namespace from `source` and build its catalog.
pub async fn load_catalog(source: &dyn ModelSource) -> Result<SchemaCatalog, CatalogError> {
    let namespace = source.load().await?;
    Ok(build_catalog(&namespace))
}
