//! Model namespace: the declared symbols a catalog is built from.
//! Rust types register explicitly; kinds stand in for what reflection would report.

use crate::error::ModelSchemaError;
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Name of the base model capability marker.
pub const BASE_MODEL: &str = "BaseModel";

/// Produces the JSON Schema document of one model.
pub type SchemaFn = Arc<dyn Fn() -> Result<Value, ModelSchemaError> + Send + Sync>;

#[derive(Clone)]
pub enum SymbolKind {
    /// Class-like type with the model capability.
    Model(SchemaFn),
    /// The base model capability itself.
    Base,
    /// Class-like type without the model capability.
    Class,
    Function,
    Constant,
}

impl fmt::Debug for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Model(_) => "Model",
            SymbolKind::Base => "Base",
            SymbolKind::Class => "Class",
            SymbolKind::Function => "Function",
            SymbolKind::Constant => "Constant",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

/// Ordered collection of declared symbols. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct ModelNamespace {
    symbols: Vec<Symbol>,
}

impl ModelNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, name: impl Into<String>, kind: SymbolKind) -> Self {
        self.push(name, kind);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, kind: SymbolKind) {
        self.symbols.push(Symbol {
            name: name.into(),
            kind,
        });
    }

    /// Register `T` as a model; its schema comes from its `JsonSchema` impl.
    pub fn model<T: JsonSchema + 'static>(self, name: impl Into<String>) -> Self {
        self.model_with(name, typed_schema::<T>)
    }

    /// Register a model with a custom schema generator.
    pub fn model_with<F>(self, name: impl Into<String>, generate: F) -> Self
    where
        F: Fn() -> Result<Value, ModelSchemaError> + Send + Sync + 'static,
    {
        self.with_symbol(name, SymbolKind::Model(Arc::new(generate)))
    }

    pub fn base(self, name: impl Into<String>) -> Self {
        self.with_symbol(name, SymbolKind::Base)
    }

    pub fn class(self, name: impl Into<String>) -> Self {
        self.with_symbol(name, SymbolKind::Class)
    }

    pub fn function(self, name: impl Into<String>) -> Self {
        self.with_symbol(name, SymbolKind::Function)
    }

    pub fn constant(self, name: impl Into<String>) -> Self {
        self.with_symbol(name, SymbolKind::Constant)
    }

    /// Symbols sorted by name; symbols with equal names keep declaration order.
    pub fn members(&self) -> Vec<&Symbol> {
        let mut members: Vec<&Symbol> = self.symbols.iter().collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Draft-07 schema for `T` without the `$schema` meta key; nested types land under `definitions`.
pub fn typed_schema<T: JsonSchema>() -> Result<Value, ModelSchemaError> {
    let generator = SchemaSettings::draft07()
        .with(|s| s.meta_schema = None)
        .into_generator();
    let root = generator.into_root_schema_for::<T>();
    Ok(serde_json::to_value(root)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Widget {
        name: String,
        weight: Option<f64>,
    }

    #[test]
    fn members_are_sorted_by_name() {
        let ns = ModelNamespace::new()
            .function("zeta")
            .base(BASE_MODEL)
            .class("Alpha");
        let members = ns.members();
        let names: Vec<&str> = members.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", BASE_MODEL, "zeta"]);
    }

    #[test]
    fn typed_schema_describes_fields() {
        let schema = typed_schema::<Widget>().unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["title"], "Widget");
        assert!(schema["properties"]["name"].is_object());
        assert!(schema["properties"]["weight"].is_object());
        assert_eq!(schema["required"], serde_json::json!(["name"]));
        assert!(schema.get("$schema").is_none());
    }
}
