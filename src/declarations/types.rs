//! Raw declaration types matching `schemas.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// What a declared symbol is. Undeclared kind means class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    #[default]
    Class,
    Base,
    Function,
    Constant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolDecl {
    pub name: String,
    #[serde(default)]
    pub kind: DeclKind,
    /// Parent class; a class is a model when this chain reaches a base.
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    /// Primitive type name, "array", or the name of another model.
    #[serde(rename = "type")]
    pub type_: String,
    /// Element type for arrays.
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,

    // Validation constraints, published as JSON Schema keywords.
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub pattern: Option<String>,
    /// Kept as written so integer bounds stay integers.
    #[serde(default)]
    pub minimum: Option<Number>,
    #[serde(default)]
    pub maximum: Option<Number>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub allowed: Option<Vec<Value>>,
}

fn default_required() -> bool {
    true
}
