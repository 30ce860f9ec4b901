//! JSON Schema documents for declared models.
//! Shape follows the usual model-schema layout: title, type, properties, required, $defs.

use crate::case::to_title;
use crate::declarations::FieldDecl;
use crate::error::ModelSchemaError;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// A declared class that resolved to a model, with inherited fields flattened.
#[derive(Clone, Debug)]
pub struct DeclaredModel {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDecl>,
}

/// All models of one declaration file, by exact name.
pub type DeclaredModels = HashMap<String, DeclaredModel>;

const PRIMITIVES: &[&str] = &["string", "integer", "number", "boolean", "object"];

/// Schema document for model `name`; referenced models are emitted under `$defs`.
pub fn model_schema(models: &DeclaredModels, name: &str) -> Result<Value, ModelSchemaError> {
    let mut defs = Map::new();
    let mut schema = object_schema(models, name, &mut defs)?;
    if !defs.is_empty() {
        schema.insert("$defs".into(), Value::Object(defs));
    }
    Ok(Value::Object(schema))
}

fn object_schema(
    models: &DeclaredModels,
    name: &str,
    defs: &mut Map<String, Value>,
) -> Result<Map<String, Value>, ModelSchemaError> {
    let model = models
        .get(name)
        .ok_or_else(|| ModelSchemaError::Other(format!("'{}' is not a model", name)))?;

    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in &model.fields {
        properties.insert(field.name.clone(), field_schema(models, field, defs)?);
        if field.required && field.default.is_none() {
            required.push(Value::String(field.name.clone()));
        }
    }

    let mut schema = Map::new();
    schema.insert("title".into(), Value::String(model.name.clone()));
    if let Some(description) = &model.description {
        schema.insert("description".into(), Value::String(description.clone()));
    }
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }
    Ok(schema)
}

fn field_schema(
    models: &DeclaredModels,
    field: &FieldDecl,
    defs: &mut Map<String, Value>,
) -> Result<Value, ModelSchemaError> {
    let mut inner = type_schema(models, field, &field.type_, field.items.as_deref(), defs)?;
    apply_constraints(&mut inner, field)?;

    let mut schema = if field.nullable {
        let mut m = Map::new();
        m.insert("anyOf".into(), json!([inner, {"type": "null"}]));
        m
    } else {
        inner
    };
    schema.insert("title".into(), Value::String(to_title(&field.name)));
    if let Some(description) = &field.description {
        schema.insert("description".into(), Value::String(description.clone()));
    }
    if let Some(default) = &field.default {
        schema.insert("default".into(), default.clone());
    }
    Ok(Value::Object(schema))
}

fn type_schema(
    models: &DeclaredModels,
    field: &FieldDecl,
    type_name: &str,
    items: Option<&str>,
    defs: &mut Map<String, Value>,
) -> Result<Map<String, Value>, ModelSchemaError> {
    let mut schema = Map::new();
    if PRIMITIVES.contains(&type_name) {
        schema.insert("type".into(), json!(type_name));
        return Ok(schema);
    }
    if type_name == "array" {
        let items = items.ok_or_else(|| ModelSchemaError::MissingItems(field.name.clone()))?;
        let items_schema = type_schema(models, field, items, None, defs)?;
        schema.insert("type".into(), json!("array"));
        schema.insert("items".into(), Value::Object(items_schema));
        return Ok(schema);
    }
    if models.contains_key(type_name) {
        ensure_def(models, type_name, defs)?;
        schema.insert("$ref".into(), Value::String(format!("#/$defs/{}", type_name)));
        return Ok(schema);
    }
    Err(ModelSchemaError::UnknownType {
        field: field.name.clone(),
        type_name: type_name.to_string(),
    })
}

fn ensure_def(
    models: &DeclaredModels,
    name: &str,
    defs: &mut Map<String, Value>,
) -> Result<(), ModelSchemaError> {
    if defs.contains_key(name) {
        return Ok(());
    }
    // placeholder stops recursion on self-referencing models
    defs.insert(name.to_string(), Value::Null);
    let schema = object_schema(models, name, defs)?;
    defs.insert(name.to_string(), Value::Object(schema));
    Ok(())
}

fn apply_constraints(schema: &mut Map<String, Value>, c: &FieldDecl) -> Result<(), ModelSchemaError> {
    let is_array = schema.get("type") == Some(&json!("array"));
    let (min_key, max_key) = if is_array {
        ("minItems", "maxItems")
    } else {
        ("minLength", "maxLength")
    };
    if let Some(min) = c.min_length {
        schema.insert(min_key.into(), json!(min));
    }
    if let Some(max) = c.max_length {
        schema.insert(max_key.into(), json!(max));
    }
    if let Some(pattern) = &c.pattern {
        Regex::new(pattern).map_err(|e| ModelSchemaError::InvalidPattern {
            field: c.name.clone(),
            reason: e.to_string(),
        })?;
        schema.insert("pattern".into(), Value::String(pattern.clone()));
    }
    if let Some(min) = &c.minimum {
        schema.insert("minimum".into(), Value::Number(min.clone()));
    }
    if let Some(max) = &c.maximum {
        schema.insert("maximum".into(), Value::Number(max.clone()));
    }
    if let Some(format) = &c.format {
        schema.insert("format".into(), Value::String(format.clone()));
    }
    if let Some(allowed) = &c.allowed {
        schema.insert("enum".into(), Value::Array(allowed.clone()));
    }
    Ok(())
}
