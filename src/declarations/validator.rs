//! Declaration validation: identifiers, uniqueness, and parent references.

use crate::declarations::{DeclKind, SymbolDecl};
use crate::error::CatalogError;
use crate::namespace::BASE_MODEL;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

fn identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"))
}

pub fn validate(decls: &[SymbolDecl]) -> Result<(), CatalogError> {
    let mut kinds: HashMap<&str, DeclKind> = HashMap::new();
    for d in decls {
        if !identifier().is_match(&d.name) {
            return Err(CatalogError::Internal(format!("invalid symbol name '{}'", d.name)));
        }
        if kinds.insert(d.name.as_str(), d.kind).is_some() {
            return Err(CatalogError::Internal(format!("duplicate symbol '{}'", d.name)));
        }
    }

    for d in decls {
        if let Some(parent) = &d.extends {
            if d.kind != DeclKind::Class {
                return Err(CatalogError::Internal(format!(
                    "'{}' is not a class and cannot extend '{}'",
                    d.name, parent
                )));
            }
            // a declared name shadows the implicit base marker
            match kinds.get(parent.as_str()) {
                Some(DeclKind::Class | DeclKind::Base) => {}
                Some(_) => {
                    return Err(CatalogError::Internal(format!(
                        "'{}' extends '{}', which is not a class",
                        d.name, parent
                    )))
                }
                None if parent == BASE_MODEL => {}
                None => {
                    return Err(CatalogError::Internal(format!(
                        "'{}' extends unknown class '{}'",
                        d.name, parent
                    )))
                }
            }
        }

        let mut field_names = HashSet::new();
        for f in &d.fields {
            if !identifier().is_match(&f.name) {
                return Err(CatalogError::Internal(format!(
                    "invalid field name '{}' on '{}'",
                    f.name, d.name
                )));
            }
            if !field_names.insert(f.name.as_str()) {
                return Err(CatalogError::Internal(format!(
                    "duplicate field '{}' on '{}'",
                    f.name, d.name
                )));
            }
        }
    }
    Ok(())
}
