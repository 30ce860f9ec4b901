//! Load model declarations from `<dir>/schemas.json` and resolve them into a namespace.

use crate::declarations::schema::{model_schema, DeclaredModel, DeclaredModels};
use crate::declarations::{validate, DeclKind, FieldDecl, SymbolDecl};
use crate::error::CatalogError;
use crate::namespace::{ModelNamespace, SymbolKind, BASE_MODEL};
use crate::source::ModelSource;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File holding the declarations inside a declaration directory.
pub const DECLARATION_FILE: &str = "schemas.json";

/// Declaration directory source. The file is read on every load.
#[derive(Clone, Debug)]
pub struct DeclarationDir {
    dir: PathBuf,
}

impl DeclarationDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file(&self) -> PathBuf {
        self.dir.join(DECLARATION_FILE)
    }
}

#[async_trait]
impl ModelSource for DeclarationDir {
    fn name(&self) -> String {
        self.file().display().to_string()
    }

    async fn load(&self) -> Result<ModelNamespace, CatalogError> {
        load_from_path(&self.file()).await
    }
}

pub async fn load_from_path(path: &Path) -> Result<ModelNamespace, CatalogError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            if e.kind() == ErrorKind::NotFound || !parent_is_dir(path).await {
                return Err(CatalogError::Unavailable {
                    source_name: path.display().to_string(),
                });
            }
            return Err(CatalogError::Internal(format!("{}: {}", path.display(), e)));
        }
    };
    let decls: Vec<SymbolDecl> = serde_json::from_str(&raw)
        .map_err(|e| CatalogError::Internal(format!("{}: {}", path.display(), e)))?;
    resolve(&decls)
}

/// A declaration directory that is missing or is a regular file cannot hold declarations.
async fn parent_is_dir(path: &Path) -> bool {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => dir,
        None => Path::new("."),
    };
    tokio::fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false)
}

/// Build a namespace from declarations (validates first).
/// `BaseModel` is always present as the base marker, as if imported into the module.
pub fn resolve(decls: &[SymbolDecl]) -> Result<ModelNamespace, CatalogError> {
    validate(decls)?;
    let by_name: HashMap<&str, &SymbolDecl> = decls.iter().map(|d| (d.name.as_str(), d)).collect();

    let mut models = DeclaredModels::new();
    for d in decls.iter().filter(|d| d.kind == DeclKind::Class) {
        if let Some(chain) = model_chain(d, &by_name)? {
            models.insert(
                d.name.clone(),
                DeclaredModel {
                    name: d.name.clone(),
                    description: d.description.clone(),
                    fields: inherited_fields(&chain),
                },
            );
        }
    }
    let models = Arc::new(models);

    let mut namespace = ModelNamespace::new();
    if !by_name.contains_key(BASE_MODEL) {
        namespace.push(BASE_MODEL, SymbolKind::Base);
    }
    for d in decls {
        let kind = match d.kind {
            DeclKind::Base => SymbolKind::Base,
            DeclKind::Function => SymbolKind::Function,
            DeclKind::Constant => SymbolKind::Constant,
            DeclKind::Class if models.contains_key(&d.name) => {
                let models = Arc::clone(&models);
                let name = d.name.clone();
                SymbolKind::Model(Arc::new(move || model_schema(&models, &name)))
            }
            DeclKind::Class => SymbolKind::Class,
        };
        namespace.push(d.name.clone(), kind);
    }
    tracing::debug!(symbols = namespace.len(), models = models.len(), "declarations resolved");
    Ok(namespace)
}

/// Class chain from `decl` up to its root, or `None` when the root is not a base.
fn model_chain<'a>(
    decl: &'a SymbolDecl,
    by_name: &HashMap<&str, &'a SymbolDecl>,
) -> Result<Option<Vec<&'a SymbolDecl>>, CatalogError> {
    let mut chain = vec![decl];
    let mut seen = HashSet::from([decl.name.as_str()]);
    let mut current = decl;
    loop {
        let Some(parent) = current.extends.as_deref() else {
            return Ok(None);
        };
        let Some(parent_decl) = by_name.get(parent).copied() else {
            // only the implicit base marker is undeclared after validation
            return Ok(Some(chain));
        };
        if parent_decl.kind == DeclKind::Base {
            return Ok(Some(chain));
        }
        if !seen.insert(parent_decl.name.as_str()) {
            return Err(CatalogError::Internal(format!(
                "inheritance cycle through '{}'",
                parent_decl.name
            )));
        }
        chain.push(parent_decl);
        current = parent_decl;
    }
}

/// Fields from root to leaf; a redeclared field replaces the parent's in place.
fn inherited_fields(chain: &[&SymbolDecl]) -> Vec<FieldDecl> {
    let mut fields: Vec<FieldDecl> = Vec::new();
    for decl in chain.iter().rev() {
        for f in &decl.fields {
            match fields.iter_mut().find(|existing| existing.name == f.name) {
                Some(existing) => *existing = f.clone(),
                None => fields.push(f.clone()),
            }
        }
    }
    fields
}
