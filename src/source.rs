//! Where model namespaces come from: compiled-in types or a declaration directory.

use crate::error::CatalogError;
use crate::namespace::ModelNamespace;
use async_trait::async_trait;

#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Human-readable name of the declaration module, used in error details.
    fn name(&self) -> String;

    /// Load a fresh namespace. `CatalogError::Unavailable` when the declarations cannot be located.
    async fn load(&self) -> Result<ModelNamespace, CatalogError>;
}

#[async_trait]
impl ModelSource for ModelNamespace {
    fn name(&self) -> String {
        "compiled model".into()
    }

    async fn load(&self) -> Result<ModelNamespace, CatalogError> {
        Ok(self.clone())
    }
}
