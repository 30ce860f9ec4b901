//! Models published at /schema. Each registered model becomes a collection in the viewer.

use schema_catalog::{ModelNamespace, BASE_MODEL};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub name: String,
    /// Login address; unique per user.
    pub email: String,
    pub address: Option<Address>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

/// An item offered for sale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub in_stock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Books,
    Electronics,
    Garden,
}

/// Work in progress; not published.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct _Draft {
    pub notes: String,
}

/// Everything the schema module exposes, including symbols that are not models.
pub fn namespace() -> ModelNamespace {
    ModelNamespace::new()
        .base(BASE_MODEL)
        .model::<User>("User")
        .model::<Product>("Product")
        .model::<_Draft>("_Draft")
        .class("Address")
        .function("default_active")
}
