pub mod types;
pub mod loader;
pub mod validator;
pub mod schema;

pub use types::*;
pub use loader::*;
pub use validator::*;
pub use schema::{model_schema, DeclaredModel, DeclaredModels};
