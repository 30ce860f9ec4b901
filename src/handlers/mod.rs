//! HTTP handlers for the schema catalog and plumbing endpoints.

pub mod common;
pub mod schema;
pub use common::*;
pub use schema::*;
