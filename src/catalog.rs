//! The in-memory catalog of curriculum modules and its query operations.
//!
//! The [`Catalog`] is built once at startup and is read-only afterwards, so
//! any number of readers may share a `&Catalog` without coordination.

mod query;
mod store;

pub use query::{Neighbours, QueryError};
pub use store::Catalog;
