//! Kubernetes curriculum catalog.
//!
//! A structured curriculum (modules containing ordered lessons, lessons
//! containing ordered content blocks) held as an immutable in-memory
//! catalog, with navigation queries and a step-sequenced diagram registry.

/// In-memory catalog and navigation queries.
pub mod catalog;
pub use catalog::{Catalog, Neighbours, QueryError};

/// The authored curriculum content.
pub mod content;

/// Content schema: modules, lessons, blocks, resources, diagrams.
pub mod domain;
pub use domain::{
    ContentBlock, Diagram, Lesson, Level, Module, Registry, Resource, ResourceKind, Slug, Step,
    StepViewer,
};
