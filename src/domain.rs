//! Domain models for the curriculum catalog.
//!
//! This module contains the core content schema: modules, lessons, content
//! blocks, external resources, and the diagram registry.

mod content_block;
pub use content_block::ContentBlock;

/// Diagram registry and the per-widget step viewer.
pub mod diagram;
pub use diagram::{Diagram, Registry, Step, StepViewer};

/// Curriculum module and lesson types.
pub mod module;
pub use module::{Lesson, Level, Module};

mod resource;
pub use resource::{Resource, ResourceKind};

/// Slug identifier type and parsing.
pub mod slug;
pub use slug::{Error as SlugError, Slug};
