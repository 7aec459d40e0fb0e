//! The module store backing the catalog.
//!
//! The [`Catalog`] knows nothing about where content is authored; it only
//! holds fully constructed [`Module`] values. Insertion order is preserved
//! and carries no semantic ranking beyond "the order modules were authored".

use std::collections::BTreeMap;

use crate::{
    catalog::QueryError,
    domain::{Module, Slug},
};

/// An in-memory, insertion-ordered collection of curriculum modules.
///
/// Modules are stored in a `Vec` to keep a stable listing order, with a
/// forward lookup map from slug to index for exact-match retrieval.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Modules in insertion order.
    modules: Vec<Module>,

    /// Forward lookup map from module slug to position in `modules`.
    index: BTreeMap<Slug, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with pre-allocated capacity for the given number of
    /// modules.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            modules: Vec::with_capacity(capacity),
            index: BTreeMap::new(),
        }
    }

    /// Inserts a module into the catalog.
    ///
    /// # Panics
    ///
    /// Panics if a module with the same slug already exists. Module slugs
    /// are unique across the catalog; a duplicate is an authoring error
    /// caught at catalog-build time.
    pub fn insert(&mut self, module: Module) {
        let slug = module.slug().clone();
        assert!(!self.index.contains_key(&slug), "duplicate module slug: {slug}");

        self.index.insert(slug, self.modules.len());
        self.modules.push(module);
    }

    /// Returns all modules in insertion order.
    ///
    /// The order is stable across calls but carries no semantic ranking.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Retrieves a module by slug (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ModuleNotFound`] if no module has this slug.
    pub fn module(&self, slug: &Slug) -> Result<&Module, QueryError> {
        self.index
            .get(slug)
            .map(|&i| &self.modules[i])
            .ok_or_else(|| QueryError::ModuleNotFound(slug.clone()))
    }

    /// The number of modules in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the catalog contains no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use nonempty::nonempty;

    use super::Catalog;
    use crate::{
        catalog::QueryError,
        domain::{Lesson, Level, Module, Slug},
    };

    fn module(slug: &str) -> Module {
        let lesson = Lesson::new(
            Slug::try_from("only-lesson").unwrap(),
            "Only lesson",
            NonZeroU32::new(5).unwrap(),
            Vec::new(),
        );
        Module::new(
            Slug::try_from(slug).unwrap(),
            slug.to_string(),
            String::new(),
            Level::Beginner,
            Vec::new(),
            nonempty![lesson],
        )
    }

    #[test]
    fn modules_are_listed_in_insertion_order() {
        let mut catalog = Catalog::with_capacity(3);
        catalog.insert(module("introduction"));
        catalog.insert(module("architecture"));
        catalog.insert(module("networking"));

        let slugs: Vec<_> = catalog.modules().iter().map(|m| m.slug().as_str()).collect();
        assert_eq!(slugs, ["introduction", "architecture", "networking"]);
    }

    #[test]
    fn unknown_slug_is_module_not_found() {
        let mut catalog = Catalog::new();
        catalog.insert(module("introduction"));

        let missing = Slug::try_from("storage").unwrap();
        assert_eq!(
            catalog.module(&missing),
            Err(QueryError::ModuleNotFound(missing))
        );
    }

    #[test]
    fn lookup_is_exact_and_idempotent() {
        let mut catalog = Catalog::new();
        catalog.insert(module("introduction"));

        let slug = Slug::try_from("introduction").unwrap();
        let first = catalog.module(&slug).unwrap().clone();
        let second = catalog.module(&slug).unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    #[should_panic(expected = "duplicate module slug")]
    fn duplicate_module_slugs_are_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(module("introduction"));
        catalog.insert(module("introduction"));
    }
}
