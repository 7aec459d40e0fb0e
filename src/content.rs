//! The authored Kubernetes curriculum.
//!
//! Content is static, in-process data: one submodule per curriculum module,
//! each building its [`Module`](crate::domain::Module) value at startup.
//! Text payloads are markup strings carried verbatim; the catalog never
//! interprets them.

use std::num::NonZeroU32;

use crate::{
    catalog::Catalog,
    domain::{ContentBlock, Registry, Slug},
};

mod architecture;
mod diagrams;
mod introduction;
mod networking;

/// Builds the fully populated curriculum catalog.
///
/// Module order here is the order modules appear in listings.
#[must_use]
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::with_capacity(3);
    catalog.insert(introduction::module());
    catalog.insert(architecture::module());
    catalog.insert(networking::module());
    catalog
}

/// Builds the diagram registry referenced by `diagram` content blocks.
#[must_use]
pub fn diagrams() -> Registry {
    diagrams::registry()
}

/// Parses a statically authored slug.
///
/// Panics on invalid input; authored slugs are fixed at compile time, so a
/// failure here is an authoring bug, not a runtime condition.
fn slug(s: &str) -> Slug {
    s.parse().expect("statically authored slug")
}

/// Converts a statically authored duration to minutes.
fn minutes(m: u32) -> NonZeroU32 {
    NonZeroU32::new(m).expect("statically authored duration")
}

/// A markup text block.
fn text(markup: &str) -> ContentBlock {
    ContentBlock::Text {
        markup: markup.to_string(),
    }
}

/// A literal source listing block.
fn code(listing: &str) -> ContentBlock {
    ContentBlock::Code {
        listing: listing.to_string(),
    }
}

/// A reference to a diagram in the registry.
fn diagram(id: &str) -> ContentBlock {
    ContentBlock::Diagram { id: slug(id) }
}

#[cfg(test)]
mod tests {
    use super::{catalog, diagrams, slug};
    use crate::catalog::QueryError;

    #[test]
    fn catalog_has_three_modules_in_authored_order() {
        let catalog = catalog();
        let slugs: Vec<_> = catalog.modules().iter().map(|m| m.slug().as_str()).collect();
        assert_eq!(slugs, ["introduction", "architecture", "networking"]);
    }

    #[test]
    fn lessons_keep_their_authored_order() {
        let catalog = catalog();
        let order = |module: &str| -> Vec<String> {
            catalog
                .module(&slug(module))
                .unwrap()
                .lessons()
                .iter()
                .map(|lesson| lesson.slug().to_string())
                .collect()
        };

        assert_eq!(
            order("introduction"),
            [
                "what-is-kubernetes",
                "kubernetes-history",
                "kubernetes-use-cases",
                "kubernetes-benefits",
                "quick-start",
                "kubernetes-components",
            ]
        );
        assert_eq!(
            order("architecture"),
            [
                "overview",
                "control-plane",
                "worker-nodes",
                "kubernetes-objects",
                "api-server",
                "communication",
                "storage-architecture",
            ]
        );
        assert_eq!(
            order("networking"),
            [
                "networking-fundamentals",
                "services",
                "ingress",
                "network-policies",
                "dns",
                "cni",
            ]
        );
    }

    #[test]
    fn introduction_starts_with_what_is_kubernetes() {
        let catalog = catalog();
        let module = catalog.module(&slug("introduction")).unwrap();
        assert_eq!(module.lessons().first().slug().as_str(), "what-is-kubernetes");
    }

    #[test]
    fn kubernetes_history_sits_between_its_neighbours() {
        let catalog = catalog();
        let neighbours = catalog
            .adjacent_lessons(&slug("introduction"), &slug("kubernetes-history"))
            .unwrap();

        assert_eq!(neighbours.previous.unwrap().slug().as_str(), "what-is-kubernetes");
        assert_eq!(neighbours.next.unwrap().slug().as_str(), "kubernetes-use-cases");
    }

    #[test]
    fn nonexistent_lesson_in_architecture_is_not_found() {
        let catalog = catalog();
        assert_eq!(
            catalog.lesson(&slug("architecture"), &slug("nonexistent-slug")),
            Err(QueryError::LessonNotFound {
                module: slug("architecture"),
                lesson: slug("nonexistent-slug"),
            })
        );
    }

    #[test]
    fn every_diagram_block_resolves_in_the_registry() {
        let catalog = catalog();
        let registry = diagrams();

        for module in catalog.modules() {
            for lesson in module.lessons().iter() {
                for id in lesson.content().iter().filter_map(|block| block.diagram_id()) {
                    assert!(
                        registry.get(id).is_ok(),
                        "dangling diagram id '{id}' in {}/{}",
                        module.slug(),
                        lesson.slug(),
                    );
                }
            }
        }
    }

    #[test]
    fn all_lessons_have_content() {
        let catalog = catalog();
        for module in catalog.modules() {
            for lesson in module.lessons().iter() {
                assert!(
                    !lesson.content().is_empty(),
                    "lesson {}/{} has no content blocks",
                    module.slug(),
                    lesson.slug(),
                );
            }
        }
    }
}
