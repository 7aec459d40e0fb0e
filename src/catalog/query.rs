//! Navigation queries over the catalog.
//!
//! These answer the questions the browsing layer needs without exposing
//! repository internals: scoped lesson lookup and previous/next sequencing.
//! All queries are side-effect free and signal misses with [`QueryError`]
//! rather than panicking.

use crate::domain::{Lesson, Slug};

use super::Catalog;

/// The single failure kind of the query layer.
///
/// A miss is always returned as an explicit `Err`; callers are expected to
/// render an equivalent "not found" state rather than treat it as fatal.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// No module in the catalog has the requested slug.
    #[error("module '{0}' not found")]
    ModuleNotFound(Slug),

    /// The module exists, but none of its lessons has the requested slug.
    #[error("lesson '{lesson}' not found in module '{module}'")]
    LessonNotFound {
        /// Slug of the resolved module.
        module: Slug,
        /// The lesson slug that failed to match.
        lesson: Slug,
    },
}

/// The lessons adjacent to a given lesson within its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours<'a> {
    /// The preceding lesson, or `None` for the first lesson of the module.
    pub previous: Option<&'a Lesson>,
    /// The following lesson, or `None` for the last lesson of the module.
    pub next: Option<&'a Lesson>,
}

impl Catalog {
    /// Retrieves a lesson by `(module slug, lesson slug)`.
    ///
    /// The module is resolved first, then its lesson sequence is scanned in
    /// order; the first lesson whose slug matches wins. Lesson slugs are
    /// unique within a module, so first-match is only a tie-break against
    /// malformed content.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ModuleNotFound`] if the module slug does not
    /// resolve, or [`QueryError::LessonNotFound`] if the module has no
    /// lesson with this slug.
    pub fn lesson(&self, module: &Slug, lesson: &Slug) -> Result<&Lesson, QueryError> {
        self.module(module)?
            .lessons()
            .iter()
            .find(|candidate| candidate.slug() == lesson)
            .ok_or_else(|| QueryError::LessonNotFound {
                module: module.clone(),
                lesson: lesson.clone(),
            })
    }

    /// Finds the lessons immediately before and after the given lesson in
    /// its module's authored order.
    ///
    /// The first lesson has no `previous`; the last has no `next`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ModuleNotFound`] if the module slug does not
    /// resolve, or [`QueryError::LessonNotFound`] if the module has no
    /// lesson with this slug. A missing lesson is a hard error here, not an
    /// "isolated lesson with no neighbours".
    pub fn adjacent_lessons(
        &self,
        module: &Slug,
        lesson: &Slug,
    ) -> Result<Neighbours<'_>, QueryError> {
        let lessons = self.module(module)?.lessons();
        let index = lessons
            .iter()
            .position(|candidate| candidate.slug() == lesson)
            .ok_or_else(|| QueryError::LessonNotFound {
                module: module.clone(),
                lesson: lesson.clone(),
            })?;

        Ok(Neighbours {
            previous: index.checked_sub(1).and_then(|i| lessons.get(i)),
            next: lessons.get(index + 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use nonempty::NonEmpty;

    use super::QueryError;
    use crate::{
        catalog::Catalog,
        domain::{Lesson, Level, Module, Slug},
    };

    fn slug(s: &str) -> Slug {
        Slug::try_from(s).unwrap()
    }

    fn lesson(s: &str) -> Lesson {
        Lesson::new(slug(s), s.to_string(), NonZeroU32::new(10).unwrap(), Vec::new())
    }

    /// A module with four lessons, `first` through `fourth`.
    fn fixture() -> Catalog {
        let lessons = NonEmpty::from((
            lesson("first"),
            vec![lesson("second"), lesson("third"), lesson("fourth")],
        ));
        let module = Module::new(
            slug("fixture"),
            "Fixture",
            "A module for query tests.",
            Level::Beginner,
            Vec::new(),
            lessons,
        );

        let mut catalog = Catalog::new();
        catalog.insert(module);
        catalog
    }

    #[test]
    fn every_lesson_is_retrievable_by_scoped_slug() {
        let catalog = fixture();
        let module = catalog.module(&slug("fixture")).unwrap().clone();

        for expected in module.lessons().iter() {
            let found = catalog.lesson(&slug("fixture"), expected.slug()).unwrap();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn lesson_lookup_in_missing_module_reports_the_module() {
        let catalog = fixture();
        assert_eq!(
            catalog.lesson(&slug("storage"), &slug("first")),
            Err(QueryError::ModuleNotFound(slug("storage")))
        );
    }

    #[test]
    fn missing_lesson_reports_both_slugs() {
        let catalog = fixture();
        assert_eq!(
            catalog.lesson(&slug("fixture"), &slug("fifth")),
            Err(QueryError::LessonNotFound {
                module: slug("fixture"),
                lesson: slug("fifth"),
            })
        );
    }

    #[test]
    fn interior_lessons_have_both_neighbours() {
        let catalog = fixture();

        for (current, previous, next) in
            [("second", "first", "third"), ("third", "second", "fourth")]
        {
            let neighbours = catalog.adjacent_lessons(&slug("fixture"), &slug(current)).unwrap();
            assert_eq!(neighbours.previous.unwrap().slug().as_str(), previous);
            assert_eq!(neighbours.next.unwrap().slug().as_str(), next);
        }
    }

    #[test]
    fn first_lesson_has_no_previous() {
        let catalog = fixture();
        let neighbours = catalog.adjacent_lessons(&slug("fixture"), &slug("first")).unwrap();
        assert!(neighbours.previous.is_none());
        assert_eq!(neighbours.next.unwrap().slug().as_str(), "second");
    }

    #[test]
    fn last_lesson_has_no_next() {
        let catalog = fixture();
        let neighbours = catalog.adjacent_lessons(&slug("fixture"), &slug("fourth")).unwrap();
        assert_eq!(neighbours.previous.unwrap().slug().as_str(), "third");
        assert!(neighbours.next.is_none());
    }

    #[test]
    fn adjacency_for_unknown_lesson_is_an_error_not_empty_neighbours() {
        let catalog = fixture();
        assert_eq!(
            catalog.adjacent_lessons(&slug("fixture"), &slug("fifth")),
            Err(QueryError::LessonNotFound {
                module: slug("fixture"),
                lesson: slug("fifth"),
            })
        );
    }
}
