use std::{fmt, num::NonZeroU32};

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use super::{ContentBlock, Resource, Slug};

/// A curriculum module: an ordered, non-empty sequence of lessons on one
/// topic, plus module-level learning objectives and external resources.
///
/// Modules are constructed once at catalog-build time and are immutable
/// afterwards. A module slug is unique across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    slug: Slug,
    title: String,
    description: String,
    level: Level,
    #[serde(rename = "learningObjectives")]
    objectives: Vec<String>,
    lessons: NonEmpty<Lesson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    resources: Vec<Resource>,
}

impl Module {
    /// Creates a new module.
    ///
    /// # Panics
    ///
    /// Panics if two lessons share a slug. Lesson slugs must be unique within
    /// their owning module; a duplicate is an authoring error caught at
    /// catalog-build time.
    #[must_use]
    pub fn new(
        slug: Slug,
        title: impl Into<String>,
        description: impl Into<String>,
        level: Level,
        objectives: Vec<String>,
        lessons: NonEmpty<Lesson>,
    ) -> Self {
        for (i, lesson) in lessons.iter().enumerate() {
            let duplicate = lessons.iter().skip(i + 1).any(|other| other.slug == lesson.slug);
            assert!(!duplicate, "duplicate lesson slug in module '{slug}': {}", lesson.slug);
        }

        Self {
            slug,
            title: title.into(),
            description: description.into(),
            level,
            objectives,
            lessons,
            resources: Vec::new(),
        }
    }

    /// Attaches module-level resources, replacing any existing ones.
    #[must_use]
    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    /// The module's slug.
    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    /// The module's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// One-paragraph description of the module.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The difficulty level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The learning objectives, in authored order.
    #[must_use]
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }

    /// The lessons, in authored order. Never empty.
    #[must_use]
    pub const fn lessons(&self) -> &NonEmpty<Lesson> {
        &self.lessons
    }

    /// Module-level external resources.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The total estimated duration of all lessons, in minutes.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.lessons.iter().map(|lesson| lesson.duration.get()).sum()
    }
}

/// The difficulty level of a [`Module`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No prior Kubernetes experience assumed.
    Beginner,
    /// Assumes familiarity with the basics.
    Intermediate,
    /// Deep-dive material.
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// A single lesson within a [`Module`].
///
/// A lesson's slug is unique within its owning module but not globally, so
/// lookups are always scoped by `(module slug, lesson slug)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    slug: Slug,
    title: String,
    /// Estimated reading time in minutes.
    duration: NonZeroU32,
    content: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    resources: Vec<Resource>,
}

impl Lesson {
    /// Creates a new lesson.
    #[must_use]
    pub fn new(
        slug: Slug,
        title: impl Into<String>,
        duration: NonZeroU32,
        content: Vec<ContentBlock>,
    ) -> Self {
        Self {
            slug,
            title: title.into(),
            duration,
            content,
            resources: Vec::new(),
        }
    }

    /// Attaches lesson-level resources, replacing any existing ones.
    #[must_use]
    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    /// The lesson's slug, unique within its owning module.
    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    /// The lesson's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Estimated reading time in minutes.
    #[must_use]
    pub const fn duration(&self) -> NonZeroU32 {
        self.duration
    }

    /// The content blocks, in reading order.
    #[must_use]
    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    /// Lesson-level external resources.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use nonempty::NonEmpty;

    use super::{Lesson, Level, Module};
    use crate::domain::Slug;

    fn lesson(slug: &str) -> Lesson {
        Lesson::new(
            Slug::try_from(slug).unwrap(),
            slug.to_string(),
            NonZeroU32::new(10).unwrap(),
            Vec::new(),
        )
    }

    #[test]
    fn total_minutes_sums_lesson_durations() {
        let module = Module::new(
            Slug::try_from("introduction").unwrap(),
            "Introduction",
            "An introduction.",
            Level::Beginner,
            Vec::new(),
            NonEmpty::from((lesson("a"), vec![lesson("b"), lesson("c")])),
        );
        assert_eq!(module.total_minutes(), 30);
    }

    #[test]
    #[should_panic(expected = "duplicate lesson slug")]
    fn duplicate_lesson_slugs_are_rejected() {
        let _ = Module::new(
            Slug::try_from("introduction").unwrap(),
            "Introduction",
            "An introduction.",
            Level::Beginner,
            Vec::new(),
            NonEmpty::from((lesson("a"), vec![lesson("a")])),
        );
    }

    #[test]
    fn level_displays_lowercase() {
        assert_eq!(Level::Intermediate.to_string(), "intermediate");
    }
}
