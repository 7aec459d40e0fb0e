//! Illustrative diagrams and their interactive step state.
//!
//! Diagrams live outside the module/lesson tree in a separate [`Registry`],
//! keyed by the id stored in a `diagram` content block. Each diagram is an
//! ordered, non-empty sequence of steps; the step bodies are opaque to the
//! catalog and are interpreted only by the rendering layer.

use std::collections::BTreeMap;

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use super::Slug;

/// A multi-step illustrative diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    title: String,
    steps: NonEmpty<Step>,
}

impl Diagram {
    /// Creates a new diagram from its title and step sequence.
    #[must_use]
    pub fn new(title: impl Into<String>, steps: NonEmpty<Step>) -> Self {
        Self {
            title: title.into(),
            steps,
        }
    }

    /// The diagram's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The steps, in presentation order. Never empty.
    #[must_use]
    pub const fn steps(&self) -> &NonEmpty<Step> {
        &self.steps
    }
}

/// A single step of a [`Diagram`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Short caption describing what this step highlights.
    pub caption: String,
    /// Renderable payload. Opaque to the catalog.
    pub body: String,
}

impl Step {
    /// Creates a new step.
    #[must_use]
    pub fn new(caption: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            body: body.into(),
        }
    }
}

/// A static table of diagrams, keyed by id.
///
/// The registry is populated once at startup and is read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registry {
    diagrams: BTreeMap<Slug, Diagram>,
}

/// Error returned when a diagram id does not exist in the [`Registry`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("diagram '{0}' not found")]
pub struct NotFound(pub Slug);

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagrams: BTreeMap::new(),
        }
    }

    /// Inserts a diagram under the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is already present. Duplicate ids are an authoring
    /// error caught at registry-build time.
    pub fn insert(&mut self, id: Slug, diagram: Diagram) {
        let previous = self.diagrams.insert(id.clone(), diagram);
        assert!(previous.is_none(), "duplicate diagram id: {id}");
    }

    /// Looks up a diagram by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no diagram is registered under `id`. Callers
    /// are expected to render a "diagram not found" state rather than treat
    /// this as fatal.
    pub fn get(&self, id: &Slug) -> Result<&Diagram, NotFound> {
        self.diagrams.get(id).ok_or_else(|| NotFound(id.clone()))
    }

    /// Returns an iterator over all `(id, diagram)` pairs, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&Slug, &Diagram)> {
        self.diagrams.iter()
    }

    /// The number of registered diagrams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }
}

/// Minimum zoom percentage of a [`StepViewer`].
pub const ZOOM_MIN: u16 = 50;
/// Maximum zoom percentage of a [`StepViewer`].
pub const ZOOM_MAX: u16 = 150;
/// Zoom increment applied by one zoom-in/zoom-out action.
pub const ZOOM_STEP: u16 = 10;

/// Transient interaction state for one diagram view.
///
/// Tracks the current step index and zoom percentage, enforcing their
/// bounds: every transition at a bound is a no-op rather than a wrap. Each
/// viewer is exclusively owned by the view that created it; the diagram
/// itself is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepViewer {
    step: usize,
    total_steps: usize,
    zoom: u16,
}

impl StepViewer {
    /// Creates a viewer positioned on the first step at 100% zoom.
    #[must_use]
    pub fn new(diagram: &Diagram) -> Self {
        Self {
            step: 0,
            total_steps: diagram.steps().len(),
            zoom: 100,
        }
    }

    /// The current zero-based step index. Always `< total_steps`.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// The total number of steps in the viewed diagram. Always at least 1.
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// The current zoom percentage, in `[ZOOM_MIN, ZOOM_MAX]`.
    #[must_use]
    pub const fn zoom(&self) -> u16 {
        self.zoom
    }

    /// Advances to the next step. No-op on the last step.
    pub const fn next_step(&mut self) {
        if self.step + 1 < self.total_steps {
            self.step += 1;
        }
    }

    /// Moves back to the previous step. No-op on the first step.
    pub const fn previous_step(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// Zooms in by [`ZOOM_STEP`]. No-op at [`ZOOM_MAX`].
    pub const fn zoom_in(&mut self) {
        if self.zoom < ZOOM_MAX {
            self.zoom += ZOOM_STEP;
        }
    }

    /// Zooms out by [`ZOOM_STEP`]. No-op at [`ZOOM_MIN`].
    pub const fn zoom_out(&mut self) {
        if self.zoom > ZOOM_MIN {
            self.zoom -= ZOOM_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use nonempty::{NonEmpty, nonempty};

    use super::{Diagram, NotFound, Registry, Step, StepViewer, ZOOM_MAX, ZOOM_MIN};
    use crate::domain::Slug;

    fn diagram(steps: usize) -> Diagram {
        let mut tail: Vec<Step> = (1..steps).map(|i| Step::new(format!("step {i}"), "")).collect();
        let head = Step::new("step 0", "");
        tail.insert(0, head);
        let steps = NonEmpty::from_vec(tail).unwrap();
        Diagram::new("Test", steps)
    }

    #[test]
    fn registry_lookup_misses_with_not_found() {
        let registry = Registry::new();
        let id = Slug::try_from("k8s-architecture").unwrap();
        assert_eq!(registry.get(&id), Err(NotFound(id)));
    }

    #[test]
    fn registry_lookup_finds_registered_diagram() {
        let mut registry = Registry::new();
        let id = Slug::try_from("pod-lifecycle").unwrap();
        registry.insert(id.clone(), diagram(2));
        assert_eq!(registry.get(&id).unwrap().steps().len(), 2);
    }

    #[test]
    #[should_panic(expected = "duplicate diagram id")]
    fn registry_rejects_duplicate_ids() {
        let mut registry = Registry::new();
        let id = Slug::try_from("pod-lifecycle").unwrap();
        registry.insert(id.clone(), diagram(1));
        registry.insert(id, diagram(1));
    }

    #[test]
    fn previous_step_is_a_no_op_on_first_step() {
        let diagram = diagram(3);
        let mut viewer = StepViewer::new(&diagram);
        viewer.previous_step();
        assert_eq!(viewer.step(), 0);
    }

    #[test]
    fn next_step_is_a_no_op_on_last_step() {
        let diagram = diagram(3);
        let mut viewer = StepViewer::new(&diagram);
        viewer.next_step();
        viewer.next_step();
        assert_eq!(viewer.step(), 2);
        viewer.next_step();
        assert_eq!(viewer.step(), 2);
    }

    #[test]
    fn single_step_diagram_never_moves() {
        let diagram = diagram(1);
        let mut viewer = StepViewer::new(&diagram);
        viewer.next_step();
        viewer.previous_step();
        assert_eq!(viewer.step(), 0);
    }

    #[test]
    fn zoom_in_saturates_at_max() {
        let diagram = nonempty![Step::new("only", "")];
        let mut viewer = StepViewer::new(&Diagram::new("Test", diagram));
        for _ in 0..10 {
            viewer.zoom_in();
        }
        assert_eq!(viewer.zoom(), ZOOM_MAX);
    }

    #[test]
    fn zoom_out_saturates_at_min() {
        let diagram = diagram(1);
        let mut viewer = StepViewer::new(&diagram);
        for _ in 0..10 {
            viewer.zoom_out();
        }
        assert_eq!(viewer.zoom(), ZOOM_MIN);
    }

    #[test]
    fn zoom_stays_on_multiples_of_ten() {
        let mut viewer = StepViewer::new(&diagram(1));
        viewer.zoom_in();
        viewer.zoom_in();
        viewer.zoom_out();
        assert_eq!(viewer.zoom() % 10, 0);
        assert_eq!(viewer.zoom(), 110);
    }
}
