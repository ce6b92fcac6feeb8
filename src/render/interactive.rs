// Interactive chart: the keyword web, its scene, and the hover state machine.
//
// `on_enter` / `on_leave` are the per-leaf pointer hooks a drawing layer
// wires to each label's hit region. Events are processed one at a time, to
// completion, on the caller's thread.

use tracing::debug;

use crate::highlight::{HighlightError, HighlightMachine, HighlightState, PointerEvent, Transition};
use crate::hierarchy::LeafId;
use crate::pipeline::KeywordWeb;

use super::scene::Scene;

#[derive(Debug, Clone)]
pub struct InteractiveChart {
    web: KeywordWeb,
    scene: Scene,
    machine: HighlightMachine,
}

impl InteractiveChart {
    pub fn new(web: KeywordWeb) -> Self {
        let scene = Scene::from_web(&web);
        Self {
            web,
            scene,
            machine: HighlightMachine::new(),
        }
    }

    pub fn web(&self) -> &KeywordWeb {
        &self.web
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &HighlightState {
        self.machine.state()
    }

    /// Feed one pointer event through the state machine into the scene.
    pub fn dispatch(&mut self, event: PointerEvent) -> Result<Transition, HighlightError> {
        let transition = self
            .machine
            .handle(event, &self.web.hierarchy, &self.web.edges)?;
        self.scene.apply_transition(&transition);
        if let Transition::Apply(highlight) = &transition {
            debug!(
                leaf = highlight.hovered.0,
                edges = highlight.edges.len(),
                labels = highlight.leaves.len(),
                "Hover applied"
            );
        }
        Ok(transition)
    }

    pub fn on_enter(&mut self, leaf: LeafId) -> Result<Transition, HighlightError> {
        self.dispatch(PointerEvent::Enter(leaf))
    }

    pub fn on_leave(&mut self, leaf: LeafId) -> Result<Transition, HighlightError> {
        self.dispatch(PointerEvent::Leave(leaf))
    }

    fn resolve(&self, keyword: &str) -> Result<LeafId, HighlightError> {
        self.web
            .hierarchy
            .leaf_id(keyword)
            .ok_or_else(|| HighlightError::UnknownKeyword(keyword.to_string()))
    }

    pub fn hover_keyword(&mut self, keyword: &str) -> Result<Transition, HighlightError> {
        let leaf = self.resolve(keyword)?;
        self.on_enter(leaf)
    }

    pub fn leave_keyword(&mut self, keyword: &str) -> Result<Transition, HighlightError> {
        let leaf = self.resolve(keyword)?;
        self.on_leave(leaf)
    }
}
