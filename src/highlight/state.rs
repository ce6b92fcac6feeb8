// Neutral/hovered state machine driven by pointer events.
//
// Only one leaf can be hovered at a time. The selection computed on enter is
// stored in the state and handed back unchanged on leave, so the revert
// touches exactly what the apply touched.

use crate::bundle::BundledEdge;
use crate::hierarchy::{Hierarchy, LeafId};

use super::selection::{compute_keyword_highlight, Highlight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(LeafId),
    Leave(LeafId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightState {
    #[default]
    Neutral,
    Hovered(Highlight),
}

/// What the renderer must do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Apply(Highlight),
    Revert(Highlight),
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    #[error("Leaf {0:?} does not exist")]
    UnknownLeaf(LeafId),

    #[error("No leaf for keyword '{0}'")]
    UnknownKeyword(String),

    #[error("Pointer entered {requested:?} while {current:?} is still hovered")]
    AlreadyHovered { current: LeafId, requested: LeafId },
}

#[derive(Debug, Clone, Default)]
pub struct HighlightMachine {
    state: HighlightState,
}

impl HighlightMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn hovered(&self) -> Option<LeafId> {
        match &self.state {
            HighlightState::Neutral => None,
            HighlightState::Hovered(highlight) => Some(highlight.hovered),
        }
    }

    /// Advance the machine by one pointer event.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        tree: &Hierarchy,
        edges: &[BundledEdge],
    ) -> Result<Transition, HighlightError> {
        match event {
            PointerEvent::Enter(leaf) => {
                if leaf.0 >= tree.leaf_count() {
                    return Err(HighlightError::UnknownLeaf(leaf));
                }
                if let Some(current) = self.hovered() {
                    return Err(HighlightError::AlreadyHovered {
                        current,
                        requested: leaf,
                    });
                }
                let highlight = compute_keyword_highlight(leaf, tree, edges);
                self.state = HighlightState::Hovered(highlight.clone());
                Ok(Transition::Apply(highlight))
            }
            PointerEvent::Leave(leaf) => {
                if self.hovered() != Some(leaf) {
                    return Ok(Transition::Unchanged);
                }
                match std::mem::take(&mut self.state) {
                    HighlightState::Hovered(highlight) => Ok(Transition::Revert(highlight)),
                    HighlightState::Neutral => Ok(Transition::Unchanged),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::HierarchyBuilder;
    use crate::input::CategoryRecord;

    fn tree() -> Hierarchy {
        HierarchyBuilder::default().build(&[
            CategoryRecord::new("Cat1", "kw1"),
            CategoryRecord::new("Cat1", "kw2"),
        ])
    }

    #[test]
    fn test_enter_then_leave() {
        let mut machine = HighlightMachine::new();
        let t = machine.handle(PointerEvent::Enter(LeafId(0)), &tree(), &[]).unwrap();
        assert!(matches!(t, Transition::Apply(ref h) if h.hovered == LeafId(0)));
        assert_eq!(machine.hovered(), Some(LeafId(0)));

        let t = machine.handle(PointerEvent::Leave(LeafId(0)), &tree(), &[]).unwrap();
        assert!(matches!(t, Transition::Revert(_)));
        assert_eq!(machine.state(), &HighlightState::Neutral);
    }

    #[test]
    fn test_leave_without_enter_is_unchanged() {
        let mut machine = HighlightMachine::new();
        let t = machine.handle(PointerEvent::Leave(LeafId(1)), &tree(), &[]).unwrap();
        assert_eq!(t, Transition::Unchanged);
    }

    #[test]
    fn test_second_enter_is_rejected() {
        let mut machine = HighlightMachine::new();
        machine.handle(PointerEvent::Enter(LeafId(0)), &tree(), &[]).unwrap();
        let err = machine
            .handle(PointerEvent::Enter(LeafId(1)), &tree(), &[])
            .unwrap_err();
        assert_eq!(
            err,
            HighlightError::AlreadyHovered {
                current: LeafId(0),
                requested: LeafId(1)
            }
        );
        // The first hover is still in place
        assert_eq!(machine.hovered(), Some(LeafId(0)));
    }

    #[test]
    fn test_unknown_leaf() {
        let mut machine = HighlightMachine::new();
        assert_eq!(
            machine.handle(PointerEvent::Enter(LeafId(5)), &tree(), &[]),
            Err(HighlightError::UnknownLeaf(LeafId(5)))
        );
    }
}
