// Hover highlighting: which edges and labels to emphasize for a hovered leaf.
//
// `compute_highlight` is a pure function over the immutable edge list. The
// state machine only decides when a selection is applied or reverted; the
// render scene does the actual restyling.

pub mod selection;
pub mod state;

pub use selection::{compute_highlight, compute_keyword_highlight, Highlight};
pub use state::{HighlightError, HighlightMachine, HighlightState, PointerEvent, Transition};
