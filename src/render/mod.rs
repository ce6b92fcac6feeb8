// Rendering: the scene of drawable primitives and its SVG serialization.
//
// The scene mirrors the keyword web with two dense arrays: one path primitive
// per bundled edge (indexed by EdgeId) and one text primitive per leaf
// (indexed by LeafId). Hover emphasis is applied to and reverted from these
// arrays by index; the data structures themselves are never touched.

pub mod interactive;
pub mod scale;
pub mod scene;
pub mod style;
pub mod svg;

pub use interactive::InteractiveChart;
pub use scene::{BlendMode, EdgePrimitive, Emphasis, LabelPrimitive, Scene};
