// Hierarchical edge bundling: curve geometry for retained keyword pairs.

pub mod curve;
pub mod edges;

pub use curve::{BundleCurve, Point, Segment, DEFAULT_BUNDLE_TENSION};
pub use edges::{BundleGenerator, BundledEdge, EdgeId, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
