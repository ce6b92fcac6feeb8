// Category/keyword hierarchy and its radial cluster layout.

pub mod layout;
pub mod tree;

pub use layout::{ClusterLayout, Layout, Position, DEFAULT_LEAF_RADIUS};
pub use tree::{Hierarchy, HierarchyBuilder, LeafId, LeafOrder, Node, NodeId, NodeKind};
