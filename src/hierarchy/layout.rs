// Radial cluster layout.
//
// Leaves are spread around the circle in traversal order; every internal
// node sits at the mean angle of its children. Radii depend on node height:
// leaves on the outer ring, the root at the centre. The result only depends
// on the tree, so it is fully deterministic and needs no drawing surface.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::warn;

use super::tree::{Hierarchy, LeafId, NodeId};

/// Outer ring radius for a 100-unit wide chart (width / 3).
pub const DEFAULT_LEAF_RADIUS: f64 = 100.0 / 3.0;

/// Polar position: angle in radians (0 at twelve o'clock, clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub angle: f64,
    pub radius: f64,
}

/// Parameters of the cluster layout.
#[derive(Debug, Clone, Copy)]
pub struct ClusterLayout {
    /// Radius of the leaf ring
    pub leaf_radius: f64,
    /// Spacing between neighbouring leaves of different categories, relative
    /// to the spacing between siblings (1.0 = evenly spaced). Must be finite
    /// and positive; anything else lays out as 1.0.
    pub category_separation: f64,
}

impl Default for ClusterLayout {
    fn default() -> Self {
        Self {
            leaf_radius: DEFAULT_LEAF_RADIUS,
            category_separation: 1.0,
        }
    }
}

/// Per-node positions, indexed by NodeId.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    positions: Vec<Position>,
    leaves: Vec<NodeId>,
}

impl Layout {
    pub fn position(&self, node: NodeId) -> Option<Position> {
        self.positions.get(node.0).copied()
    }

    pub fn leaf_position(&self, leaf: LeafId) -> Option<Position> {
        self.leaves.get(leaf.0).and_then(|&node| self.position(node))
    }

    /// Leaf positions in traversal order.
    pub fn leaf_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.leaves.iter().map(|node| self.positions[node.0])
    }
}

impl ClusterLayout {
    /// Category separation actually used. Zero or negative gaps would make
    /// leaf offsets collide or run backwards.
    fn category_gap(&self) -> f64 {
        if self.category_separation.is_finite() && self.category_separation > 0.0 {
            self.category_separation
        } else {
            1.0
        }
    }

    fn separation(&self, tree: &Hierarchy, a: NodeId, b: NodeId) -> f64 {
        let parent = |id: NodeId| tree.node(id).and_then(|n| n.parent);
        if parent(a) == parent(b) {
            1.0
        } else {
            self.category_gap()
        }
    }

    pub fn layout(&self, tree: &Hierarchy) -> Layout {
        if self.category_gap() != self.category_separation {
            warn!(
                category_separation = self.category_separation,
                "Invalid category separation, laying out evenly"
            );
        }

        let node_count = tree.nodes().len();
        let leaves = tree.leaves().to_vec();

        // Pass 1: raw leaf offsets along the circumference
        let mut offsets = vec![0.0; node_count];
        let mut previous: Option<NodeId> = None;
        let mut cursor = 0.0;
        for &leaf in &leaves {
            if let Some(prev) = previous {
                cursor += self.separation(tree, prev, leaf);
            }
            offsets[leaf.0] = cursor;
            previous = Some(leaf);
        }

        // Pass 2: internal offsets are the mean of their children. Children
        // always have a larger NodeId than their parent, so walk backwards.
        let mut heights = vec![0usize; node_count];
        for index in (0..node_count).rev() {
            let node = &tree.nodes()[index];
            if node.children.is_empty() {
                continue;
            }
            let sum: f64 = node.children.iter().map(|c| offsets[c.0]).sum();
            offsets[index] = sum / node.children.len() as f64;
            heights[index] = 1 + node.children.iter().map(|c| heights[c.0]).max().unwrap_or(0);
        }

        // Close the circle with half a separation on either side
        let (start, end) = match (leaves.first(), leaves.last()) {
            (Some(&first), Some(&last)) => {
                let gap = self.separation(tree, first, last);
                (offsets[first.0] - gap / 2.0, offsets[last.0] + gap / 2.0)
            }
            _ => (0.0, 1.0),
        };
        let span = end - start;

        let root_height = heights[tree.root().0];
        let positions = (0..node_count)
            .map(|index| {
                let angle = if leaves.is_empty() {
                    0.0
                } else {
                    (offsets[index] - start) / span * TAU
                };
                let radius = if root_height == 0 {
                    0.0
                } else {
                    (1.0 - heights[index] as f64 / root_height as f64) * self.leaf_radius
                };
                Position { angle, radius }
            })
            .collect();

        Layout { positions, leaves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{HierarchyBuilder, LeafOrder};
    use crate::input::CategoryRecord;

    fn tree() -> Hierarchy {
        HierarchyBuilder::new(LeafOrder::Ascending).build(&[
            CategoryRecord::new("Cat1", "kw1"),
            CategoryRecord::new("Cat1", "kw2"),
            CategoryRecord::new("Cat2", "kw3"),
            CategoryRecord::new("Cat2", "kw4"),
        ])
    }

    #[test]
    fn test_even_spacing() {
        let layout = ClusterLayout::default().layout(&tree());
        let angles: Vec<f64> = layout.leaf_positions().map(|p| p.angle).collect();
        let expected = [0.5, 1.5, 2.5, 3.5].map(|i| i / 4.0 * TAU);
        for (a, e) in angles.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "expected {e}, got {a}");
        }
    }

    #[test]
    fn test_radii_by_height() {
        let tree = tree();
        let layout = ClusterLayout::default().layout(&tree);
        assert_eq!(layout.position(tree.root()).unwrap().radius, 0.0);
        let category = tree.root_node().children[0];
        let r = layout.position(category).unwrap().radius;
        assert!((r - DEFAULT_LEAF_RADIUS / 2.0).abs() < 1e-12);
        for p in layout.leaf_positions() {
            assert_eq!(p.radius, DEFAULT_LEAF_RADIUS);
        }
    }

    #[test]
    fn test_category_at_mean_of_children() {
        let tree = tree();
        let layout = ClusterLayout::default().layout(&tree);
        let category = tree.root_node().children[0];
        let mean = (layout.leaf_position(LeafId(0)).unwrap().angle
            + layout.leaf_position(LeafId(1)).unwrap().angle)
            / 2.0;
        assert!((layout.position(category).unwrap().angle - mean).abs() < 1e-12);
    }

    #[test]
    fn test_category_separation_widens_gap() {
        let layout = ClusterLayout {
            category_separation: 2.0,
            ..Default::default()
        }
        .layout(&tree());
        let a: Vec<f64> = layout.leaf_positions().map(|p| p.angle).collect();
        let sibling_gap = a[1] - a[0];
        let category_gap = a[2] - a[1];
        assert!((category_gap - 2.0 * sibling_gap).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_separation_falls_back_to_even_spacing() {
        // One leaf per category, so every gap is a category gap
        let tree = HierarchyBuilder::new(LeafOrder::Ascending).build(&[
            CategoryRecord::new("A", "a"),
            CategoryRecord::new("B", "b"),
            CategoryRecord::new("C", "c"),
        ]);
        let even: Vec<f64> = ClusterLayout::default()
            .layout(&tree)
            .leaf_positions()
            .map(|p| p.angle)
            .collect();

        for separation in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let layout = ClusterLayout {
                category_separation: separation,
                ..Default::default()
            }
            .layout(&tree);
            let angles: Vec<f64> = layout.leaf_positions().map(|p| p.angle).collect();
            assert_eq!(angles, even, "separation {separation}");
            assert!(angles.iter().all(|&a| (0.0..TAU).contains(&a)));
        }
    }

    #[test]
    fn test_empty_tree() {
        let tree = HierarchyBuilder::default().build(&[]);
        let layout = ClusterLayout::default().layout(&tree);
        assert_eq!(layout.leaf_positions().count(), 0);
        assert_eq!(
            layout.position(tree.root()),
            Some(Position { angle: 0.0, radius: 0.0 })
        );
    }
}
