// Bundled edges: one per retained keyword pair.
//
// Edges are stored densely; an edge's EdgeId is its index in the edge list
// and, in the render scene, the index of the path primitive that draws it.

use serde::Serialize;
use tracing::{debug, info};

use super::curve::{BundleCurve, Point, DEFAULT_BUNDLE_TENSION};
use crate::hierarchy::{Hierarchy, Layout, LeafId, NodeId};
use crate::pairs::RetainedPair;
use crate::render::scale::LinearScale;

/// Stroke width of the least frequent retained pair.
pub const MIN_STROKE_WIDTH: f64 = 0.1;
/// Stroke width of the most frequent retained pair.
pub const MAX_STROKE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct BundledEdge {
    pub id: EdgeId,
    /// Leaf of the pair's lower keyword
    pub source: LeafId,
    /// Leaf of the pair's higher keyword
    pub target: LeafId,
    pub frequency: u32,
    /// Stroke width in [MIN_STROKE_WIDTH, MAX_STROKE_WIDTH]
    pub weight: f64,
    /// Tree path from source to target through their lowest common ancestor
    pub path: Vec<NodeId>,
    pub curve: BundleCurve,
}

impl BundledEdge {
    pub fn touches(&self, leaf: LeafId) -> bool {
        self.source == leaf || self.target == leaf
    }
}

/// Turns retained pairs into bundled edges over a laid-out hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct BundleGenerator {
    /// Bundling tension: 0.0 hugs the tree, 1.0 draws straight chords
    pub tension: f64,
}

impl Default for BundleGenerator {
    fn default() -> Self {
        Self {
            tension: DEFAULT_BUNDLE_TENSION,
        }
    }
}

/// A retained pair whose keywords both resolved to leaves.
struct ResolvedPair<'a> {
    retained: &'a RetainedPair,
    source: LeafId,
    target: LeafId,
    path: Vec<NodeId>,
    curve: BundleCurve,
}

impl BundleGenerator {
    pub fn new(tension: f64) -> Self {
        Self { tension }
    }

    fn resolve<'a>(
        &self,
        tree: &Hierarchy,
        layout: &Layout,
        retained: &'a RetainedPair,
    ) -> Option<ResolvedPair<'a>> {
        let pair = &retained.pair;
        let (Some(source), Some(target)) = (tree.leaf_id(pair.low()), tree.leaf_id(pair.high()))
        else {
            debug!(pair = %pair, "Dropping pair with a keyword missing from the hierarchy");
            return None;
        };
        let from = tree.leaf_node_id(source)?;
        let to = tree.leaf_node_id(target)?;

        let path = tree.path(from, to);
        let points: Vec<Point> = path
            .iter()
            .filter_map(|&node| layout.position(node))
            .map(Point::from_polar)
            .collect();
        let curve = BundleCurve::bundle(&points, self.tension)?;

        Some(ResolvedPair {
            retained,
            source,
            target,
            path,
            curve,
        })
    }

    pub fn generate(
        &self,
        tree: &Hierarchy,
        layout: &Layout,
        retained: &[RetainedPair],
    ) -> Vec<BundledEdge> {
        let resolved: Vec<ResolvedPair> = retained
            .iter()
            .filter_map(|r| self.resolve(tree, layout, r))
            .collect();

        // Only pairs that become edges set the width domain
        let frequencies: Vec<u32> = resolved.iter().map(|r| r.retained.frequency).collect();
        let width = stroke_width_scale(&frequencies);

        let edges: Vec<BundledEdge> = resolved
            .into_iter()
            .enumerate()
            .map(|(index, r)| BundledEdge {
                id: EdgeId(index),
                source: r.source,
                target: r.target,
                frequency: r.retained.frequency,
                weight: width.apply(r.retained.frequency as f64),
                path: r.path,
                curve: r.curve,
            })
            .collect();

        info!(
            retained = retained.len(),
            edges = edges.len(),
            tension = self.tension,
            "Generated bundled edges"
        );

        edges
    }
}

/// Linear map from the edge frequency range onto the stroke-width range.
pub fn stroke_width_scale(frequencies: &[u32]) -> LinearScale {
    let min = frequencies.iter().copied().min().unwrap_or(0);
    let max = frequencies.iter().copied().max().unwrap_or(0);
    LinearScale::new(
        (min as f64, max as f64),
        (MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_scale_endpoints() {
        let scale = stroke_width_scale(&[21, 30, 41]);
        assert!((scale.apply(21.0) - MIN_STROKE_WIDTH).abs() < 1e-12);
        assert!((scale.apply(41.0) - MAX_STROKE_WIDTH).abs() < 1e-12);
        assert!((scale.apply(31.0) - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_single_frequency_maps_to_midpoint() {
        let scale = stroke_width_scale(&[25, 25]);
        assert!((scale.apply(25.0) - 0.55).abs() < 1e-12);
    }
}
