// Pure hover selection.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::bundle::{BundledEdge, EdgeId};
use crate::hierarchy::{Hierarchy, LeafId};

/// Edges and labels emphasized while `hovered` is under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub hovered: LeafId,
    pub edges: BTreeSet<EdgeId>,
    /// Always contains `hovered`
    pub leaves: BTreeSet<LeafId>,
}

/// Select every edge with `hovered` as an endpoint and every leaf those
/// edges reference, plus `hovered` itself.
pub fn compute_highlight(hovered: LeafId, edges: &[BundledEdge]) -> Highlight {
    let mut selected_edges = BTreeSet::new();
    let mut leaves = BTreeSet::from([hovered]);

    for edge in edges.iter().filter(|e| e.touches(hovered)) {
        selected_edges.insert(edge.id);
        leaves.insert(edge.source);
        leaves.insert(edge.target);
    }

    Highlight {
        hovered,
        edges: selected_edges,
        leaves,
    }
}

/// Keyword-level selection used for pointer hovers.
///
/// Edges attach to the first leaf of a keyword, so a hover on any other leaf
/// with the same keyword selects through that first leaf. Every leaf whose
/// keyword is selected is emphasized, including all twins of the hovered one.
pub fn compute_keyword_highlight(
    hovered: LeafId,
    tree: &Hierarchy,
    edges: &[BundledEdge],
) -> Highlight {
    let anchor = tree
        .leaf_keyword(hovered)
        .and_then(|keyword| tree.leaf_id(keyword))
        .unwrap_or(hovered);
    let selection = compute_highlight(anchor, edges);

    let keywords: BTreeSet<&str> = selection
        .leaves
        .iter()
        .filter_map(|&leaf| tree.leaf_keyword(leaf))
        .collect();
    let mut leaves: BTreeSet<LeafId> = keywords
        .iter()
        .flat_map(|&keyword| tree.leaves_with_keyword(keyword))
        .collect();
    leaves.insert(hovered);

    Highlight {
        hovered,
        edges: selection.edges,
        leaves,
    }
}
