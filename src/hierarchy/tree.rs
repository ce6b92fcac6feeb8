// Two-level tree: root -> one node per category -> one leaf per keyword.
//
// Nodes live in a flat arena indexed by NodeId. Leaves additionally get a
// dense LeafId in traversal order, which is also the order angles are
// assigned in and the index of their label in the render scene.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::input::CategoryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LeafId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Category(String),
    Leaf { category: String, keyword: String },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub depth: usize,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Display name: category name, keyword, or empty for the root.
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Root => "",
            NodeKind::Category(name) => name,
            NodeKind::Leaf { keyword, .. } => keyword,
        }
    }
}

/// Ordering applied to category names and to keywords within a category.
///
/// Both use plain lexicographic `str` comparison; only the direction varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafOrder {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for LeafOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(LeafOrder::Ascending),
            "desc" | "descending" => Ok(LeafOrder::Descending),
            other => Err(format!(
                "unknown leaf order '{other}' (expected ascending or descending)"
            )),
        }
    }
}

/// Groups category rows into a Hierarchy with a fixed traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyBuilder {
    pub order: LeafOrder,
}

impl HierarchyBuilder {
    pub fn new(order: LeafOrder) -> Self {
        Self { order }
    }

    pub fn build(&self, records: &[CategoryRecord]) -> Hierarchy {
        // BTreeMap/BTreeSet give ascending order and collapse duplicate rows
        let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for record in records {
            grouped
                .entry(record.category.as_str())
                .or_default()
                .insert(record.keyword.as_str());
        }

        let mut categories: Vec<(&str, Vec<&str>)> = grouped
            .into_iter()
            .map(|(category, keywords)| (category, keywords.into_iter().collect()))
            .collect();
        if self.order == LeafOrder::Descending {
            categories.reverse();
            for (_, keywords) in &mut categories {
                keywords.reverse();
            }
        }

        let mut tree = Hierarchy::with_root();
        for (category, keywords) in categories {
            let category_id = tree.push(NodeKind::Category(category.to_string()), tree.root());
            for keyword in keywords {
                let leaf_node = tree.push(
                    NodeKind::Leaf {
                        category: category.to_string(),
                        keyword: keyword.to_string(),
                    },
                    category_id,
                );
                let leaf_id = LeafId(tree.leaves.len());
                tree.leaves.push(leaf_node);
                if let Some(first) = tree.leaf_by_keyword.get(keyword) {
                    let first_category = tree.leaf_category(*first).unwrap_or_default();
                    warn!(
                        keyword,
                        category,
                        first_category,
                        "Keyword listed under several categories; edges attach to the first leaf"
                    );
                } else {
                    tree.leaf_by_keyword.insert(keyword.to_string(), leaf_id);
                }
            }
        }

        info!(
            categories = tree.root_node().children.len(),
            leaves = tree.leaves.len(),
            "Built keyword hierarchy"
        );

        tree
    }
}

/// Arena-backed category/keyword tree.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    leaves: Vec<NodeId>,
    leaf_by_keyword: HashMap<String, LeafId>,
}

impl Hierarchy {
    fn with_root() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
            leaves: Vec::new(),
            leaf_by_keyword: HashMap::new(),
        }
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root_node(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Leaf node ids in traversal order (indexed by LeafId).
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn category_count(&self) -> usize {
        self.root_node().children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn leaf_node_id(&self, leaf: LeafId) -> Option<NodeId> {
        self.leaves.get(leaf.0).copied()
    }

    pub fn leaf_keyword(&self, leaf: LeafId) -> Option<&str> {
        self.leaf_node_id(leaf)
            .and_then(|id| self.node(id))
            .map(Node::name)
    }

    pub fn leaf_category(&self, leaf: LeafId) -> Option<&str> {
        match &self.node(self.leaf_node_id(leaf)?)?.kind {
            NodeKind::Leaf { category, .. } => Some(category),
            _ => None,
        }
    }

    /// The leaf that edges for `keyword` attach to, if the keyword has one.
    pub fn leaf_id(&self, keyword: &str) -> Option<LeafId> {
        self.leaf_by_keyword.get(keyword).copied()
    }

    /// Every leaf labelled `keyword`, in traversal order. More than one when
    /// the keyword is listed under several categories.
    pub fn leaves_with_keyword<'a>(
        &'a self,
        keyword: &'a str,
    ) -> impl Iterator<Item = LeafId> + 'a {
        (0..self.leaves.len())
            .map(LeafId)
            .filter(move |&leaf| self.leaf_keyword(leaf) == Some(keyword))
    }

    /// Every keyword that has a leaf.
    pub fn vocabulary(&self) -> HashSet<String> {
        self.leaf_by_keyword.keys().cloned().collect()
    }

    /// Height of the tree: 2 when any leaf exists, 0 for a bare root.
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// `node` followed by each ancestor up to and including the root.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = vec![node];
        let mut current = node;
        while let Some(parent) = self.nodes.get(current.0).and_then(|n| n.parent) {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Tree path from `from` up to the lowest common ancestor and down to `to`.
    ///
    /// Both endpoints are included; the common ancestor appears once.
    pub fn path(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let up = self.ancestors(from);
        let down = self.ancestors(to);
        let down_set: HashSet<NodeId> = down.iter().copied().collect();

        let mut path = Vec::with_capacity(up.len() + down.len());
        let mut common = None;
        for id in up {
            path.push(id);
            if down_set.contains(&id) {
                common = Some(id);
                break;
            }
        }

        if let Some(common) = common {
            let descent: Vec<NodeId> = down.into_iter().take_while(|&id| id != common).collect();
            path.extend(descent.into_iter().rev());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new("Cat1", "kw1"),
            CategoryRecord::new("Cat1", "kw2"),
            CategoryRecord::new("Cat2", "kw3"),
        ]
    }

    fn keywords(tree: &Hierarchy) -> Vec<&str> {
        (0..tree.leaf_count())
            .filter_map(|i| tree.leaf_keyword(LeafId(i)))
            .collect()
    }

    #[test]
    fn test_descending_order() {
        let tree = HierarchyBuilder::default().build(&sample());
        assert_eq!(keywords(&tree), vec!["kw3", "kw2", "kw1"]);
        assert_eq!(tree.category_count(), 2);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_ascending_order() {
        let tree = HierarchyBuilder::new(LeafOrder::Ascending).build(&sample());
        assert_eq!(keywords(&tree), vec!["kw1", "kw2", "kw3"]);
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        let mut rows = sample();
        rows.push(CategoryRecord::new("Cat1", "kw1"));
        let tree = HierarchyBuilder::default().build(&rows);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_path_within_category() {
        let tree = HierarchyBuilder::new(LeafOrder::Ascending).build(&sample());
        let a = tree.leaf_node_id(tree.leaf_id("kw1").unwrap()).unwrap();
        let b = tree.leaf_node_id(tree.leaf_id("kw2").unwrap()).unwrap();
        let path = tree.path(a, b);
        assert_eq!(path.len(), 3);
        assert_eq!(tree.node(path[1]).unwrap().name(), "Cat1");
    }

    #[test]
    fn test_path_across_categories_goes_through_root() {
        let tree = HierarchyBuilder::new(LeafOrder::Ascending).build(&sample());
        let a = tree.leaf_node_id(tree.leaf_id("kw1").unwrap()).unwrap();
        let b = tree.leaf_node_id(tree.leaf_id("kw3").unwrap()).unwrap();
        let names: Vec<&str> = tree
            .path(a, b)
            .into_iter()
            .map(|id| tree.node(id).unwrap().name())
            .collect();
        assert_eq!(names, vec!["kw1", "Cat1", "", "Cat2", "kw3"]);
    }

    #[test]
    fn test_leaf_order_parses() {
        assert_eq!("ASC".parse::<LeafOrder>().unwrap(), LeafOrder::Ascending);
        assert_eq!("descending".parse::<LeafOrder>().unwrap(), LeafOrder::Descending);
        assert!("sideways".parse::<LeafOrder>().is_err());
    }
}
