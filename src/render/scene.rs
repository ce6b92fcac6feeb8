// Drawable primitives and emphasis styling.

use std::f64::consts::PI;

use crate::bundle::EdgeId;
use crate::highlight::{Highlight, Transition};
use crate::hierarchy::{LeafId, Position};
use crate::pipeline::KeywordWeb;

use super::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Base,
    Emphasized,
}

/// Compositing of the edge layer. Multiply lets overlapping strokes darken
/// each other; it is switched off while a leaf is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Multiply,
    Normal,
}

impl BlendMode {
    pub fn css(&self) -> Option<&'static str> {
        match self {
            BlendMode::Multiply => Some("multiply"),
            BlendMode::Normal => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePrimitive {
    /// SVG path data of the bundled curve
    pub path: String,
    pub stroke_width: f64,
    pub emphasis: Emphasis,
}

impl EdgePrimitive {
    pub fn stroke(&self) -> &'static str {
        match self.emphasis {
            Emphasis::Base => style::EDGE_STROKE,
            Emphasis::Emphasized => style::ACCENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub text: String,
    pub position: Position,
    pub emphasis: Emphasis,
}

impl LabelPrimitive {
    /// Labels on the left half of the circle are flipped to stay upright.
    fn on_left_half(&self) -> bool {
        self.position.angle >= PI
    }

    /// Rotate onto the leaf's spoke, move out to the ring, flip if needed.
    pub fn transform(&self) -> String {
        let degrees = self.position.angle.to_degrees() - 90.0;
        let flip = if self.on_left_half() { 180 } else { 0 };
        format!(
            "rotate({degrees:.3}) translate({:.3},0) rotate({flip})",
            self.position.radius
        )
    }

    pub fn offset(&self) -> f64 {
        if self.on_left_half() {
            -style::LABEL_OFFSET
        } else {
            style::LABEL_OFFSET
        }
    }

    pub fn anchor(&self) -> &'static str {
        if self.on_left_half() {
            "end"
        } else {
            "start"
        }
    }

    pub fn font_weight(&self) -> Option<&'static str> {
        match self.emphasis {
            Emphasis::Base => None,
            Emphasis::Emphasized => Some("bold"),
        }
    }

    pub fn fill(&self) -> Option<&'static str> {
        match self.emphasis {
            Emphasis::Base => None,
            Emphasis::Emphasized => Some(style::ACCENT),
        }
    }
}

/// Render state of the web chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Parallel to the web's edges (index = EdgeId)
    pub edges: Vec<EdgePrimitive>,
    /// Parallel to the hierarchy's leaves (index = LeafId)
    pub labels: Vec<LabelPrimitive>,
    pub edge_blend: BlendMode,
}

impl Scene {
    pub fn from_web(web: &KeywordWeb) -> Self {
        let edges = web
            .edges
            .iter()
            .map(|edge| EdgePrimitive {
                path: edge.curve.to_svg_path(),
                stroke_width: edge.weight,
                emphasis: Emphasis::Base,
            })
            .collect();

        let labels = (0..web.hierarchy.leaf_count())
            .map(LeafId)
            .map(|leaf| LabelPrimitive {
                text: web.hierarchy.leaf_keyword(leaf).unwrap_or_default().to_string(),
                position: web.layout.leaf_position(leaf).unwrap_or(Position {
                    angle: 0.0,
                    radius: 0.0,
                }),
                emphasis: Emphasis::Base,
            })
            .collect();

        Self {
            edges,
            labels,
            edge_blend: BlendMode::Multiply,
        }
    }

    fn set(&mut self, highlight: &Highlight, emphasis: Emphasis) {
        for edge in &highlight.edges {
            if let Some(primitive) = self.edges.get_mut(edge.0) {
                primitive.emphasis = emphasis;
            }
        }
        for leaf in &highlight.leaves {
            if let Some(label) = self.labels.get_mut(leaf.0) {
                label.emphasis = emphasis;
            }
        }
    }

    pub fn apply(&mut self, highlight: &Highlight) {
        self.edge_blend = BlendMode::Normal;
        self.set(highlight, Emphasis::Emphasized);
    }

    pub fn revert(&mut self, highlight: &Highlight) {
        self.edge_blend = BlendMode::Multiply;
        self.set(highlight, Emphasis::Base);
    }

    pub fn apply_transition(&mut self, transition: &Transition) {
        match transition {
            Transition::Apply(highlight) => self.apply(highlight),
            Transition::Revert(highlight) => self.revert(highlight),
            Transition::Unchanged => {}
        }
    }

    /// Paint order of edges: resting edges first, emphasized edges on top.
    pub fn edge_draw_order(&self) -> Vec<EdgeId> {
        let (base, raised): (Vec<EdgeId>, Vec<EdgeId>) = (0..self.edges.len())
            .map(EdgeId)
            .partition(|id| self.edges[id.0].emphasis == Emphasis::Base);
        base.into_iter().chain(raised).collect()
    }

    pub fn emphasized_edges(&self) -> Vec<EdgeId> {
        (0..self.edges.len())
            .map(EdgeId)
            .filter(|id| self.edges[id.0].emphasis == Emphasis::Emphasized)
            .collect()
    }

    pub fn emphasized_labels(&self) -> Vec<LeafId> {
        (0..self.labels.len())
            .map(LeafId)
            .filter(|id| self.labels[id.0].emphasis == Emphasis::Emphasized)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn scene() -> Scene {
        let edge = |path: &str| EdgePrimitive {
            path: path.to_string(),
            stroke_width: 0.5,
            emphasis: Emphasis::Base,
        };
        let label = |text: &str, angle: f64| LabelPrimitive {
            text: text.to_string(),
            position: Position { angle, radius: 30.0 },
            emphasis: Emphasis::Base,
        };
        Scene {
            edges: vec![edge("M0,0L1,1"), edge("M1,1L2,2"), edge("M2,2L3,3")],
            labels: vec![label("a", 1.0), label("b", 2.0), label("c", 4.0)],
            edge_blend: BlendMode::Multiply,
        }
    }

    fn highlight() -> Highlight {
        Highlight {
            hovered: LeafId(0),
            edges: BTreeSet::from([EdgeId(0)]),
            leaves: BTreeSet::from([LeafId(0), LeafId(1)]),
        }
    }

    #[test]
    fn test_apply_raises_emphasized_edges() {
        let mut scene = scene();
        scene.apply(&highlight());
        assert_eq!(scene.edge_blend, BlendMode::Normal);
        assert_eq!(scene.edges[0].stroke(), style::ACCENT);
        assert_eq!(
            scene.edge_draw_order(),
            vec![EdgeId(1), EdgeId(2), EdgeId(0)]
        );
        assert_eq!(scene.emphasized_labels(), vec![LeafId(0), LeafId(1)]);
        assert_eq!(scene.labels[1].font_weight(), Some("bold"));
    }

    #[test]
    fn test_revert_restores_scene() {
        let original = scene();
        let mut scene = original.clone();
        scene.apply(&highlight());
        scene.revert(&highlight());
        assert_eq!(scene, original);
        assert_eq!(
            scene.edge_draw_order(),
            vec![EdgeId(0), EdgeId(1), EdgeId(2)]
        );
    }

    #[test]
    fn test_left_half_labels_flip() {
        let scene = scene();
        assert_eq!(scene.labels[0].anchor(), "start");
        assert_eq!(scene.labels[2].anchor(), "end");
        assert!(scene.labels[2].offset() < 0.0);
        assert!(scene.labels[2].transform().ends_with("rotate(180)"));
    }
}
