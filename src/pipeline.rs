// Full pipeline: validated inputs in, immutable keyword web out.
//
//   categories -> hierarchy -> layout ---------------------.
//   records ----> pair table (vocabulary-filtered) -> retained -> bundled edges
//                            \-> histogram
//
// Everything here runs once, synchronously, after loading. The result is
// never mutated afterwards; hover state lives in render::interactive.

use serde::Serialize;
use tracing::info;

use crate::bundle::{BundleGenerator, BundledEdge, DEFAULT_BUNDLE_TENSION};
use crate::hierarchy::{ClusterLayout, Hierarchy, HierarchyBuilder, Layout, LeafOrder};
use crate::input::{CategoryRecord, CoOccurrenceRecord};
use crate::pairs::{
    FrequencyHistogram, PairAggregator, PairFrequencyTable, RetainedPair,
    DEFAULT_RETENTION_THRESHOLD,
};

/// Tunable parameters of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSettings {
    /// Pairs need strictly more co-occurrences than this to be drawn
    pub retention_threshold: u32,
    /// Bundling tension (0.0 = hug the tree, 1.0 = straight chords)
    pub bundle_tension: f64,
    pub leaf_order: LeafOrder,
    /// Gap between categories relative to the gap between siblings
    pub category_separation: f64,
    /// Radius of the leaf ring
    pub leaf_radius: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        let layout = ClusterLayout::default();
        Self {
            retention_threshold: DEFAULT_RETENTION_THRESHOLD,
            bundle_tension: DEFAULT_BUNDLE_TENSION,
            leaf_order: LeafOrder::default(),
            category_separation: layout.category_separation,
            leaf_radius: layout.leaf_radius,
        }
    }
}

/// Everything computed from the two inputs.
#[derive(Debug, Clone)]
pub struct KeywordWeb {
    pub settings: ChartSettings,
    pub hierarchy: Hierarchy,
    pub layout: Layout,
    pub table: PairFrequencyTable,
    pub retained: Vec<RetainedPair>,
    pub edges: Vec<BundledEdge>,
    pub histogram: FrequencyHistogram,
}

impl KeywordWeb {
    pub fn build(
        categories: &[CategoryRecord],
        records: &[CoOccurrenceRecord],
        settings: ChartSettings,
    ) -> Self {
        let hierarchy = HierarchyBuilder::new(settings.leaf_order).build(categories);
        let layout = ClusterLayout {
            leaf_radius: settings.leaf_radius,
            category_separation: settings.category_separation,
        }
        .layout(&hierarchy);

        let vocabulary = hierarchy.vocabulary();
        let table = PairAggregator::with_vocabulary(&vocabulary).aggregate(records);
        let retained = table.retained(settings.retention_threshold);
        let histogram = FrequencyHistogram::from_table(&table);

        let edges =
            BundleGenerator::new(settings.bundle_tension).generate(&hierarchy, &layout, &retained);

        info!(
            leaves = hierarchy.leaf_count(),
            pairs = table.len(),
            retained = retained.len(),
            edges = edges.len(),
            threshold = settings.retention_threshold,
            "Keyword web ready"
        );

        Self {
            settings,
            hierarchy,
            layout,
            table,
            retained,
            edges,
            histogram,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.hierarchy.leaf_count()
    }

    /// Edges ordered by descending frequency (ties keep edge order).
    pub fn strongest_edges(&self, limit: usize) -> Vec<&BundledEdge> {
        let mut edges: Vec<&BundledEdge> = self.edges.iter().collect();
        edges.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        edges.truncate(limit);
        edges
    }
}
