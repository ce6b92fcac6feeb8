// SVG output for the web chart and the frequency bar chart.
//
// Both charts are written as plain SVG text. The web chart is drawn from the
// scene, so whatever emphasis is currently applied shows up in the file.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::pairs::FrequencyHistogram;

use super::scale::{BandScale, LinearScale};
use super::scene::Scene;
use super::style::{self, BAR_CHART_MARGIN as MARGIN};

pub const WEB_CHART_FILE: &str = "web-chart.svg";
pub const BAR_CHART_FILE: &str = "bar-chart.svg";

/// Escape text for use in SVG content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Radial dendrogram: leaf labels around the ring, bundled edges inside.
pub fn web_chart_svg(scene: &Scene) -> String {
    let size = style::WEB_CHART_SIZE;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {size} {size}">"#,
        -size / 2.0,
        -size / 2.0
    );

    let _ = writeln!(
        svg,
        r#"  <g font-family="{}" font-size="{}">"#,
        style::FONT_FAMILY,
        style::LABEL_FONT_SIZE
    );
    for label in &scene.labels {
        let mut attrs = String::new();
        if let Some(weight) = label.font_weight() {
            let _ = write!(attrs, r#" font-weight="{weight}""#);
        }
        if let Some(fill) = label.fill() {
            let _ = write!(attrs, r#" fill="{fill}""#);
        }
        let _ = writeln!(
            svg,
            r#"    <text transform="{}" dy="0.31em" x="{}" text-anchor="{}"{attrs}>{}</text>"#,
            label.transform(),
            label.offset(),
            label.anchor(),
            escape_xml(&label.text)
        );
    }
    svg.push_str("  </g>\n");

    let _ = writeln!(
        svg,
        r#"  <g stroke="{}" stroke-linejoin="round" stroke-linecap="round" fill="none">"#,
        style::EDGE_STROKE
    );
    let blend = scene
        .edge_blend
        .css()
        .map(|mode| format!(r#" style="mix-blend-mode: {mode}""#))
        .unwrap_or_default();
    for id in scene.edge_draw_order() {
        let edge = &scene.edges[id.0];
        let _ = writeln!(
            svg,
            r#"    <path{blend} stroke="{}" stroke-width="{:.3}" d="{}"/>"#,
            edge.stroke(),
            edge.stroke_width,
            edge.path
        );
    }
    svg.push_str("  </g>\n</svg>\n");

    svg
}

/// Bar chart of the frequency histogram with counts above each bar.
pub fn bar_chart_svg(histogram: &FrequencyHistogram) -> String {
    let width = style::BAR_CHART_WIDTH;
    let height = style::BAR_CHART_HEIGHT;
    let plot_width = width - MARGIN.left - MARGIN.right;
    let plot_height = height - MARGIN.top - MARGIN.bottom;

    let x = BandScale::new(histogram.buckets.len(), (0.0, plot_width), style::BAR_PADDING);
    let y = LinearScale::new((0.0, histogram.max_pairs() as f64), (0.0, plot_height));
    let bandwidth = x.bandwidth();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <g transform="translate({}, {})">"#,
        MARGIN.left, MARGIN.top
    );

    let bars: Vec<(f64, f64, &crate::pairs::HistogramBucket)> = histogram
        .buckets
        .iter()
        .enumerate()
        .filter_map(|(i, bucket)| {
            let bar_height = if histogram.max_pairs() == 0 {
                0.0
            } else {
                y.apply(bucket.pairs as f64)
            };
            x.position(i).map(|left| (left, bar_height, bucket))
        })
        .collect();

    svg.push_str("    <g>\n");
    for (left, bar_height, _) in &bars {
        let _ = writeln!(
            svg,
            r#"      <rect x="{left:.3}" y="{:.3}" width="{bandwidth:.3}" height="{bar_height:.3}"/>"#,
            plot_height - bar_height
        );
    }
    svg.push_str("    </g>\n");

    let _ = writeln!(
        svg,
        r#"    <g font-family="{}" font-size="{}">"#,
        style::FONT_FAMILY,
        style::BAR_LABEL_FONT_SIZE
    );
    for (left, bar_height, bucket) in &bars {
        let _ = writeln!(
            svg,
            r#"      <text x="{left:.3}" y="{:.3}">{}</text>"#,
            plot_height - bar_height - 4.0,
            bucket.pairs
        );
    }
    svg.push_str("    </g>\n");

    // Bottom axis: baseline plus one tick per band
    let _ = writeln!(
        svg,
        r#"    <g transform="translate(0, {plot_height})" font-family="{}" font-size="10" text-anchor="middle">"#,
        style::FONT_FAMILY
    );
    let _ = writeln!(
        svg,
        r#"      <path stroke="currentColor" fill="none" d="M0,6V0H{plot_width}V6"/>"#
    );
    for (left, _, bucket) in &bars {
        let centre = left + bandwidth / 2.0;
        let _ = writeln!(
            svg,
            r#"      <g transform="translate({centre:.3},0)"><line stroke="currentColor" y2="6"/><text fill="currentColor" y="9" dy="0.71em">{}</text></g>"#,
            bucket.frequency
        );
    }
    svg.push_str("    </g>\n  </g>\n</svg>\n");

    svg
}

/// Write both charts into `dir`, creating it if needed.
pub fn write_charts(
    dir: &Path,
    scene: &Scene,
    histogram: &FrequencyHistogram,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let web_path = dir.join(WEB_CHART_FILE);
    std::fs::write(&web_path, web_chart_svg(scene))
        .with_context(|| format!("Failed to write {}", web_path.display()))?;

    let bar_path = dir.join(BAR_CHART_FILE);
    std::fs::write(&bar_path, bar_chart_svg(histogram))
        .with_context(|| format!("Failed to write {}", bar_path.display()))?;

    info!(web = %web_path.display(), bar = %bar_path.display(), "Wrote charts");

    Ok((web_path, bar_path))
}
