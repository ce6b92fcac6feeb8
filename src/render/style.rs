// Colours and typography shared by the chart writers.

/// Stroke of edges at rest.
pub const EDGE_STROKE: &str = "#999";
/// Stroke of emphasized edges and fill of emphasized labels.
pub const ACCENT: &str = "red";

pub const FONT_FAMILY: &str = "sans-serif";
/// Label size in web-chart units.
pub const LABEL_FONT_SIZE: f64 = 1.5;
/// Gap between the leaf ring and the start of its label.
pub const LABEL_OFFSET: f64 = 1.5;
pub const BAR_LABEL_FONT_SIZE: f64 = 8.0;

/// The web chart's viewBox is WEB_CHART_SIZE wide and tall, centred on 0.
pub const WEB_CHART_SIZE: f64 = 100.0;

pub const BAR_CHART_WIDTH: f64 = 400.0;
pub const BAR_CHART_HEIGHT: f64 = 100.0;
pub const BAR_PADDING: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const BAR_CHART_MARGIN: Margin = Margin {
    top: 10.0,
    right: 10.0,
    bottom: 30.0,
    left: 10.0,
};
