// Keyweb: keyword co-occurrence web
//
// This is the library root. Each module corresponds to one stage of the
// chart: loading, pair counting, hierarchy layout, edge bundling, hover
// highlighting, and rendering.

pub mod bundle;
pub mod config;
pub mod highlight;
pub mod hierarchy;
pub mod input;
pub mod output;
pub mod pairs;
pub mod pipeline;
pub mod render;

pub use pipeline::{ChartSettings, KeywordWeb};
