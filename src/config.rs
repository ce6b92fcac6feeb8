use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::hierarchy::LeafOrder;
use crate::pipeline::ChartSettings;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a
/// default; command-line flags override individual fields afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Categories table (CSV with Category and Keyword columns)
    pub categories_path: PathBuf,
    /// Keyword records (JSON array of objects with a `keywords` array)
    pub keywords_path: PathBuf,
    /// Where `render` writes the SVG charts
    pub output_dir: PathBuf,
    pub retention_threshold: u32,
    pub bundle_tension: f64,
    pub leaf_order: LeafOrder,
    pub category_separation: f64,
}

impl Default for Config {
    fn default() -> Self {
        let settings = ChartSettings::default();
        Self {
            categories_path: PathBuf::from("categoriesFullPaper.csv"),
            keywords_path: PathBuf::from("keywordsFullPaper.json"),
            output_dir: PathBuf::from("output"),
            retention_threshold: settings.retention_threshold,
            bundle_tension: settings.bundle_tension,
            leaf_order: settings.leaf_order,
            category_separation: settings.category_separation,
        }
    }
}

/// Parse an optional env var, naming the variable in the error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid value for {name}: '{raw}'")),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            categories_path: env::var("KEYWEB_CATEGORIES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.categories_path),
            keywords_path: env::var("KEYWEB_KEYWORDS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.keywords_path),
            output_dir: env::var("KEYWEB_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            retention_threshold: parse_var("KEYWEB_RETENTION_THRESHOLD")?
                .unwrap_or(defaults.retention_threshold),
            bundle_tension: parse_var("KEYWEB_BUNDLE_TENSION")?.unwrap_or(defaults.bundle_tension),
            leaf_order: parse_var("KEYWEB_LEAF_ORDER")?.unwrap_or(defaults.leaf_order),
            category_separation: parse_var("KEYWEB_CATEGORY_SEPARATION")?
                .unwrap_or(defaults.category_separation),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. Call again after applying command-line overrides.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bundle_tension) {
            anyhow::bail!(
                "Bundle tension must be between 0 and 1 (got {}).\n\
                 Set KEYWEB_BUNDLE_TENSION or pass --tension.",
                self.bundle_tension
            );
        }
        if !(self.category_separation.is_finite() && self.category_separation > 0.0) {
            anyhow::bail!(
                "KEYWEB_CATEGORY_SEPARATION must be a positive number (got {}).",
                self.category_separation
            );
        }
        Ok(())
    }

    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings {
            retention_threshold: self.retention_threshold,
            bundle_tension: self.bundle_tension,
            leaf_order: self.leaf_order,
            category_separation: self.category_separation,
            ..ChartSettings::default()
        }
    }
}
