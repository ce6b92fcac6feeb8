use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use keyweb::config::Config;
use keyweb::highlight::Transition;
use keyweb::input::{load_categories, load_records};
use keyweb::output::terminal;
use keyweb::render::{svg, InteractiveChart};
use keyweb::KeywordWeb;

/// Keyweb: keyword co-occurrence web.
///
/// Draws keywords as a radial dendrogram grouped by category and bundles an
/// edge between every pair that co-occurs often enough in the corpus.
#[derive(Parser)]
#[command(name = "keyweb", version, about)]
struct Cli {
    /// Categories table (overrides KEYWEB_CATEGORIES_PATH)
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Keyword records JSON (overrides KEYWEB_KEYWORDS_PATH)
    #[arg(long, global = true)]
    keywords: Option<PathBuf>,

    /// Pairs must co-occur more than this many times (overrides KEYWEB_RETENTION_THRESHOLD)
    #[arg(long, global = true)]
    threshold: Option<u32>,

    /// Bundling tension, 0 = follow the tree, 1 = straight chords (overrides KEYWEB_BUNDLE_TENSION)
    #[arg(long, global = true)]
    tension: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counts and the strongest edges
    Summary {
        /// How many edges to list (default: 15)
        #[arg(long, default_value = "15")]
        top: usize,
    },

    /// Show the distribution of pair frequencies
    Histogram,

    /// Show what hovering a keyword emphasizes
    Hover {
        /// The keyword to hover
        keyword: String,
    },

    /// Write the web chart and bar chart as SVG files
    Render {
        /// Output directory (overrides KEYWEB_OUTPUT_DIR)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Render the web chart with this keyword hovered
        #[arg(long)]
        hover: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keyweb=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Summary { top } => {
            let web = build_web(&config)?;
            terminal::display_summary(&web, top);
        }

        Commands::Histogram => {
            let web = build_web(&config)?;
            terminal::display_histogram(&web.histogram, config.retention_threshold);
        }

        Commands::Hover { keyword } => {
            let web = build_web(&config)?;
            let mut chart = InteractiveChart::new(web);

            let transition = chart.hover_keyword(&keyword)?;
            if let Transition::Apply(highlight) = &transition {
                terminal::display_highlight(chart.web(), highlight);
            }
            chart.leave_keyword(&keyword)?;
        }

        Commands::Render { out, hover } => {
            let web = build_web(&config)?;
            let mut chart = InteractiveChart::new(web);

            if let Some(keyword) = &hover {
                chart.hover_keyword(keyword)?;
                info!(keyword = keyword.as_str(), "Rendering with hover applied");
            }

            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            let (web_path, bar_path) =
                svg::write_charts(&out_dir, chart.scene(), &chart.web().histogram)?;

            println!("{}", "Charts written.".bold());
            println!("  Web chart: {}", web_path.display());
            println!("  Bar chart: {}", bar_path.display());
        }
    }

    Ok(())
}

/// Environment config with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(path) = &cli.categories {
        config.categories_path = path.clone();
    }
    if let Some(path) = &cli.keywords {
        config.keywords_path = path.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.retention_threshold = threshold;
    }
    if let Some(tension) = cli.tension {
        config.bundle_tension = tension;
    }
    config.validate()?;
    Ok(config)
}

/// Load both inputs and run the full pipeline.
fn build_web(config: &Config) -> Result<KeywordWeb> {
    let categories = load_categories(&config.categories_path).with_context(|| {
        format!(
            "Could not load categories. Set KEYWEB_CATEGORIES_PATH or pass --categories \
             (looked for {}).",
            config.categories_path.display()
        )
    })?;
    let records = load_records(&config.keywords_path).with_context(|| {
        format!(
            "Could not load keyword records. Set KEYWEB_KEYWORDS_PATH or pass --keywords \
             (looked for {}).",
            config.keywords_path.display()
        )
    })?;

    Ok(KeywordWeb::build(
        &categories,
        &records,
        config.chart_settings(),
    ))
}
