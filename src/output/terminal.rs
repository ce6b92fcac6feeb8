// Colored terminal output for the keyword web.
//
// Summary tables, the frequency histogram as text bars, and the result of a
// hover. main.rs delegates all printing here.

use colored::Colorize;

use crate::highlight::Highlight;
use crate::pairs::FrequencyHistogram;
use crate::pipeline::KeywordWeb;

/// Overall counts plus the strongest retained edges.
pub fn display_summary(web: &KeywordWeb, top: usize) {
    println!("\n{}", "=== Keyword Web ===".bold());
    println!();
    println!(
        "  Categories: {}   Keywords: {}",
        web.hierarchy.category_count(),
        web.leaf_count()
    );
    println!(
        "  Distinct pairs: {}   Retained (> {}): {}   Edges drawn: {}",
        web.table.len(),
        web.settings.retention_threshold,
        web.retained.len(),
        web.edges.len()
    );

    if web.edges.is_empty() {
        println!(
            "\n  {}",
            "No pair clears the retention threshold. Try a lower --threshold.".dimmed()
        );
        return;
    }

    println!("\n  {}", "Strongest edges:".bold());
    println!(
        "  {:>4}  {:<28} {:<28} {:>5}  {:>6}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Keyword".dimmed(),
        "Freq".dimmed(),
        "Width".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, edge) in web.strongest_edges(top).into_iter().enumerate() {
        let a = web.hierarchy.leaf_keyword(edge.source).unwrap_or("?");
        let b = web.hierarchy.leaf_keyword(edge.target).unwrap_or("?");
        println!(
            "  {:>4}. {:<28} {:<28} {:>5}  {:>6.2}",
            i + 1,
            super::truncate_chars(a, 26),
            super::truncate_chars(b, 26),
            edge.frequency,
            edge.weight,
        );
    }
    println!();
}

/// Histogram as horizontal bars, one line per frequency value.
pub fn display_histogram(histogram: &FrequencyHistogram, threshold: u32) {
    println!(
        "\n{}",
        format!(
            "=== Pair Frequencies ({} pairs) ===",
            histogram.total_pairs()
        )
        .bold()
    );
    println!();

    if histogram.is_empty() {
        println!("  No keyword pairs observed.");
        return;
    }

    let bar_width: usize = 40;
    let max = histogram.max_pairs().max(1);

    for bucket in &histogram.buckets {
        let filled = ((bucket.pairs as f64 / max as f64) * bar_width as f64).round() as usize;
        // Keep non-empty buckets visible
        let filled = filled.max(1);
        let bar = "=".repeat(filled);

        let colored_bar = if bucket.frequency > threshold {
            bar.bright_green()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>6} {} {}",
            bucket.frequency,
            colored_bar,
            bucket.pairs.to_string().dimmed()
        );
    }
    println!();
    println!(
        "  {} retained (frequency > {})",
        "==".bright_green(),
        threshold
    );
}

/// Which labels and edges a hover emphasizes.
pub fn display_highlight(web: &KeywordWeb, highlight: &Highlight) {
    let hovered = web
        .hierarchy
        .leaf_keyword(highlight.hovered)
        .unwrap_or("?");
    println!(
        "\n{}",
        format!("=== Hovering \"{hovered}\" ===").bold()
    );

    if highlight.edges.is_empty() {
        println!("  No retained edges touch this keyword.");
        return;
    }

    println!("  Emphasized edges:");
    for id in &highlight.edges {
        let Some(edge) = web.edges.get(id.0) else {
            continue;
        };
        let other = if edge.source == highlight.hovered {
            edge.target
        } else {
            edge.source
        };
        println!(
            "    {} {} {}",
            hovered.red(),
            "--".dimmed(),
            web.hierarchy.leaf_keyword(other).unwrap_or("?").red().bold(),
        );
        println!("       frequency {}  width {:.2}", edge.frequency, edge.weight);
    }

    let labels: Vec<&str> = highlight
        .leaves
        .iter()
        .filter_map(|&leaf| web.hierarchy.leaf_keyword(leaf))
        .collect();
    println!("  Emphasized labels: {}", labels.join(", ").bold());
}
