//! Console rendering of corpus statistics
//!
//! Used by the command-line tool to summarize a run after the last page.

use crate::stats::StatsSnapshot;
use std::fmt::Write;

/// Number of subdomains and words shown in the console summary
const SUMMARY_ROWS: usize = 10;

/// Renders a short human-readable summary of a snapshot
pub fn render_statistics(snapshot: &StatsSnapshot) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "=== Corpus Statistics ===\n");
    let _ = writeln!(out, "Overview:");
    let _ = writeln!(out, "  Unique pages: {}", snapshot.unique_pages);
    if snapshot.longest_page.word_count > 0 {
        let _ = writeln!(
            out,
            "  Longest page: {} ({} words)",
            snapshot.longest_page.url, snapshot.longest_page.word_count
        );
    }
    let _ = writeln!(out, "  Subdomains: {}", snapshot.subdomains.len());
    let _ = writeln!(out);

    if !snapshot.subdomains.is_empty() {
        let mut busiest: Vec<_> = snapshot.subdomains.iter().collect();
        busiest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let _ = writeln!(out, "Busiest Subdomains:");
        for (host, count) in busiest.into_iter().take(SUMMARY_ROWS) {
            let _ = writeln!(out, "  {}: {}", host, count);
        }
        let _ = writeln!(out);
    }

    if !snapshot.top_words.is_empty() {
        let _ = writeln!(out, "Top Words:");
        for (word, count) in snapshot.top_words.iter().take(SUMMARY_ROWS) {
            let _ = writeln!(out, "  {}: {}", word, count);
        }
    }

    out
}
