//! Terminal output utilities
//!
//! Status lines go to stderr so that stdout only ever carries results.

use owo_colors::OwoColorize;
use sffuzzy::SearchResultSet;
use std::fmt::Write;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        format!("{}µs", duration.as_micros())
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1000.0)
    } else {
        format!("{:.2}s", secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Render results as an aligned text table.
///
/// Rows scoring the best score are highlighted when `colored` is set.
pub fn render_table(found: &SearchResultSet, colored: bool) -> String {
    let with_documents = found.results.iter().any(|r| r.related_document.is_some());
    let score_width = found
        .results
        .iter()
        .map(|r| r.score.to_string().len())
        .max()
        .unwrap_or(0)
        .max("score".len());

    let mut out = String::new();
    let header = if with_documents {
        format!("{:>4}  {:>score_width$}  {:>7}  {:>5}  target  document", "#", "score", "matches", "typos")
    } else {
        format!("{:>4}  {:>score_width$}  {:>7}  {:>5}  target", "#", "score", "matches", "typos")
    };
    if colored {
        let _ = writeln!(out, "{}", header.bold());
    } else {
        let _ = writeln!(out, "{}", header);
    }

    for (rank, result) in found.results.iter().enumerate() {
        let mut row = format!(
            "{:>4}  {:>score_width$}  {:>7}  {:>5}  {}",
            rank + 1,
            result.score,
            result.match_count,
            result.typos,
            result.target
        );
        if let Some(document) = &result.related_document {
            row.push_str("  ");
            row.push_str(document);
        }

        if colored && result.score == found.best_score {
            let _ = writeln!(out, "{}", row.green());
        } else if colored {
            let _ = writeln!(out, "{}", row.dimmed());
        } else {
            let _ = writeln!(out, "{}", row);
        }
    }

    out
}
