//! Progress display for conversions.
//!
//! On a terminal each resource type gets a spinner line counting rows and
//! output files. Elsewhere nothing is drawn and callers fall back to logging.

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

const PREFIX_WIDTH: usize = 24;

fn resource_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {prefix:<24.cyan.bold} {human_pos:>10} rows {wide_msg:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn finished_style() -> ProgressStyle {
    ProgressStyle::with_template("  {prefix:<24.dim} {human_pos:>10} rows {wide_msg:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Owns the [`MultiProgress`] shared by every bar in a run
pub struct ProgressContext {
    bars: MultiProgress,
    is_tty: bool,
}

impl ProgressContext {
    pub fn new() -> Self {
        Self {
            bars: MultiProgress::new(),
            is_tty: std::io::stderr().is_terminal(),
        }
    }

    /// Row counter for one resource type; hidden when not on a terminal
    pub fn resource_line(&self, resource_type: &str) -> ProgressBar {
        if !self.is_tty {
            return ProgressBar::hidden();
        }
        let pb = self.bars.add(ProgressBar::new_spinner());
        pb.set_style(resource_style());
        pb.set_prefix(truncate(resource_type, PREFIX_WIDTH).to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    /// For routing log output above the bars
    pub fn multi(&self) -> &MultiProgress {
        &self.bars
    }
}

impl Default for ProgressContext {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedProgress = Arc<ProgressContext>;

/// Stop the spinner but keep the final count on screen
pub fn finish_resource_line(pb: &ProgressBar, files: usize) {
    pb.set_style(finished_style());
    let noun = if files == 1 { "file" } else { "files" };
    pb.finish_with_message(format!("{files} {noun}"));
}

fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `1234567` -> `1,234,567`
pub fn fmt_num(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_groups() {
        assert_eq!(fmt_num(0), "0");
        assert_eq!(fmt_num(999), "999");
        assert_eq!(fmt_num(1_000), "1,000");
        assert_eq!(fmt_num(123_456), "123,456");
        assert_eq!(fmt_num(1_234_567), "1,234,567");
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("Patient", 24), "Patient");
        assert_eq!(truncate("MedicationKnowledge", 10), "Medication");
    }

    #[test]
    fn hidden_bars_still_count() {
        let pb = ProgressBar::hidden();
        pb.inc(5);
        finish_resource_line(&pb, 2);
        assert_eq!(pb.position(), 5);
    }
}
