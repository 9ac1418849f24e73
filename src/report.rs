//! Human-facing text: the per-user show summary and count formatting.

use std::fmt::Write as _;

use crate::core::frequency::ShowFrequencies;

const SEPARATOR: &str = "------------";

/// Formats `n` with comma thousands separators, e.g. `1,234,567`.
///
/// ```
/// use mudae_stats::report::group_thousands;
///
/// assert_eq!(group_thousands(0), "0");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders every user's `top_n` shows.
///
/// Users appear in name order. Each block is the user's name, one
/// `rank. title (count)` line per show, then a separator line.
///
/// ```
/// use mudae_stats::core::frequency::ShowFrequencies;
/// use mudae_stats::report::render_summary;
///
/// let mut freq = ShowFrequencies::new();
/// freq.record("alice", "Naruto");
/// freq.record("alice", "Naruto");
/// freq.record("alice", "Bleach");
///
/// assert_eq!(
///     render_summary(&freq, 10),
///     "alice\n  1. Naruto (2)\n  2. Bleach (1)\n------------\n"
/// );
/// ```
pub fn render_summary(frequencies: &ShowFrequencies, top_n: usize) -> String {
    let mut out = String::new();
    for user in frequencies.users() {
        let _ = writeln!(out, "{user}");
        for (rank, (title, count)) in frequencies.top_n(user, top_n).iter().enumerate() {
            let _ = writeln!(out, "  {}. {} ({})", rank + 1, title, group_thousands(*count));
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}
