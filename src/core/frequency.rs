//! Per-user tally of which shows their rolls came from.
//!
//! One [`ShowFrequencies`] instance is owned by a run and filled during the
//! single pass over the export, then read to rank each user's shows.
//!
//! # Ranking
//!
//! Shows are ordered by count, highest first. Equal counts are ordered by
//! title (byte-wise ascending) so reports are reproducible.
//!
//! # Example
//!
//! ```
//! use mudae_stats::core::frequency::ShowFrequencies;
//!
//! let mut freq = ShowFrequencies::new();
//! for _ in 0..3 {
//!     freq.record("alice", "Naruto");
//! }
//! freq.record("alice", "Bleach");
//!
//! assert_eq!(
//!     freq.top_n("alice", 2),
//!     vec![("Naruto".to_string(), 3), ("Bleach".to_string(), 1)]
//! );
//! // Asking for more than exists returns what exists.
//! assert_eq!(freq.top_n("alice", 10).len(), 2);
//! ```

use std::collections::{BTreeMap, HashMap};

/// Map of user -> show title -> roll count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowFrequencies {
    users: BTreeMap<String, HashMap<String, u64>>,
}

impl ShowFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one roll of `show_title` by `user`.
    ///
    /// Blank titles are ignored. Returns `true` if something was counted.
    pub fn record(&mut self, user: &str, show_title: &str) -> bool {
        let title = show_title.trim();
        if title.is_empty() {
            return false;
        }
        *self
            .users
            .entry(user.to_string())
            .or_default()
            .entry(title.to_string())
            .or_insert(0) += 1;
        true
    }

    /// The `n` most rolled shows for `user`, most frequent first.
    ///
    /// Returns `min(n, distinct shows)` entries; an unknown user yields none.
    pub fn top_n(&self, user: &str, n: usize) -> Vec<(String, u64)> {
        let Some(shows) = self.users.get(user) else {
            return Vec::new();
        };

        let mut ranked: Vec<(&String, &u64)> = shows.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let take = n.min(ranked.len());
        ranked
            .into_iter()
            .take(take)
            .map(|(title, count)| (title.clone(), *count))
            .collect()
    }

    /// How many times `user` rolled `show_title`.
    pub fn count(&self, user: &str, show_title: &str) -> u64 {
        self.users
            .get(user)
            .and_then(|shows| shows.get(show_title.trim()))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct shows recorded for `user`.
    pub fn distinct_shows(&self, user: &str) -> usize {
        self.users.get(user).map_or(0, HashMap::len)
    }

    /// Users with at least one recorded show, in name order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Number of users tracked.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
