//! Pulling gameplay stats out of a roll's embed description.
//!
//! Mudae renders a roll as free text, roughly:
//!
//! ```text
//! Naruto
//! Claims: #1234
//! Likes: #567
//! **321**:kakera:
//! ```
//!
//! Each [`Field`] has one single-capture pattern. A miss is not an error, it
//! just yields `None` (an empty cell downstream).
//!
//! Hits on the counted fields are tallied in an [`ExtractionStats`] value the
//! caller owns, so there is no process-wide counter.

use regex::Regex;
use serde::Serialize;

/// A value the extractor knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `Claims: #<n>`, server-wide claim rank.
    ClaimRank,
    /// `Likes: #<n>`, popularity rank.
    LikesRank,
    /// `**<n>**:kakera`, in-game price.
    KakeraPrice,
    /// Text of the description's first line, up to a ` /` separator or the
    /// line break. A slash inside a word (`Fate/Zero`) is part of the title.
    /// A first line that is blank, starts with `/` or never ends is a miss.
    ShowTitle,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::ClaimRank,
        Field::LikesRank,
        Field::KakeraPrice,
        Field::ShowTitle,
    ];

    /// The regular expression for this field. Group 1 is the value.
    pub fn pattern(self) -> &'static str {
        match self {
            Field::ClaimRank => r"Claims: #([0-9]+)",
            Field::LikesRank => r"Likes: #([0-9]+)",
            Field::KakeraPrice => r"\*\*([0-9]+)\*\*:kakera",
            Field::ShowTitle => r"\A[ \t]*([^/\s][^\r\n]*?)(?:[ \t]+/|[ \t]*\r?\n)",
        }
    }

    /// Whether hits on this field are tallied. Show titles are best-effort.
    pub fn is_counted(self) -> bool {
        !matches!(self, Field::ShowTitle)
    }

    /// Column name used in CSV headers and log lines.
    pub fn column(self) -> &'static str {
        match self {
            Field::ClaimRank => "claim_rank",
            Field::LikesRank => "likes_rank",
            Field::KakeraPrice => "kakera_price",
            Field::ShowTitle => "show_title",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::ClaimRank => 0,
            Field::LikesRank => 1,
            Field::KakeraPrice => 2,
            Field::ShowTitle => 3,
        }
    }
}

/// Per-run hit counters for the counted fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub claim_rank: u64,
    pub likes_rank: u64,
    pub kakera_price: u64,
}

impl ExtractionStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one successful extraction. Uncounted fields are ignored.
    pub fn record_hit(&mut self, field: Field) {
        match field {
            Field::ClaimRank => self.claim_rank += 1,
            Field::LikesRank => self.likes_rank += 1,
            Field::KakeraPrice => self.kakera_price += 1,
            Field::ShowTitle => {}
        }
    }

    /// Number of hits for `field` (always `0` for uncounted fields).
    pub fn hits(&self, field: Field) -> u64 {
        match field {
            Field::ClaimRank => self.claim_rank,
            Field::LikesRank => self.likes_rank,
            Field::KakeraPrice => self.kakera_price,
            Field::ShowTitle => 0,
        }
    }

    /// Hits for `field` as a percentage of `total` attempts.
    pub fn hit_rate(&self, field: Field, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.hits(field) as f64 / total as f64 * 100.0
    }
}

/// Everything extracted from one description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GachaFields {
    pub claim_rank: Option<String>,
    pub likes_rank: Option<String>,
    pub kakera_price: Option<String>,
    pub show_title: Option<String>,
}

/// Compiled patterns for every [`Field`].
///
/// Build once per run and reuse; compiling is the expensive part.
///
/// # Example
///
/// ```
/// use mudae_stats::core::extract::{ExtractionStats, Field, FieldExtractor};
///
/// let extractor = FieldExtractor::new();
/// let text = "Some Title / extra\nClaims: #42\nLikes: #7\n**1500**:kakera:";
///
/// assert_eq!(extractor.extract(Field::ClaimRank, text), Some("42"));
/// assert_eq!(extractor.extract(Field::ShowTitle, text), Some("Some Title"));
///
/// let mut stats = ExtractionStats::new();
/// let fields = extractor.extract_all(text, &mut stats);
/// assert_eq!(fields.kakera_price.as_deref(), Some("1500"));
/// assert_eq!(stats.kakera_price, 1);
/// ```
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: [Regex; 4],
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            patterns: Field::ALL.map(|field| Regex::new(field.pattern()).unwrap()),
        }
    }

    /// Returns the first capture of `field` in `text`.
    ///
    /// Captures are trimmed; a capture that is empty after trimming is a miss.
    pub fn extract<'t>(&self, field: Field, text: &'t str) -> Option<&'t str> {
        self.patterns[field.index()]
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
    }

    /// Like [`extract`](Self::extract), tallying a hit in `stats` for counted fields.
    pub fn extract_counted<'t>(
        &self,
        field: Field,
        text: &'t str,
        stats: &mut ExtractionStats,
    ) -> Option<&'t str> {
        let found = self.extract(field, text);
        if found.is_some() && field.is_counted() {
            stats.record_hit(field);
        }
        found
    }

    /// Extracts all four fields from `description`.
    pub fn extract_all(&self, description: &str, stats: &mut ExtractionStats) -> GachaFields {
        let mut take = |field| {
            self.extract_counted(field, description, stats)
                .map(str::to_string)
        };
        GachaFields {
            claim_rank: take(Field::ClaimRank),
            likes_rank: take(Field::LikesRank),
            kakera_price: take(Field::KakeraPrice),
            show_title: take(Field::ShowTitle),
        }
    }
}
