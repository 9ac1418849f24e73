//! The single pass over an export.
//!
//! ```text
//! Export ──► GachaFilter ──► RowBuilder ──► OutputProfile gate ──► RowSink
//!                                 │
//!                                 └──► ShowFrequencies
//! ```
//!
//! Messages are visited once, in export order, and rows reach the sink in the
//! same order. Running twice over the same export with the same configuration
//! produces identical rows.

use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, info};

use super::extract::{ExtractionStats, Field};
use super::filter::GachaFilter;
use super::frequency::ShowFrequencies;
use super::output::RowSink;
use super::row::RowBuilder;
use crate::config::{OutputProfile, PipelineConfig};
use crate::error::Result;
use crate::export::Export;
use crate::report::group_thousands;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Messages visited.
    pub scanned: usize,
    /// Messages that passed the [`GachaFilter`].
    pub eligible: usize,
    /// Rows handed to the sink.
    pub written: usize,
    /// Eligible messages dropped by the strict profile.
    pub skipped: usize,
    /// Field hit counters.
    pub extraction: ExtractionStats,
}

impl ProcessingStats {
    /// Share of eligible messages where `field` was found, as a percentage.
    pub fn hit_rate(&self, field: Field) -> f64 {
        self.extraction.hit_rate(field, self.eligible as u64)
    }

    /// Emits the end-of-run summary through `tracing`.
    pub fn log_summary(&self) {
        info!(
            "processed {} mudae messages",
            group_thousands(self.eligible as u64)
        );
        for (field, label) in [
            (Field::ClaimRank, "claim rank"),
            (Field::LikesRank, "likes rank"),
            (Field::KakeraPrice, "kakera price"),
        ] {
            info!(
                "only {} had {} information ({:.1}%)",
                group_thousands(self.extraction.hits(field)),
                label,
                self.hit_rate(field)
            );
        }
        if self.skipped > 0 {
            info!(
                "skipped {} rows missing claim rank or kakera price",
                group_thousands(self.skipped as u64)
            );
        }
    }
}

/// Filter, row builder and profile for one run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    filter: GachaFilter,
    rows: RowBuilder,
    profile: OutputProfile,
}

impl Pipeline {
    /// Prepares a pipeline, resolving the time zone up front.
    ///
    /// # Errors
    ///
    /// Returns [`MudaeError::UnknownTimeZone`](crate::MudaeError::UnknownTimeZone)
    /// for an unrecognized zone, before any message is touched.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let tz = config.resolve_timezone()?;
        Ok(Self::with_timezone(config, tz))
    }

    /// Prepares a pipeline with an already resolved zone.
    pub fn with_timezone(config: &PipelineConfig, tz: Tz) -> Self {
        Self {
            filter: GachaFilter::from_config(config),
            rows: RowBuilder::new(tz),
            profile: config.profile,
        }
    }

    /// Runs over every message in `export`.
    ///
    /// Each eligible message feeds `frequencies`; rows accepted by the
    /// profile go to `sink`. Only sink failures abort the run.
    pub fn run<S: RowSink + ?Sized>(
        &self,
        export: &Export,
        sink: &mut S,
        frequencies: &mut ShowFrequencies,
    ) -> Result<ProcessingStats> {
        info!("starting to process...");
        let mut stats = ProcessingStats {
            scanned: export.messages.len(),
            ..ProcessingStats::default()
        };

        for (msg, embed) in self.filter.rolls(&export.messages) {
            stats.eligible += 1;

            let row = self.rows.build(msg, embed, &mut stats.extraction);
            frequencies.record(&row.user, &row.show_title);

            if !self.profile.accepts(&row) {
                debug!(id = %msg.id, user = %row.user, "row skipped by strict profile");
                stats.skipped += 1;
                continue;
            }
            sink.write_row(&row)?;
            stats.written += 1;
        }

        Ok(stats)
    }
}

/// Convenience wrapper: builds a [`Pipeline`] from `config` and runs it.
///
/// # Example
///
/// ```
/// use mudae_stats::config::PipelineConfig;
/// use mudae_stats::core::frequency::ShowFrequencies;
/// use mudae_stats::core::processor::process;
/// use mudae_stats::core::row::GachaRow;
/// use mudae_stats::export::from_str;
///
/// # fn main() -> mudae_stats::Result<()> {
/// let export = from_str(r#"{"messages": [{
///     "timestamp": "2023-01-01T06:00:00+00:00",
///     "author": {"id": "432610292342587392"},
///     "interaction": {"name": "wa", "user": {"name": "alice"}},
///     "embeds": [{"description": "Some Title / extra\nClaims: #42\nLikes: #7\n**1500**:kakera:"}]
/// }]}"#)?;
///
/// let mut rows: Vec<GachaRow> = Vec::new();
/// let mut freq = ShowFrequencies::new();
/// let stats = process(&export, &PipelineConfig::default(), &mut rows, &mut freq)?;
///
/// assert_eq!(stats.written, 1);
/// assert_eq!(rows[0].claim_rank, "42");
/// assert_eq!(rows[0].weekday, "Sunday");
/// assert_eq!(freq.count("alice", "Some Title"), 1);
/// # Ok(())
/// # }
/// ```
pub fn process<S: RowSink + ?Sized>(
    export: &Export,
    config: &PipelineConfig,
    sink: &mut S,
    frequencies: &mut ShowFrequencies,
) -> Result<ProcessingStats> {
    Pipeline::new(config)?.run(export, sink, frequencies)
}
