//! # mudae-stats
//!
//! Turns a DiscordChatExporter JSON export of a Mudae gacha channel into a
//! tabular dataset of rolls, plus a per-user ranking of the shows they roll
//! most.
//!
//! ## Overview
//!
//! One run is a linear batch job:
//!
//! 1. **Load** the export into memory ([`export::load_export`])
//! 2. **Filter** for Mudae's answers to `/wa` that carry an embed ([`core::filter`])
//! 3. **Extract** claim rank, likes rank, kakera price and show title from the
//!    embed description ([`core::extract`])
//! 4. **Build** one row per roll, with weekday and hour in a local time zone ([`core::row`])
//! 5. **Tally** shows per user ([`core::frequency`]) and **write** CSV ([`core::output`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mudae_stats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = PipelineConfig::default();
//!     let export = load_export("gacha.json")?;
//!
//!     let mut writer = create_csv_writer("output.csv", config.profile)?;
//!     let mut frequencies = ShowFrequencies::new();
//!     let stats = process(&export, &config, &mut writer, &mut frequencies)?;
//!     writer.finish()?;
//!
//!     println!("{} rolls written", stats.written);
//!     print!("{}", render_summary(&frequencies, config.top_n));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`export`] - export schema and loader
//! - [`config`] - [`PipelineConfig`](config::PipelineConfig), [`OutputProfile`](config::OutputProfile)
//! - [`core`] - filter, extractor, row builder, frequencies, pipeline, CSV output
//! - [`report`] - console summary and count formatting
//! - [`error`] - [`MudaeError`], [`Result`]
//! - [`cli`], [`logging`] - binary support (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
#[cfg(feature = "cli")]
pub mod logging;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{MudaeError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use mudae_stats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{MudaeError, Result};

    // Configuration
    pub use crate::config::{OutputProfile, PipelineConfig};

    // Export model
    pub use crate::export::{Embed, Export, Message, from_str, load_export};

    // Pipeline
    pub use crate::core::{
        ExtractionStats, Field, FieldExtractor, GachaFilter, GachaRow, Pipeline,
        ProcessingStats, RowBuilder, RowSink, ShowFrequencies, process,
    };

    // Output
    pub use crate::core::{CsvRowWriter, create_csv_writer, to_csv, write_csv};

    // Reporting
    pub use crate::report::{group_thousands, render_summary};
}
