//! Core processing logic for mudae-stats.
//!
//! This module contains:
//! - [`filter`] - which messages are gacha responses
//! - [`extract`] - pattern-based field extraction from embed text
//! - [`row`] - the output row and its builder
//! - [`frequency`] - per-user show tallies and rankings
//! - [`processor`] - the single-pass pipeline tying these together
//! - [`output`] - CSV writers
//!
//! # Quick Start
//!
//! ```rust
//! use mudae_stats::core::{
//!     GachaFilter, FieldExtractor, RowBuilder, ShowFrequencies,
//!     Pipeline, ProcessingStats, process, to_csv,
//! };
//! ```

pub mod extract;
pub mod filter;
pub mod frequency;
pub mod output;
pub mod processor;
pub mod row;

// Re-export main types for convenience
pub use extract::{ExtractionStats, Field, FieldExtractor, GachaFields};
pub use filter::GachaFilter;
pub use frequency::ShowFrequencies;
pub use output::{CsvRowWriter, RowSink, create_csv_writer, header, to_csv, write_csv};
pub use processor::{Pipeline, ProcessingStats, process};
pub use row::{GachaRow, RowBuilder, local_weekday_hour};
