//! Output writers.
//!
//! Rows flow into a [`RowSink`]. The CSV writer is the sink used by the CLI;
//! a plain `Vec<GachaRow>` is a sink too, handy for tests and library use.
//!
//! - [`CsvRowWriter`] / [`create_csv_writer`] - streaming CSV output
//! - [`write_csv`] / [`to_csv`] - one-shot helpers
//! - [`header`] - column names per [`OutputProfile`](crate::config::OutputProfile)
//!
//! # Example
//!
//! ```rust
//! use mudae_stats::config::OutputProfile;
//! use mudae_stats::core::output::to_csv;
//! use mudae_stats::core::row::GachaRow;
//!
//! let rows = vec![GachaRow { user: "alice".into(), claim_rank: "42".into(), ..GachaRow::default() }];
//! let csv = to_csv(&rows, OutputProfile::Strict)?;
//! assert!(csv.starts_with("user,claim_rank,kakera_price,weekday,hour\n"));
//! # Ok::<(), mudae_stats::MudaeError>(())
//! ```

mod csv_writer;

pub use csv_writer::{CsvRowWriter, create_csv_writer, header, to_csv, write_csv};

use crate::core::row::GachaRow;
use crate::error::Result;

/// Destination for rows produced by the pipeline, in export order.
pub trait RowSink {
    fn write_row(&mut self, row: &GachaRow) -> Result<()>;
}

impl RowSink for Vec<GachaRow> {
    fn write_row(&mut self, row: &GachaRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }
}
