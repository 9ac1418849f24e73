//! CSV output writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::RowSink;
use crate::config::OutputProfile;
use crate::core::row::GachaRow;
use crate::error::{MudaeError, Result};

const FULL_HEADER: &[&str] = &[
    "user",
    "claim_rank",
    "likes_rank",
    "kakera_price",
    "show_title",
    "wife",
    "weekday",
    "hour",
];

const STRICT_HEADER: &[&str] = &["user", "claim_rank", "kakera_price", "weekday", "hour"];

/// Column names for `profile`, in output order.
pub fn header(profile: OutputProfile) -> &'static [&'static str] {
    match profile {
        OutputProfile::Full => FULL_HEADER,
        OutputProfile::Strict => STRICT_HEADER,
    }
}

/// Cells of `row` for `profile`, matching [`header`].
fn build_record(row: &GachaRow, profile: OutputProfile) -> Vec<&str> {
    match profile {
        OutputProfile::Full => vec![
            row.user.as_str(),
            row.claim_rank.as_str(),
            row.likes_rank.as_str(),
            row.kakera_price.as_str(),
            row.show_title.as_str(),
            row.wife.as_str(),
            row.weekday.as_str(),
            row.hour.as_str(),
        ],
        OutputProfile::Strict => vec![
            row.user.as_str(),
            row.claim_rank.as_str(),
            row.kakera_price.as_str(),
            row.weekday.as_str(),
            row.hour.as_str(),
        ],
    }
}

/// Streams rows to comma-separated UTF-8 output.
///
/// The header is written on construction, so even a run with no eligible
/// messages leaves a valid file behind. Rows are written as given; the
/// strict-profile gate is applied by the pipeline, not here.
pub struct CsvRowWriter<W: Write> {
    writer: csv::Writer<W>,
    profile: OutputProfile,
    rows: usize,
}

impl<W: Write> CsvRowWriter<W> {
    /// Wraps `inner` and writes the header for `profile`.
    pub fn new(inner: W, profile: OutputProfile) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new().from_writer(inner);
        writer.write_record(header(profile))?;
        Ok(Self {
            writer,
            profile,
            rows: 0,
        })
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn profile(&self) -> OutputProfile {
        self.profile
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| MudaeError::Io(e.into_error()))
    }
}

impl<W: Write> RowSink for CsvRowWriter<W> {
    fn write_row(&mut self, row: &GachaRow) -> Result<()> {
        self.writer.write_record(build_record(row, self.profile))?;
        self.rows += 1;
        Ok(())
    }
}

/// Creates `path` and returns a buffered CSV writer for it.
///
/// # Errors
///
/// Returns [`MudaeError::Output`] if the file cannot be created.
pub fn create_csv_writer(
    path: impl AsRef<Path>,
    profile: OutputProfile,
) -> Result<CsvRowWriter<BufWriter<File>>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MudaeError::output(path, e))?;
    CsvRowWriter::new(BufWriter::new(file), profile)
}

/// Writes `rows` to a new CSV file at `path`.
pub fn write_csv(rows: &[GachaRow], path: impl AsRef<Path>, profile: OutputProfile) -> Result<()> {
    let mut writer = create_csv_writer(path, profile)?;
    for row in rows {
        writer.write_row(row)?;
    }
    writer.finish()?.flush()?;
    Ok(())
}

/// Renders `rows` as a CSV string.
pub fn to_csv(rows: &[GachaRow], profile: OutputProfile) -> Result<String> {
    let mut writer = CsvRowWriter::new(Vec::new(), profile)?;
    for row in rows {
        writer.write_row(row)?;
    }
    let bytes = writer.finish()?;
    String::from_utf8(bytes)
        .map_err(|e| MudaeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_row() -> GachaRow {
        GachaRow {
            user: "alice".into(),
            claim_rank: "42".into(),
            likes_rank: "7".into(),
            kakera_price: "1500".into(),
            show_title: "Some Title".into(),
            wife: "Rukia Kuchiki".into(),
            weekday: "Saturday".into(),
            hour: "0".into(),
        }
    }

    #[test]
    fn test_full_profile() {
        let csv = to_csv(&[sample_row()], OutputProfile::Full).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("user,claim_rank,likes_rank,kakera_price,show_title,wife,weekday,hour")
        );
        assert_eq!(
            lines.next(),
            Some("alice,42,7,1500,Some Title,Rukia Kuchiki,Saturday,0")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_strict_profile_columns() {
        let csv = to_csv(&[sample_row()], OutputProfile::Strict).unwrap();
        assert_eq!(
            csv,
            "user,claim_rank,kakera_price,weekday,hour\nalice,42,1500,Saturday,0\n"
        );
    }

    #[test]
    fn test_header_only_when_empty() {
        let csv = to_csv(&[], OutputProfile::Full).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_quoting() {
        let mut row = sample_row();
        row.show_title = "Re:Zero, Starting Life".into();
        row.wife = "Emilia \"EMT\"".into();
        let csv = to_csv(&[row], OutputProfile::Full).unwrap();
        assert!(csv.contains("\"Re:Zero, Starting Life\""));
        assert!(csv.contains("\"Emilia \"\"EMT\"\"\""));
    }

    #[test]
    fn test_write_csv_to_file() {
        let temp = NamedTempFile::new().unwrap();
        write_csv(&[sample_row(), sample_row()], temp.path(), OutputProfile::Full).unwrap();

        let content = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_create_in_missing_dir_is_output_error() {
        let result = create_csv_writer("/no/such/dir/out.csv", OutputProfile::Full);
        assert!(matches!(result, Err(ref e) if e.is_output()));
    }

    #[test]
    fn test_rows_written_counter() {
        let mut writer = CsvRowWriter::new(Vec::new(), OutputProfile::Full).unwrap();
        writer.write_row(&sample_row()).unwrap();
        assert_eq!(writer.rows_written(), 1);
        assert_eq!(writer.profile(), OutputProfile::Full);
    }
}
