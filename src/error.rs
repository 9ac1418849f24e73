//! Unified error types for mudae-stats.
//!
//! Every fatal condition of a run maps onto one [`MudaeError`] variant:
//!
//! | Category | Variants |
//! |----------|----------|
//! | Input | [`MissingInput`](MudaeError::MissingInput), [`Input`](MudaeError::Input) |
//! | Decode | [`Decode`](MudaeError::Decode) |
//! | Config | [`UnknownTimeZone`](MudaeError::UnknownTimeZone) |
//! | Output | [`Output`](MudaeError::Output), [`Csv`](MudaeError::Csv) |
//!
//! Extraction misses are not errors. A description without a `Claims: #`
//! segment simply yields an empty cell.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for mudae-stats operations.
///
/// # Example
///
/// ```rust
/// use mudae_stats::error::Result;
/// use mudae_stats::export::Export;
///
/// fn load_nothing() -> Result<Export> {
///     Ok(Export::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, MudaeError>;

/// The error type for all mudae-stats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MudaeError {
    /// No export path was supplied.
    #[error("need a discord export file (pass --export <PATH>)")]
    MissingInput,

    /// The export file could not be opened or read.
    #[error("opening {}: {source}", path.display())]
    Input {
        /// Path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The export is not valid JSON or does not have the export's shape.
    ///
    /// Loading is atomic: no partially decoded export is ever returned.
    #[error("deserializing export{}: {source}", path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Decode {
        /// The file path, if the export came from disk
        path: Option<PathBuf>,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The configured time zone is not a known IANA identifier.
    #[error("unknown time zone '{name}' (expected an IANA name such as America/Chicago)")]
    UnknownTimeZone {
        /// The identifier that failed to resolve
        name: String,
    },

    /// The output file could not be created.
    #[error("couldn't create output {}: {source}", path.display())]
    Output {
        /// Path that was being created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Any other I/O error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl MudaeError {
    /// Creates an input error for `path`.
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MudaeError::Input {
            path: path.into(),
            source,
        }
    }

    /// Creates a decode error, optionally tagged with the file it came from.
    pub fn decode(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        MudaeError::Decode { path, source }
    }

    /// Creates a time zone configuration error.
    pub fn unknown_time_zone(name: impl Into<String>) -> Self {
        MudaeError::UnknownTimeZone { name: name.into() }
    }

    /// Creates an output creation error for `path`.
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MudaeError::Output {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for missing or unreadable input.
    pub fn is_input(&self) -> bool {
        matches!(self, MudaeError::MissingInput | MudaeError::Input { .. })
    }

    /// Returns `true` if the export failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, MudaeError::Decode { .. })
    }

    /// Returns `true` for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, MudaeError::UnknownTimeZone { .. })
    }

    /// Returns `true` if the output could not be created or written.
    pub fn is_output(&self) -> bool {
        matches!(self, MudaeError::Output { .. } | MudaeError::Csv(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
