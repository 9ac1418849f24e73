//! Loading an export from disk or memory.
//!
//! The whole document is read into memory and decoded in one step. Either a
//! fully populated [`Export`] comes back or an error does; nothing partial.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::Export;
use crate::error::{MudaeError, Result};
use crate::report::group_thousands;

/// Reads and decodes the export at `path`.
///
/// # Errors
///
/// - [`MudaeError::Input`] if the file cannot be read
/// - [`MudaeError::Decode`] if it is not an export-shaped JSON document
///
/// # Example
///
/// ```rust,no_run
/// use mudae_stats::export::load_export;
///
/// let export = load_export("gacha-channel.json")?;
/// println!("{} messages", export.messages.len());
/// # Ok::<(), mudae_stats::MudaeError>(())
/// ```
pub fn load_export(path: impl AsRef<Path>) -> Result<Export> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = fs::read(path).map_err(|e| MudaeError::input(path, e))?;
    debug!(bytes = bytes.len(), file = %name, "read export");

    info!("starting to deserialize: {name}");
    let export: Export = serde_json::from_slice(&bytes)
        .map_err(|e| MudaeError::decode(e, Some(path.to_path_buf())))?;

    info!(
        "found {} messages to comb through",
        group_thousands(export.messages.len() as u64)
    );
    Ok(export)
}

/// Decodes an export from any reader.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Export> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    serde_json::from_slice(&buf).map_err(|e| MudaeError::decode(e, None))
}

/// Decodes an export held in a string.
///
/// # Example
///
/// ```rust
/// use mudae_stats::export::from_str;
///
/// let export = from_str(r#"{"messages": []}"#)?;
/// assert!(export.messages.is_empty());
/// # Ok::<(), mudae_stats::MudaeError>(())
/// ```
pub fn from_str(json: &str) -> Result<Export> {
    serde_json::from_str(json).map_err(|e| MudaeError::decode(e, None))
}
