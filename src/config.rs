//! Run configuration.
//!
//! [`PipelineConfig`] holds everything that decides which messages count as
//! gacha responses and how rows are rendered. It carries no CLI framework
//! types, so library users can build one directly.
//!
//! # Example
//!
//! ```rust
//! use mudae_stats::config::{OutputProfile, PipelineConfig};
//!
//! let config = PipelineConfig::new()
//!     .with_timezone("Europe/Berlin")
//!     .with_profile(OutputProfile::Strict)
//!     .with_top_n(5);
//!
//! assert!(config.resolve_timezone().is_ok());
//! ```

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::row::GachaRow;
use crate::error::{MudaeError, Result};

/// Discord user ID of the Mudae bot.
pub const MUDAE_ID: &str = "432610292342587392";

/// Slash command whose responses are gacha rolls.
pub const GACHA_COMMAND: &str = "wa";

/// Time zone used for weekday/hour columns unless overridden.
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// How many shows the per-user summary lists by default.
pub const DEFAULT_TOP_N: usize = 10;

/// Column layout of the CSV output.
///
/// | Profile | Columns | Gate |
/// |---------|---------|------|
/// | `Full` | user, claim_rank, likes_rank, kakera_price, show_title, wife, weekday, hour | every eligible message |
/// | `Strict` | user, claim_rank, kakera_price, weekday, hour | claim_rank and kakera_price both present |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputProfile {
    /// All eight columns, one row per eligible message.
    #[default]
    Full,
    /// Five columns, rows without claim rank or kakera price are dropped.
    Strict,
}

impl OutputProfile {
    /// Returns all supported profile names.
    pub fn all_names() -> &'static [&'static str] {
        &["full", "strict"]
    }

    /// Whether `row` is written under this profile.
    ///
    /// `Strict` requires both claim rank and kakera price.
    pub fn accepts(&self, row: &GachaRow) -> bool {
        match self {
            OutputProfile::Full => true,
            OutputProfile::Strict => !row.claim_rank.is_empty() && !row.kakera_price.is_empty(),
        }
    }
}

impl std::fmt::Display for OutputProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputProfile::Full => write!(f, "full"),
            OutputProfile::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for OutputProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputProfile::Full),
            "strict" => Ok(OutputProfile::Strict),
            _ => Err(format!(
                "Unknown profile: '{}'. Expected one of: {}",
                s,
                OutputProfile::all_names().join(", ")
            )),
        }
    }
}

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Author ID a message must carry (default: Mudae's).
    pub agent_id: String,

    /// Interaction name a message must answer (default: `wa`).
    pub command: String,

    /// IANA time zone for weekday/hour (default: `America/Chicago`).
    pub timezone: String,

    /// CSV layout (default: [`OutputProfile::Full`]).
    pub profile: OutputProfile,

    /// Number of shows per user in the summary (default: 10).
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            agent_id: MUDAE_ID.to_string(),
            command: GACHA_COMMAND.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            profile: OutputProfile::Full,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author ID of the bot whose responses are collected.
    #[must_use]
    pub fn with_agent_id(mut self, id: impl Into<String>) -> Self {
        self.agent_id = id.into();
        self
    }

    /// Sets the interaction name to collect.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Sets the IANA time zone. Validated by [`resolve_timezone`](Self::resolve_timezone).
    #[must_use]
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = tz.into();
        self
    }

    /// Sets the output profile.
    #[must_use]
    pub fn with_profile(mut self, profile: OutputProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets how many shows per user the summary lists.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Resolves the configured time zone against the IANA database.
    ///
    /// # Errors
    ///
    /// Returns [`MudaeError::UnknownTimeZone`] for unrecognized identifiers.
    pub fn resolve_timezone(&self) -> Result<Tz> {
        self.timezone
            .trim()
            .parse::<Tz>()
            .map_err(|_| MudaeError::unknown_time_zone(&self.timezone))
    }
}
