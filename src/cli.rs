//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Profile`] - output profile as a clap value
//!
//! [`Args::pipeline_config`] turns parsed flags into a library
//! [`PipelineConfig`], so the binary holds no pipeline logic of its own.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_TIMEZONE, GACHA_COMMAND, MUDAE_ID, OutputProfile, PipelineConfig};
use crate::error::{MudaeError, Result};

/// Extract Mudae gacha rolls from a DiscordChatExporter JSON export
/// into a CSV dataset, with an optional per-user show ranking.
#[derive(Parser, Debug, Clone)]
#[command(name = "mudae-stats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    mudae-stats --export gacha.json
    mudae-stats -e gacha.json -o rolls.csv --summary --top 5
    mudae-stats -e gacha.json --profile strict --timezone Europe/Berlin")]
pub struct Args {
    /// Path to the Discord export (JSON)
    #[arg(short, long, visible_alias = "input", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Path to output file
    #[arg(short, long, default_value = "output.csv", value_name = "PATH")]
    pub output: PathBuf,

    /// Number of shows to list per user in the summary
    #[arg(short = 'n', long, default_value_t = 10, value_name = "N")]
    pub top: usize,

    /// Print each user's most rolled shows after processing
    #[arg(short, long)]
    pub summary: bool,

    /// Output columns
    #[arg(long, value_enum, default_value = "full")]
    pub profile: Profile,

    /// IANA time zone for the weekday/hour columns
    #[arg(long, default_value = DEFAULT_TIMEZONE, value_name = "ZONE")]
    pub timezone: String,

    /// Author ID of the gacha bot
    #[arg(long, default_value = MUDAE_ID, value_name = "ID")]
    pub agent_id: String,

    /// Slash command whose responses are collected
    #[arg(long, default_value = GACHA_COMMAND, value_name = "NAME")]
    pub command: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The export path, or [`MudaeError::MissingInput`] when none was given.
    pub fn export_path(&self) -> Result<&PathBuf> {
        self.export.as_ref().ok_or(MudaeError::MissingInput)
    }

    /// Library configuration equivalent to these flags.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_agent_id(self.agent_id.clone())
            .with_command(self.command.clone())
            .with_timezone(self.timezone.clone())
            .with_profile(self.profile.into())
            .with_top_n(self.top)
    }
}

/// Output profile selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Profile {
    /// user, claim_rank, likes_rank, kakera_price, show_title, wife, weekday, hour
    #[default]
    Full,

    /// user, claim_rank, kakera_price, weekday, hour (rows need claim rank and kakera)
    Strict,
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputProfile::from(*self))
    }
}

// Conversion to library profile type
impl From<Profile> for OutputProfile {
    fn from(profile: Profile) -> OutputProfile {
        match profile {
            Profile::Full => OutputProfile::Full,
            Profile::Strict => OutputProfile::Strict,
        }
    }
}
