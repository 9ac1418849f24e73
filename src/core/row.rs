//! One output row per gacha response.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::extract::{ExtractionStats, FieldExtractor};
use crate::export::{Embed, Message};

/// A gacha roll flattened to text cells.
///
/// Missing values are empty strings, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GachaRow {
    /// Display name of the user who rolled.
    pub user: String,
    pub claim_rank: String,
    pub likes_rank: String,
    pub kakera_price: String,
    pub show_title: String,
    /// The rolled character (embed author name).
    pub wife: String,
    /// English weekday name in the configured zone, e.g. `Saturday`.
    pub weekday: String,
    /// Hour of day, `0`..=`23`, in the configured zone.
    pub hour: String,
}

/// Turns eligible messages into [`GachaRow`]s.
#[derive(Debug, Clone)]
pub struct RowBuilder {
    tz: Tz,
    extractor: FieldExtractor,
}

impl RowBuilder {
    /// Creates a builder that renders times in `tz`.
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            extractor: FieldExtractor::new(),
        }
    }

    /// The zone weekday and hour are computed in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Builds the row for `msg` using its first `embed`.
    pub fn build(&self, msg: &Message, embed: &Embed, stats: &mut ExtractionStats) -> GachaRow {
        let fields = self.extractor.extract_all(&embed.description, stats);
        let (weekday, hour) = msg
            .timestamp
            .map(|ts| local_weekday_hour(ts, self.tz))
            .unwrap_or_default();

        GachaRow {
            user: msg.invoker_name().to_string(),
            claim_rank: fields.claim_rank.unwrap_or_default(),
            likes_rank: fields.likes_rank.unwrap_or_default(),
            kakera_price: fields.kakera_price.unwrap_or_default(),
            show_title: fields.show_title.unwrap_or_default(),
            wife: embed.author.name.clone(),
            weekday,
            hour,
        }
    }
}

/// English weekday name and hour of `ts` on `tz`'s local clock.
///
/// DST transitions follow the IANA rules for the zone.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mudae_stats::core::row::local_weekday_hour;
///
/// let ts = Utc.with_ymd_and_hms(2023, 1, 1, 6, 0, 0).unwrap();
/// let (weekday, hour) = local_weekday_hour(ts, chrono_tz::America::Chicago);
/// assert_eq!(weekday, "Sunday");
/// assert_eq!(hour, "0");
/// ```
pub fn local_weekday_hour(ts: DateTime<Utc>, tz: Tz) -> (String, String) {
    let local = ts.with_timezone(&tz);
    (local.format("%A").to_string(), local.hour().to_string())
}
