//! Data model of a DiscordChatExporter JSON export.
//!
//! Every struct is `#[serde(default)]` and ignores unknown fields, so partial
//! or older exports still decode. Fields that are not consistently typed in
//! the wild go through the [`lenient`](super::lenient) decoders.
//!
//! Only a handful of fields feed the gacha pipeline (message author,
//! interaction, timestamp and the first embed); the rest are modelled so the
//! export round-trips through the type without losing structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Root of an export: one channel's archived history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Export {
    #[serde(deserialize_with = "lenient::or_default")]
    pub guild: Guild,
    #[serde(deserialize_with = "lenient::or_default")]
    pub channel: Channel,
    #[serde(deserialize_with = "lenient::or_default")]
    pub date_range: DateRange,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub exported_at: Option<DateTime<Utc>>,
    /// Message list in export order. Output rows follow this order.
    /// Anything but an array or `null` here is a decode error.
    #[serde(deserialize_with = "lenient::nullable")]
    pub messages: Vec<Message>,
    #[serde(deserialize_with = "lenient::unsigned")]
    pub message_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Guild {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Channel {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub topic: String,
}

/// Bounds the exporter was asked for. Both are `null` for a full export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateRange {
    #[serde(deserialize_with = "lenient::timestamp")]
    pub after: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub before: Option<DateTime<Utc>>,
}

/// One chat event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    /// When the message was sent. `None` if missing or unparseable.
    #[serde(deserialize_with = "lenient::timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub timestamp_edited: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub call_ended_timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_pinned: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub author: User,
    #[serde(deserialize_with = "lenient::or_default")]
    pub attachments: Vec<Attachment>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub embeds: Vec<Embed>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub stickers: Vec<Sticker>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub reactions: Vec<Reaction>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub mentions: Vec<User>,
    /// Present when the message answers a slash command.
    #[serde(deserialize_with = "lenient::optional")]
    pub interaction: Option<Interaction>,
}

impl Message {
    /// The first embed, the only one the gacha pipeline reads.
    pub fn first_embed(&self) -> Option<&Embed> {
        self.embeds.first()
    }

    /// Name of the slash command this message answers, if any.
    pub fn interaction_name(&self) -> Option<&str> {
        self.interaction.as_ref().map(|i| i.name.as_str())
    }

    /// Display name of the user who invoked the command.
    ///
    /// Empty when the message is not an interaction response.
    pub fn invoker_name(&self) -> &str {
        self.interaction
            .as_ref()
            .map(|i| i.user.name.as_str())
            .unwrap_or_default()
    }
}

/// A Discord account: message author, mention or interaction invoker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub discriminator: String,
    #[serde(deserialize_with = "lenient::string")]
    pub nickname: String,
    #[serde(deserialize_with = "lenient::string")]
    pub color: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_bot: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub roles: Vec<Role>,
    #[serde(deserialize_with = "lenient::string")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub color: String,
    #[serde(deserialize_with = "lenient::signed")]
    pub position: i64,
}

/// Rich content block. Mudae puts the roll result in here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Embed {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Free text carrying show title, ranks and kakera value.
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub color: String,
    /// `author.name` holds the rolled character.
    #[serde(deserialize_with = "lenient::or_default")]
    pub author: EmbedAuthor,
    #[serde(deserialize_with = "lenient::or_default")]
    pub thumbnail: EmbedImage,
    #[serde(deserialize_with = "lenient::or_default")]
    pub image: EmbedImage,
    #[serde(deserialize_with = "lenient::or_default")]
    pub images: Vec<EmbedImage>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub fields: Vec<EmbedField>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedAuthor {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedImage {
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::unsigned")]
    pub width: u64,
    #[serde(deserialize_with = "lenient::unsigned")]
    pub height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedField {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub value: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedFooter {
    #[serde(deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(deserialize_with = "lenient::string")]
    pub icon_url: String,
}

/// Slash command metadata attached to a bot response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interaction {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    /// Command name without the leading slash, e.g. `wa`.
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reaction {
    #[serde(deserialize_with = "lenient::or_default")]
    pub emoji: Emoji,
    #[serde(deserialize_with = "lenient::unsigned")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Emoji {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_animated: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub file_name: String,
    #[serde(deserialize_with = "lenient::unsigned")]
    pub file_size_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sticker {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub format: String,
    #[serde(deserialize_with = "lenient::string")]
    pub source_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserialize_gacha_response() {
        let json = r##"{
            "id": "1060000000000000001",
            "type": "Default",
            "timestamp": "2023-01-01T06:00:00+00:00",
            "timestampEdited": null,
            "isPinned": false,
            "content": "",
            "author": {"id": "432610292342587392", "name": "Mudae", "isBot": true},
            "embeds": [{
                "title": "",
                "description": "Naruto\nClaims: #12\nLikes: #30\n**512**:kakera:",
                "color": "#FF9C2C",
                "author": {"name": "Hinata Hyuga"}
            }],
            "interaction": {"id": "1", "name": "wa", "user": {"id": "99", "name": "alice"}}
        }"##;

        let msg: Message = serde_json::from_str(json).expect("deserialize");
        assert_eq!(msg.author.id, "432610292342587392");
        assert!(msg.author.is_bot);
        assert_eq!(msg.interaction_name(), Some("wa"));
        assert_eq!(msg.invoker_name(), "alice");
        assert_eq!(msg.first_embed().unwrap().author.name, "Hinata Hyuga");
        assert!(msg.timestamp_edited.is_none());
    }

    #[test]
    fn test_message_without_interaction() {
        let msg: Message = serde_json::from_str(r#"{"content": "hello"}"#).expect("deserialize");
        assert!(msg.interaction.is_none());
        assert_eq!(msg.interaction_name(), None);
        assert_eq!(msg.invoker_name(), "");
        assert!(msg.first_embed().is_none());
        assert!(msg.timestamp.is_none());
    }

    #[test]
    fn test_export_nullable_sections() {
        let json = r#"{
            "guild": null,
            "channel": {"id": "1", "name": "gacha", "topic": null},
            "dateRange": {"after": null, "before": null},
            "exportedAt": "2023-02-01T00:00:00.1234567+00:00",
            "messages": null
        }"#;

        let export: Export = serde_json::from_str(json).expect("deserialize");
        assert_eq!(export.guild, Guild::default());
        assert_eq!(export.channel.topic, "");
        assert!(export.date_range.after.is_none());
        assert!(export.exported_at.is_some());
        assert!(export.messages.is_empty());
    }

    #[test]
    fn test_role_and_reaction_fields() {
        let json = r#"{
            "author": {"name": "bob", "roles": [{"id": "5", "name": "mod", "color": null, "position": 3}]},
            "reactions": [{"emoji": {"name": "💖", "code": "sparkling_heart"}, "count": 2}],
            "attachments": [{"fileName": "roll.png", "fileSizeBytes": "2048"}],
            "stickers": [{"name": "wave", "format": "Png"}]
        }"#;

        let msg: Message = serde_json::from_str(json).expect("deserialize");
        assert_eq!(msg.author.roles[0].position, 3);
        assert_eq!(msg.author.roles[0].color, "");
        assert_eq!(msg.reactions[0].count, 2);
        assert_eq!(msg.attachments[0].file_size_bytes, 2048);
        assert_eq!(msg.stickers[0].name, "wave");
    }
}
