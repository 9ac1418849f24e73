//! DiscordChatExporter JSON exports.
//!
//! - [`models`] - the export schema ([`Export`], [`Message`], [`Embed`], ...)
//! - [`lenient`] - forgiving decoders for inconsistently typed fields
//! - [`loader`] - [`load_export`], [`from_reader`], [`from_str`]
//!
//! # Example
//!
//! ```rust
//! use mudae_stats::export::from_str;
//!
//! let export = from_str(r#"{
//!     "channel": {"name": "gacha", "topic": null},
//!     "messages": [{"id": "1", "author": {"id": "42", "name": "Mudae"}, "embeds": []}]
//! }"#)?;
//!
//! assert_eq!(export.channel.topic, "");
//! assert_eq!(export.messages[0].author.name, "Mudae");
//! # Ok::<(), mudae_stats::MudaeError>(())
//! ```

pub mod lenient;
pub mod loader;
pub mod models;

pub use loader::{from_reader, from_str, load_export};
pub use models::{
    Attachment, Channel, DateRange, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage,
    Emoji, Export, Guild, Interaction, Message, Reaction, Role, Sticker, User,
};
