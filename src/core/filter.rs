//! Selecting gacha responses out of a channel history.
//!
//! A message is a gacha response when all of these hold:
//!
//! | Check | Field |
//! |-------|-------|
//! | Posted by the bot | `author.id == agent_id` |
//! | Answers the roll command | `interaction.name == command` |
//! | Carries a result card | at least one embed |
//!
//! Passing the filter does not guarantee a complete row: the embed text may
//! still lack a rank or price, which only leaves that cell empty.
//!
//! # Example
//!
//! ```
//! use mudae_stats::core::filter::GachaFilter;
//! use mudae_stats::export::from_str;
//!
//! # fn main() -> mudae_stats::Result<()> {
//! let export = from_str(r#"{"messages": [
//!     {"author": {"id": "432610292342587392"}, "interaction": {"name": "wa"}, "embeds": [{}]},
//!     {"author": {"id": "432610292342587392"}, "interaction": {"name": "ha"}, "embeds": [{}]},
//!     {"author": {"id": "1"}, "content": "$wa"}
//! ]}"#)?;
//!
//! let filter = GachaFilter::default();
//! assert_eq!(filter.eligible(&export.messages).count(), 1);
//! # Ok(())
//! # }
//! ```

use crate::config::{GACHA_COMMAND, MUDAE_ID, PipelineConfig};
use crate::export::{Embed, Message};

/// Predicate over messages, see the [module docs](self).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GachaFilter {
    /// Required author ID.
    pub agent_id: String,

    /// Required interaction name.
    pub command: String,
}

impl Default for GachaFilter {
    fn default() -> Self {
        Self::new(MUDAE_ID, GACHA_COMMAND)
    }
}

impl GachaFilter {
    /// Creates a filter for `agent_id` answering `command`.
    pub fn new(agent_id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            command: command.into(),
        }
    }

    /// Builds the filter described by a run configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.agent_id.clone(), config.command.clone())
    }

    /// The result card of `msg` if it is a gacha response.
    pub fn roll_embed<'m>(&self, msg: &'m Message) -> Option<&'m Embed> {
        if msg.author.id != self.agent_id || msg.interaction_name() != Some(self.command.as_str()) {
            return None;
        }
        msg.first_embed()
    }

    /// Returns `true` if `msg` is a gacha response.
    pub fn is_eligible(&self, msg: &Message) -> bool {
        self.roll_embed(msg).is_some()
    }

    /// Iterates over the eligible messages, preserving export order.
    pub fn eligible<'a>(&'a self, messages: &'a [Message]) -> impl Iterator<Item = &'a Message> {
        messages.iter().filter(move |msg| self.is_eligible(msg))
    }

    /// Iterates over eligible messages paired with their result card.
    pub fn rolls<'a>(
        &'a self,
        messages: &'a [Message],
    ) -> impl Iterator<Item = (&'a Message, &'a Embed)> {
        messages
            .iter()
            .filter_map(move |msg| self.roll_embed(msg).map(|embed| (msg, embed)))
    }
}
