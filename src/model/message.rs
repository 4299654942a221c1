//! Models for inbound text messages and outbound command reports.

use serenity::all::Message;

/// Text message as seen by the command dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
    pub author_id: u64,
    /// Author's display tag, used in logs and reports.
    pub author_tag: String,
    pub author_is_bot: bool,
    pub content: String,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            guild_id: message.guild_id.map(|id| id.get()),
            channel_id: message.channel_id.get(),
            message_id: message.id.get(),
            author_id: message.author.id.get(),
            author_tag: message.author.tag(),
            author_is_bot: message.author.bot,
            content: message.content.clone(),
        }
    }
}

/// Embed summarising what an interactive command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub description: String,
    /// Ordered `(name, value)` pairs.
    pub fields: Vec<(String, String)>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Adds the `Status` field every report carries.
    pub fn status(self, value: impl Into<String>) -> Self {
        self.field("Status", value)
    }

    /// Value of the `Status` field, if set.
    pub fn status_value(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == "Status")
            .map(|(_, value)| value.as_str())
    }
}
