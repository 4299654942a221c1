//! Discord guild domain models.
//!
//! Roles and channels are associated purely by exact, case-sensitive name
//! equality within one guild. Nothing here is persisted; every value is built
//! from the live state returned by Discord.

use serenity::all::{ChannelType, GuildChannel, Role, VoiceState};

/// Role within a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Role display name, matched against channel names.
    pub name: String,
}

impl From<&Role> for DiscordRole {
    fn from(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            guild_id: role.guild_id.get(),
            name: role.name.clone(),
        }
    }
}

/// Channel categories the bot distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    /// Categories, threads, stages, forums and anything newer.
    Other,
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text => ChannelKind::Text,
            ChannelType::Voice => ChannelKind::Voice,
            _ => ChannelKind::Other,
        }
    }
}

/// Channel within a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordChannel {
    /// Discord channel ID as a u64.
    pub channel_id: u64,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Channel display name.
    pub name: String,
    pub kind: ChannelKind,
}

impl DiscordChannel {
    pub fn is_voice(&self) -> bool {
        self.kind == ChannelKind::Voice
    }

    /// Whether the channel counts towards the guild's channel statistic.
    pub fn is_countable(&self) -> bool {
        matches!(self.kind, ChannelKind::Text | ChannelKind::Voice)
    }
}

impl From<&GuildChannel> for DiscordChannel {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            name: channel.name.clone(),
            kind: channel.kind.into(),
        }
    }
}

/// A member's movement between voice channels of one guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceTransition {
    pub guild_id: u64,
    pub user_id: u64,
    /// Channel the member was connected to before the event, if any.
    pub old_channel_id: Option<u64>,
    /// Channel the member is connected to after the event, if any.
    pub new_channel_id: Option<u64>,
}

impl VoiceTransition {
    /// Builds a transition from the cached previous state and the new state.
    ///
    /// Returns `None` when the event does not belong to a guild.
    pub fn from_states(old: Option<&VoiceState>, new: &VoiceState) -> Option<Self> {
        let guild_id = new.guild_id.or_else(|| old.and_then(|o| o.guild_id))?;

        Some(Self {
            guild_id: guild_id.get(),
            user_id: new.user_id.get(),
            old_channel_id: old.and_then(|o| o.channel_id).map(|id| id.get()),
            new_channel_id: new.channel_id.map(|id| id.get()),
        })
    }

    /// True when the member stayed in the same channel (mute, deafen, stream changes).
    pub fn is_unchanged(&self) -> bool {
        self.old_channel_id == self.new_channel_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_channel, create_test_role, create_test_voice_state};

    #[test]
    fn converts_voice_channel() {
        let channel = create_test_channel(10, 1, "Lounge", ChannelType::Voice);

        let channel = DiscordChannel::from(&channel);

        assert_eq!(channel.channel_id, 10);
        assert_eq!(channel.guild_id, 1);
        assert_eq!(channel.name, "Lounge");
        assert!(channel.is_voice());
        assert!(channel.is_countable());
    }

    #[test]
    fn category_is_neither_voice_nor_countable() {
        let channel = create_test_channel(11, 1, "Archive", ChannelType::Category);

        let channel = DiscordChannel::from(&channel);

        assert_eq!(channel.kind, ChannelKind::Other);
        assert!(!channel.is_voice());
        assert!(!channel.is_countable());
    }

    #[test]
    fn converts_role() {
        let role = create_test_role(20, 1, "Lounge", 3);

        let role = DiscordRole::from(&role);

        assert_eq!(role.role_id, 20);
        assert_eq!(role.name, "Lounge");
    }

    #[test]
    fn transition_between_channels() {
        let old = create_test_voice_state(1, 42, Some(10));
        let new = create_test_voice_state(1, 42, Some(11));

        let transition = VoiceTransition::from_states(Some(&old), &new).unwrap();

        assert_eq!(transition.guild_id, 1);
        assert_eq!(transition.user_id, 42);
        assert_eq!(transition.old_channel_id, Some(10));
        assert_eq!(transition.new_channel_id, Some(11));
        assert!(!transition.is_unchanged());
    }

    #[test]
    fn transition_without_cached_old_state_is_a_join() {
        let new = create_test_voice_state(1, 42, Some(10));

        let transition = VoiceTransition::from_states(None, &new).unwrap();

        assert_eq!(transition.old_channel_id, None);
        assert_eq!(transition.new_channel_id, Some(10));
    }

    #[test]
    fn mute_toggle_is_unchanged() {
        let old = create_test_voice_state(1, 42, Some(10));
        let new = create_test_voice_state(1, 42, Some(10));

        let transition = VoiceTransition::from_states(Some(&old), &new).unwrap();

        assert!(transition.is_unchanged());
    }
}
