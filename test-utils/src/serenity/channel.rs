//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

/// Creates a test Serenity GuildChannel of the given type.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `kind` - Channel type (text, voice, category, ...)
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::ChannelType;
/// use test_utils::serenity::channel::create_test_channel;
///
/// let channel = create_test_channel(10, 1, "Lounge", ChannelType::Voice);
/// assert_eq!(channel.name, "Lounge");
/// ```
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: ChannelType,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": u8::from(kind),
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
