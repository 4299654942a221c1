//! Test factories for creating Serenity User and Member objects.

use serenity::all::{GuildId, Member, User, UserId};

/// Creates a test Serenity User with the given id and username.
pub fn create_test_user(user_id: u64, name: &str) -> User {
    let mut user = User::default();
    user.id = UserId::new(user_id);
    user.name = name.to_string();
    user
}

/// Creates a test Serenity Member of a guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID of the member
/// - `name` - Username of the member
pub fn create_test_member(guild_id: u64, user_id: u64, name: &str) -> Member {
    let mut member = Member::default();
    member.guild_id = GuildId::new(guild_id);
    member.user = create_test_user(user_id, name);
    member
}
