use crate::command::{CommandContext, CommandEnv};

/// Runs the named command in automatic mode for a guild.
///
/// Used when an event changes a statistic. A missing command is logged and
/// skipped; errors from the command are logged.
///
/// # Returns
/// - `true` - The command was found and ran
/// - `false` - No command is registered under `name`
pub async fn trigger_count_update(env: CommandEnv<'_>, guild_id: u64, name: &str) -> bool {
    let Some(command) = env.registry.find(name) else {
        tracing::warn!("Cannot refresh guild {}: `{}` is not registered", guild_id, name);
        return false;
    };

    tracing::debug!("Running `{}` automatically for guild {}", name, guild_id);

    if let Err(e) = command
        .execute(&CommandContext::automatic(env, guild_id))
        .await
    {
        tracing::error!(
            "Automatic `{}` failed for guild {}: {}",
            name,
            guild_id,
            e
        );
    }

    true
}
