//! Routes inbound text messages to commands.

use crate::{
    command::{CommandContext, CommandEnv},
    model::message::IncomingMessage,
};

/// What the dispatcher did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command: no prefix, bot author, direct message or empty remainder.
    Ignored,
    /// Prefixed, but no command answers to the name.
    UnknownCommand(String),
    /// A command ran, whatever its result.
    Executed(&'static str),
}

/// Splits `content` into a command name and its arguments.
///
/// The prefix matches ASCII case-insensitively; the rest is split on runs of
/// whitespace. Returns `None` when the prefix is missing or nothing follows it.
pub fn parse_command(content: &str, prefix: &str) -> Option<(String, Vec<String>)> {
    let head = content.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let mut tokens = content[prefix.len()..].split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();

    Some((name, args))
}

/// Runs the command a message asks for, if any.
///
/// Errors returned by the command are logged and go no further.
pub async fn dispatch(env: CommandEnv<'_>, message: IncomingMessage) -> DispatchOutcome {
    if message.author_is_bot {
        return DispatchOutcome::Ignored;
    }
    let Some(guild_id) = message.guild_id else {
        return DispatchOutcome::Ignored;
    };
    let Some((name, args)) = parse_command(&message.content, env.prefix) else {
        return DispatchOutcome::Ignored;
    };

    let Some(command) = env.registry.find(&name) else {
        tracing::debug!(
            "{} tried to run unknown command `{}` in guild {}",
            message.author_tag,
            name,
            guild_id
        );
        return DispatchOutcome::UnknownCommand(name);
    };

    tracing::info!(
        "{} ran `{}` in guild {}",
        message.author_tag,
        command.name(),
        guild_id
    );

    let ctx = CommandContext::interactive(env, guild_id, message, args);
    if let Err(e) = command.execute(&ctx).await {
        tracing::error!(
            "Command `{}` failed in guild {}: {}",
            command.name(),
            guild_id,
            e
        );
    }

    DispatchOutcome::Executed(command.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn splits_name_and_arguments() {
        let parsed = parse_command("f!removemute  <@&5>   extra", "f!");

        assert_eq!(
            parsed,
            Some(("removemute".to_string(), args(&["<@&5>", "extra"])))
        );
    }

    #[test]
    fn prefix_is_case_insensitive() {
        assert_eq!(
            parse_command("F!ud", "f!"),
            Some(("ud".to_string(), Vec::new()))
        );
    }

    #[test]
    fn command_name_keeps_its_case() {
        assert_eq!(
            parse_command("f!UD", "f!"),
            Some(("UD".to_string(), Vec::new()))
        );
    }

    #[test]
    fn ignores_messages_without_prefix() {
        assert_eq!(parse_command("hello f!help", "f!"), None);
        assert_eq!(parse_command("f", "f!"), None);
        assert_eq!(parse_command("", "f!"), None);
    }

    #[test]
    fn ignores_empty_remainder() {
        assert_eq!(parse_command("f!", "f!"), None);
        assert_eq!(parse_command("f!   ", "f!"), None);
    }

    #[test]
    fn multibyte_content_does_not_panic() {
        assert_eq!(parse_command("é!help", "f!"), None);
        assert_eq!(parse_command("📅", "f!"), None);
    }
}
