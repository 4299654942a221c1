//! Text commands and the machinery to run them.
//!
//! A command is a `Command` trait object registered once in the
//! [`CommandRegistry`](registry::CommandRegistry). Commands run in one of two modes:
//!
//! - **Interactive** - typed by a member, e.g. `f!removemute @Lounge`. The command
//!   checks the member's capability itself, replies to the originating channel, and
//!   reports its outcome as an embed.
//! - **Automatic** - triggered by a platform event or the scheduler. There is no
//!   originating message, no arguments, no permission check and nothing is sent.
//!
//! Commands own their failures: they log platform errors and surface them as a
//! `Failed` status instead of returning them. An `Err` returned from `execute` is
//! only logged by the caller.

pub mod dispatch;
pub mod help;
pub mod registry;
pub mod setup;
pub mod update_count;
pub mod update_date;
pub mod voice_mute;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use serenity::all::Permissions;
use serenity::async_trait;

use crate::{
    bot::gateway::GuildGateway, command::registry::CommandRegistry, error::AppError,
    model::message::{IncomingMessage, Report},
};

/// Permission a member must hold to run an interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    MuteMembers,
    ManageChannels,
    ManageGuild,
}

impl Capability {
    /// Discord permission bits granting the capability.
    pub fn permissions(&self) -> Permissions {
        match self {
            Capability::MuteMembers => Permissions::MUTE_MEMBERS,
            Capability::ManageChannels => Permissions::MANAGE_CHANNELS,
            Capability::ManageGuild => Permissions::MANAGE_GUILD,
        }
    }

    /// Name shown to members in rejection replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::MuteMembers => "MUTE_MEMBERS",
            Capability::ManageChannels => "MANAGE_CHANNELS",
            Capability::ManageGuild => "MANAGE_GUILD",
        }
    }
}

/// A text command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, matched case-sensitively after the prefix.
    fn name(&self) -> &'static str;

    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn description(&self) -> &'static str;

    /// Usage without the prefix, e.g. `removemute [voice channel role mention]`.
    fn syntax(&self) -> &'static str;

    fn required_capability(&self) -> Option<Capability> {
        None
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError>;
}

/// Handles shared by every command invocation.
#[derive(Clone, Copy)]
pub struct CommandEnv<'a> {
    pub db: &'a DatabaseConnection,
    pub gateway: &'a dyn GuildGateway,
    pub registry: &'a CommandRegistry,
    pub prefix: &'a str,
}

/// How a command was triggered.
#[derive(Debug, Clone)]
pub enum Invocation {
    Interactive {
        message: IncomingMessage,
        args: Vec<String>,
    },
    Automatic,
}

/// Per-invocation bundle handed to `Command::execute`.
pub struct CommandContext<'a> {
    pub env: CommandEnv<'a>,
    pub guild_id: u64,
    pub invocation: Invocation,
}

impl<'a> CommandContext<'a> {
    pub fn interactive(
        env: CommandEnv<'a>,
        guild_id: u64,
        message: IncomingMessage,
        args: Vec<String>,
    ) -> Self {
        Self {
            env,
            guild_id,
            invocation: Invocation::Interactive { message, args },
        }
    }

    pub fn automatic(env: CommandEnv<'a>, guild_id: u64) -> Self {
        Self {
            env,
            guild_id,
            invocation: Invocation::Automatic,
        }
    }

    pub fn gateway(&self) -> &'a dyn GuildGateway {
        self.env.gateway
    }

    pub fn db(&self) -> &'a DatabaseConnection {
        self.env.db
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self.invocation, Invocation::Automatic)
    }

    pub fn message(&self) -> Option<&IncomingMessage> {
        match &self.invocation {
            Invocation::Interactive { message, .. } => Some(message),
            Invocation::Automatic => None,
        }
    }

    /// Positional arguments; empty in automatic mode.
    pub fn args(&self) -> &[String] {
        match &self.invocation {
            Invocation::Interactive { args, .. } => args,
            Invocation::Automatic => &[],
        }
    }

    /// Who triggered the command, for logs and reports.
    pub fn invoker(&self) -> &str {
        self.message()
            .map(|message| message.author_tag.as_str())
            .unwrap_or("automatic trigger")
    }

    /// Checks that the invoking member holds the capability `command` declares.
    ///
    /// Commands without a required capability always pass.
    pub async fn authorize(&self, command: &dyn Command) -> bool {
        match command.required_capability() {
            Some(capability) => self.require(capability).await,
            None => true,
        }
    }

    /// Checks that the invoking member holds `capability`.
    ///
    /// Always passes in automatic mode. On failure the member is told which
    /// permission is missing.
    pub async fn require(&self, capability: Capability) -> bool {
        let Some(message) = self.message() else {
            return true;
        };

        let permissions = match self
            .gateway()
            .member_permissions(self.guild_id, message.author_id)
            .await
        {
            Ok(permissions) => permissions,
            Err(e) => {
                tracing::error!(
                    "Failed to resolve permissions of {} in guild {}: {}",
                    message.author_tag,
                    self.guild_id,
                    e
                );
                Permissions::empty()
            }
        };

        if permissions.contains(capability.permissions()) {
            return true;
        }

        tracing::info!(
            "{} lacks {} in guild {}, stopping execution",
            message.author_tag,
            capability.as_str(),
            self.guild_id
        );
        self.reply(&format!(
            "Sorry, you need to have the `{}` permission to use this command.",
            capability.as_str()
        ))
        .await;

        false
    }

    /// Replies to the originating message. Does nothing in automatic mode.
    pub async fn reply(&self, content: &str) {
        let Some(message) = self.message() else {
            return;
        };

        if let Err(e) = self
            .gateway()
            .reply(message.channel_id, message.message_id, content)
            .await
        {
            tracing::error!(
                "There was an error sending a message in guild {}: {}",
                self.guild_id,
                e
            );
        }
    }

    /// Sends a message to the originating channel. Does nothing in automatic mode.
    pub async fn say(&self, content: &str) {
        let Some(message) = self.message() else {
            return;
        };

        if let Err(e) = self.gateway().send_message(message.channel_id, content).await {
            tracing::error!(
                "There was an error sending a message in guild {}: {}",
                self.guild_id,
                e
            );
        }
    }

    /// Tells the member how the command is used.
    pub async fn say_syntax(&self, command: &dyn Command) {
        self.say(&format!(
            "Incorrect syntax. Correct syntax: `{}{}`",
            self.env.prefix,
            command.syntax()
        ))
        .await;
    }

    /// Posts a report embed to the originating channel. Does nothing in automatic mode.
    pub async fn send_report(&self, report: &Report) {
        let Some(message) = self.message() else {
            return;
        };

        if let Err(e) = self.gateway().send_report(message.channel_id, report).await {
            tracing::error!(
                "There was an error sending an embed in guild {}: {}",
                self.guild_id,
                e
            );
        }
    }
}
