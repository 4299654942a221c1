use std::collections::HashSet;

use crate::command::{
    help::HelpCommand,
    setup::SetupCommand,
    update_count::UpdateCountCommand,
    update_date::UpdateDateCommand,
    voice_mute::{MuteCommand, RemoveMuteCommand},
    Command,
};

/// Ordered, immutable set of commands built once at startup.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Builds the registry with every command the bot ships.
    pub fn load() -> Self {
        Self::with_commands(vec![
            Box::new(RemoveMuteCommand::default()),
            Box::new(MuteCommand::default()),
            Box::new(UpdateDateCommand::default()),
            Box::new(UpdateCountCommand::members()),
            Box::new(UpdateCountCommand::channels()),
            Box::new(SetupCommand),
            Box::new(HelpCommand),
        ])
    }

    /// Builds a registry from an explicit command list.
    ///
    /// Names and aliases that collide with an earlier registration are logged; the
    /// earlier command keeps answering to them.
    pub fn with_commands(commands: Vec<Box<dyn Command>>) -> Self {
        let mut seen = HashSet::new();

        for command in &commands {
            for key in std::iter::once(command.name()).chain(command.aliases().iter().copied()) {
                if !seen.insert(key) {
                    tracing::warn!(
                        "Command key `{}` of `{}` is already registered and will be shadowed",
                        key,
                        command.name()
                    );
                }
            }
        }

        Self { commands }
    }

    /// Finds the first command whose name or one of its aliases equals `key`.
    pub fn find(&self, key: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.name() == key || command.aliases().contains(&key))
            .map(|command| &**command)
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| &**command)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
