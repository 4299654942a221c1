use serenity::async_trait;

use crate::{
    command::{Command, CommandContext},
    error::AppError,
    model::message::Report,
};

/// Lists every registered command.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["h"]
    }

    fn description(&self) -> &'static str {
        "Lists every command."
    }

    fn syntax(&self) -> &'static str {
        "help"
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        let prefix = ctx.env.prefix;
        let mut report = Report::new("Help").description(format!(
            "Commands start with `{}`. Arguments are separated by spaces.",
            prefix
        ));

        for command in ctx.env.registry.commands() {
            let mut value = command.description().to_string();
            if !command.aliases().is_empty() {
                let aliases = command
                    .aliases()
                    .iter()
                    .map(|alias| format!("`{}{}`", prefix, alias))
                    .collect::<Vec<_>>()
                    .join(", ");
                value.push_str(&format!("\n**Aliases:** {}", aliases));
            }
            if let Some(capability) = command.required_capability() {
                value.push_str(&format!("\n**Requires:** `{}`", capability.as_str()));
            }
            value.push_str(&format!("\n**Syntax:** `{}{}`", prefix, command.syntax()));

            report = report.field(format!("{}{}", prefix, command.name()), value);
        }

        ctx.send_report(&report).await;

        Ok(())
    }
}
