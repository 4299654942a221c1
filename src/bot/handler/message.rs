use serenity::all::Message;

use crate::{
    command::{
        dispatch::{dispatch, DispatchOutcome},
        CommandEnv,
    },
    model::message::IncomingMessage,
};

/// Handle message creation in a channel
pub async fn handle_message(env: CommandEnv<'_>, message: Message) {
    let incoming = IncomingMessage::from(&message);

    if let DispatchOutcome::UnknownCommand(name) = dispatch(env, incoming).await {
        tracing::debug!(
            "Ignoring unknown command `{}` in channel {}",
            name,
            message.channel_id
        );
    }
}
