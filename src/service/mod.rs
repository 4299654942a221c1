//! Reactions to platform events that are not text commands.

pub mod channel_role;
pub mod count_trigger;
pub mod voice_role;

#[cfg(test)]
mod test;
