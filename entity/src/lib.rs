//! SeaORM entity definitions for the guildkeeper database.

pub mod prelude;

pub mod stat_channel;
