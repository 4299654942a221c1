//! Domain models used throughout the service and command layers.
//!
//! Serenity payloads and SeaORM entities are converted into these types at the
//! boundary, so the reconciliation logic only ever sees plain ids and names.

pub mod discord;
pub mod message;
pub mod stat_channel;
