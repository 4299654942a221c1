//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! database-specific structures out of the command and service layers.

pub mod stat_channel;

#[cfg(test)]
mod test;
