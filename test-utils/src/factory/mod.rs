//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let record = factory::stat_channel::StatChannelFactory::new(&db)
//!     .guild_id("123")
//!     .kind("date")
//!     .channel_id("456")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `stat_channel` - Create statistic display channel records

pub mod helpers;
pub mod stat_channel;

pub use stat_channel::create_stat_channel;
