//! Guildkeeper Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildkeeper
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for persisted test records, and factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **serenity**: Builds Serenity structs from Discord-shaped JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::StatChannel;
//!
//! #[tokio::test]
//! async fn test_stat_channel_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(StatChannel)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
