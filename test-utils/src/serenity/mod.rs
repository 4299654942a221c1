//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON shaped like
//! Discord's gateway payloads, so conversion code can be tested against the real
//! model types.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_voice_state};
//! use serenity::all::ChannelType;
//!
//! let lounge = create_test_channel(10, 1, "Lounge", ChannelType::Voice);
//! let state = create_test_voice_state(1, 42, Some(10));
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `member::create_test_user` - Create Serenity User objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod channel;
pub mod member;
pub mod role;
pub mod voice_state;

pub use channel::create_test_channel;
pub use member::{create_test_member, create_test_user};
pub use role::create_test_role;
pub use voice_state::create_test_voice_state;
