pub use super::stat_channel::Entity as StatChannel;
