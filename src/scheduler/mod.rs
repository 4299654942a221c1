pub mod date_channel;
