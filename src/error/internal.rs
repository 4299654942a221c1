use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Snowflakes are stored as strings; a value that does not parse back into
    /// a `u64` means the stored record is corrupt.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored statistic kind is not one the bot knows about.
    #[error("Unknown statistic channel kind '{0}'")]
    UnknownStatKind(String),
}
