use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Extracts the role id from a role mention (`<@&123>`) or a bare id.
///
/// Returns `None` for anything else, including user and channel mentions.
pub fn parse_role_mention(value: &str) -> Option<u64> {
    let id = match value.strip_prefix("<@&") {
        Some(rest) => rest.strip_suffix('>')?,
        None => value,
    };

    id.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Extracts the channel id from a channel mention (`<#123>`) or a bare id.
pub fn parse_channel_mention(value: &str) -> Option<u64> {
    let id = match value.strip_prefix("<#") {
        Some(rest) => rest.strip_suffix('>')?,
        None => value,
    };

    id.parse::<u64>().ok().filter(|id| *id != 0)
}
