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

/// Parses an optional stored snowflake.
///
/// # Returns
/// - `Ok(None)` - No value stored
/// - `Ok(Some(u64))` - Stored value parsed successfully
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored value is not a valid u64
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Parses a channel reference typed by a user.
///
/// Accepts either a channel mention (`<#123>`) or a bare channel id (`123`).
///
/// # Returns
/// - `Some(u64)` - Channel id
/// - `None` - Input is neither a mention nor an id
pub fn parse_channel_reference(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    let id = trimmed
        .strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(trimmed);

    id.parse::<u64>().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_string_id() {
        assert_eq!(parse_u64_from_string("123456789".to_string()).unwrap(), 123456789);
    }

    #[test]
    fn rejects_invalid_string_id() {
        let result = parse_u64_from_string("not-a-number".to_string());

        assert!(matches!(result, Err(AppError::InternalErr(_))));
    }

    #[test]
    fn parses_optional_values() {
        assert_eq!(parse_optional_u64(None).unwrap(), None);
        assert_eq!(parse_optional_u64(Some("42".to_string())).unwrap(), Some(42));
        assert!(parse_optional_u64(Some("x".to_string())).is_err());
    }

    #[test]
    fn parses_channel_mentions_and_ids() {
        assert_eq!(parse_channel_reference("<#123456>"), Some(123456));
        assert_eq!(parse_channel_reference("123456"), Some(123456));
        assert_eq!(parse_channel_reference(" 123456 "), Some(123456));
    }

    #[test]
    fn rejects_invalid_channel_references() {
        assert_eq!(parse_channel_reference("<@123456>"), None);
        assert_eq!(parse_channel_reference("<#abc>"), None);
        assert_eq!(parse_channel_reference("general"), None);
        assert_eq!(parse_channel_reference("0"), None);
    }
}
