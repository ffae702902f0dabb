//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    parse_or_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_or_default<T: FromStr + Display>(var: &str, raw: Option<&str>, default: T) -> T {
    let Some(value) = raw else {
        return default;
    };
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(
                var,
                value = %value,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_value() {
        let size: u32 = parse_or_default("VOYAGE_DB_POOL_SIZE", Some("16"), 8);
        assert_eq!(size, 16);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let size: u32 = parse_or_default("VOYAGE_DB_POOL_SIZE", Some(" 4\n"), 8);
        assert_eq!(size, 4);
    }

    #[test]
    fn falls_back_on_garbage() {
        let size: u32 = parse_or_default("VOYAGE_DB_POOL_SIZE", Some("plenty"), 8);
        assert_eq!(size, 8);
    }

    #[test]
    fn falls_back_on_empty_value() {
        let size: u32 = parse_or_default("VOYAGE_DB_POOL_SIZE", Some(""), 8);
        assert_eq!(size, 8);
    }

    #[test]
    fn missing_var_uses_default() {
        let size: u32 = env_parse_with_default("VOYAGE_TEST_UNSET_VAR_31337", 8);
        assert_eq!(size, 8);
    }
}
