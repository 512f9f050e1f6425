use crate::error::CommandError;
use phonebook_core::rules::validate_window_days;

/// Splits a line into a lower-cased command token and its arguments.
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

pub fn parse_window_days(raw: &str) -> Result<i64, CommandError> {
    let days: i64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidDays(raw.to_string()))?;
    Ok(validate_window_days(days)?)
}
