use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("expected DD.MM.YYYY")]
    InvalidFormat,
    #[error("not a calendar date")]
    InvalidDate,
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict `DD.MM.YYYY` date.
///
/// chrono alone accepts single-digit fields and signed years, so the shape is
/// checked byte by byte before the calendar check.
pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(TimeParseError::InvalidFormat);
    }
    let shape_ok = bytes.iter().enumerate().all(|(idx, byte)| match idx {
        2 | 5 => *byte == b'.',
        _ => byte.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(TimeParseError::InvalidFormat);
    }

    let date =
        NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| TimeParseError::InvalidDate)?;
    if date.year() < 1 {
        return Err(TimeParseError::InvalidDate);
    }
    Ok(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
