use crate::error::CoreError;
use crate::time::parse_date;
use chrono::NaiveDate;
use std::fmt;

/// A birthday as entered by the user.
///
/// The original `DD.MM.YYYY` text is kept for display; the parsed date is
/// what the birthday window works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let date = parse_date(raw).map_err(|reason| CoreError::InvalidBirthday {
            value: raw.to_string(),
            reason,
        })?;
        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::error::CoreError;
    use crate::time::TimeParseError;
    use chrono::NaiveDate;

    #[test]
    fn birthday_keeps_original_text() {
        let birthday = Birthday::parse("05.11.1987").unwrap();
        assert_eq!(birthday.to_string(), "05.11.1987");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1987, 11, 5).unwrap()
        );
    }

    #[test]
    fn birthday_reports_reason() {
        let err = Birthday::parse("31.04.2001").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidBirthday {
                value: "31.04.2001".to_string(),
                reason: TimeParseError::InvalidDate,
            }
        );
        assert!(err.to_string().starts_with("Invalid date format. Use DD.MM.YYYY"));
    }
}
