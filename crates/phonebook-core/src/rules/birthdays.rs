use crate::error::CoreError;
use crate::time::format_date;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_date(self.date))
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The birthday's anniversary in `year`. Feb 29 is observed on Mar 1 when
/// `year` has no leap day.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (birthday.month(), birthday.day());
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 3, 1);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First anniversary on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        return occurrence_in_year(birthday, today.year() + 1);
    }
    Some(this_year)
}

/// Moves Saturday and Sunday to the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

/// Date to report for a birthday inside `[today, today + within_days]`.
///
/// The window test uses the unadjusted anniversary; the weekend shift is
/// applied afterwards, so a Saturday on the last day of the window is
/// reported on the Monday past it.
pub fn upcoming_birthday(
    birthday: NaiveDate,
    today: NaiveDate,
    within_days: i64,
) -> Option<NaiveDate> {
    let candidate = next_occurrence(birthday, today)?;
    let delta_days = (candidate - today).num_days();
    if !(0..=within_days).contains(&delta_days) {
        return None;
    }
    adjust_for_weekend(candidate)
}

#[cfg(test)]
mod tests {
    use super::{
        adjust_for_weekend, is_leap_year, next_occurrence, upcoming_birthday,
        validate_window_days, UpcomingBirthday,
    };
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn next_occurrence_stays_in_current_year() {
        let today = date(2024, 3, 10);
        assert_eq!(
            next_occurrence(date(1990, 3, 15), today),
            Some(date(2024, 3, 15))
        );
        assert_eq!(
            next_occurrence(date(1990, 3, 10), today),
            Some(date(2024, 3, 10))
        );
    }

    #[test]
    fn next_occurrence_rolls_to_next_year() {
        let today = date(2024, 12, 30);
        assert_eq!(
            next_occurrence(date(1990, 1, 2), today),
            Some(date(2025, 1, 2))
        );
    }

    #[test]
    fn leap_day_observed_on_march_first() {
        assert_eq!(
            next_occurrence(date(2000, 2, 29), date(2023, 2, 20)),
            Some(date(2023, 3, 1))
        );
        assert_eq!(
            next_occurrence(date(2000, 2, 29), date(2024, 2, 20)),
            Some(date(2024, 2, 29))
        );
        // Past this year's Mar 1, the next one is a real leap day.
        assert_eq!(
            next_occurrence(date(2000, 2, 29), date(2023, 3, 2)),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn weekend_moves_to_monday() {
        // 2024-03-16 is a Saturday, 2024-03-17 a Sunday.
        assert_eq!(adjust_for_weekend(date(2024, 3, 16)), Some(date(2024, 3, 18)));
        assert_eq!(adjust_for_weekend(date(2024, 3, 17)), Some(date(2024, 3, 18)));
        assert_eq!(adjust_for_weekend(date(2024, 3, 15)), Some(date(2024, 3, 15)));
    }

    #[test]
    fn window_is_inclusive() {
        // 2024-03-12 is a Tuesday.
        let today = date(2024, 3, 12);
        assert_eq!(
            upcoming_birthday(date(1990, 3, 12), today, 0),
            Some(date(2024, 3, 12))
        );
        assert_eq!(
            upcoming_birthday(date(1990, 3, 19), today, 7),
            Some(date(2024, 3, 19))
        );
        assert_eq!(upcoming_birthday(date(1990, 3, 20), today, 7), None);
        assert_eq!(upcoming_birthday(date(1990, 3, 11), today, 7), None);
    }

    #[test]
    fn window_test_happens_before_weekend_shift() {
        // Today Tuesday 2024-03-12; day 4 is Saturday 2024-03-16.
        let today = date(2024, 3, 12);
        assert_eq!(
            upcoming_birthday(date(1985, 3, 16), today, 4),
            Some(date(2024, 3, 18))
        );
    }

    #[test]
    fn sunday_on_last_window_day_is_reported_on_monday() {
        // Today Tuesday 2024-03-12; day 5 is Sunday 2024-03-17.
        let today = date(2024, 3, 12);
        assert_eq!(
            upcoming_birthday(date(1985, 3, 17), today, 5),
            Some(date(2024, 3, 18))
        );
        assert_eq!(upcoming_birthday(date(1985, 3, 17), today, 4), None);
    }

    #[test]
    fn window_crosses_year_boundary() {
        // 2025-01-02 is a Thursday.
        let today = date(2024, 12, 30);
        assert_eq!(
            upcoming_birthday(date(1990, 1, 2), today, 7),
            Some(date(2025, 1, 2))
        );
        assert_eq!(upcoming_birthday(date(1990, 1, 2), today, 2), None);
    }

    #[test]
    fn validate_window_days_bounds() {
        assert_eq!(validate_window_days(0), Ok(0));
        assert_eq!(validate_window_days(366), Ok(366));
        assert!(validate_window_days(-1).is_err());
        assert!(validate_window_days(367).is_err());
    }

    #[test]
    fn upcoming_birthday_display() {
        let item = UpcomingBirthday {
            name: "John".to_string(),
            date: date(2024, 3, 15),
        };
        assert_eq!(item.to_string(), "John: 15.03.2024");
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }
}
