pub mod birthdays;

pub use birthdays::{
    adjust_for_weekend, next_occurrence, upcoming_birthday, validate_window_days,
    UpcomingBirthday, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
