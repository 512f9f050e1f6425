use crate::rules::birthdays::UpcomingBirthday;
use crate::time::format_date;
use serde::{Deserialize, Serialize};

/// Plain-text shape of a contact, used for snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    /// Observed date, `DD.MM.YYYY`.
    pub date: String,
}

impl From<&UpcomingBirthday> for UpcomingBirthdayDto {
    fn from(item: &UpcomingBirthday) -> Self {
        Self {
            name: item.name.clone(),
            date: format_date(item.date),
        }
    }
}
