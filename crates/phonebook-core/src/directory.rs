use crate::domain::ContactRecord;
use crate::error::CoreError;
use crate::rules::birthdays::{upcoming_birthday, UpcomingBirthday};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// What to do when a record is added under a name that is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Replace,
    Reject,
}

/// All contacts, keyed by name. Iteration is ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: BTreeMap<String, ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the record's name, replacing any existing contact.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        self.add_or_replace(record)
    }

    pub fn add_or_replace(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        self.records.insert(record.name().to_string(), record)
    }

    pub fn add_or_fail(&mut self, record: ContactRecord) -> Result<(), CoreError> {
        let key = record.name().to_string();
        if self.records.contains_key(&key) {
            return Err(CoreError::DuplicateContact(key));
        }
        self.records.insert(key, record);
        Ok(())
    }

    pub fn insert_with(
        &mut self,
        record: ContactRecord,
        policy: DuplicatePolicy,
    ) -> Result<(), CoreError> {
        match policy {
            DuplicatePolicy::Replace => {
                self.add_or_replace(record);
                Ok(())
            }
            DuplicatePolicy::Reject => self.add_or_fail(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut ContactRecord, CoreError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<ContactRecord, CoreError> {
        self.records
            .remove(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn all(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `within_days` of `today`,
    /// in directory order, with weekend dates moved to Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<UpcomingBirthday> {
        self.all()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = upcoming_birthday(birthday.date(), today, within_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }
}

impl fmt::Display for ContactDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Address book is empty");
        }
        let lines: Vec<String> = self.all().map(ToString::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}
