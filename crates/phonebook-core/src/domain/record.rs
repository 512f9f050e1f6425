use crate::domain::{Birthday, Name, Phone};
use crate::dto::ContactDto;
use crate::error::CoreError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces the first phone equal to `old`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let replacement = Phone::parse(new)?;
        let idx = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| self.phone_not_found(old))?;
        self.phones[idx] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<Phone, CoreError> {
        let idx = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| self.phone_not_found(value))?;
        Ok(self.phones.remove(idx))
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<String, CoreError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(format!("Birthday {} was added for contact {}", raw, self.name))
    }

    pub fn to_dto(&self) -> ContactDto {
        ContactDto {
            name: self.name.to_string(),
            phones: self.phones.iter().map(ToString::to_string).collect(),
            birthday: self.birthday.as_ref().map(ToString::to_string),
        }
    }

    fn phone_not_found(&self, phone: &str) -> CoreError {
        CoreError::PhoneNotFound {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl TryFrom<ContactDto> for ContactRecord {
    type Error = CoreError;

    fn try_from(dto: ContactDto) -> Result<Self, Self::Error> {
        let mut record = ContactRecord::new(&dto.name)?;
        for phone in &dto.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = dto.birthday.as_deref() {
            record.birthday = Some(Birthday::parse(birthday)?);
        }
        Ok(record)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
