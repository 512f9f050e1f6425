use crate::commands::{expect_args, Command};
use crate::error::CommandError;
use phonebook_core::{ContactDirectory, ContactRecord, CoreError, Phone};

pub fn add_contact(args: &[&str], book: &mut ContactDirectory) -> Result<String, CommandError> {
    let [name, phone] = expect_args::<2>(Command::Add, args)?;
    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = ContactRecord::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }
    Ok(format!(
        "Contact name: {} added with phone number: {}.",
        name, phone
    ))
}

pub fn change_contact(args: &[&str], book: &mut ContactDirectory) -> Result<String, CommandError> {
    let [name, old_phone, new_phone] = expect_args::<3>(Command::Change, args)?;
    book.get_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok(format!(
        "Updated: {} was changed to {} for {}.",
        old_phone, new_phone, name
    ))
}

pub fn show_phone(args: &[&str], book: &ContactDirectory) -> Result<String, CommandError> {
    let [name] = expect_args::<1>(Command::Phone, args)?;
    let record = book
        .find(name)
        .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))?;
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(format!("{}: {}", name, phones.join(", ")))
}

pub fn remove_phone(args: &[&str], book: &mut ContactDirectory) -> Result<String, CommandError> {
    let [name, phone] = expect_args::<2>(Command::RemovePhone, args)?;
    let removed = book.get_mut(name)?.remove_phone(phone)?;
    Ok(format!("Phone {} removed from contact {}.", removed, name))
}

pub fn delete_contact(args: &[&str], book: &mut ContactDirectory) -> Result<String, CommandError> {
    let [name] = expect_args::<1>(Command::Delete, args)?;
    book.delete(name)?;
    Ok(format!("Contact name: {} deleted.", name))
}
