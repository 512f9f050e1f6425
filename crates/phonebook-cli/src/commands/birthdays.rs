use crate::commands::{expect_args, Command, Context};
use crate::error::CommandError;
use crate::util::parse_window_days;
use phonebook_core::{ContactDirectory, CoreError};

pub fn add_birthday(args: &[&str], book: &mut ContactDirectory) -> Result<String, CommandError> {
    let [name, birthday] = expect_args::<2>(Command::AddBirthday, args)?;
    Ok(book.get_mut(name)?.add_birthday(birthday)?)
}

pub fn show_birthday(args: &[&str], book: &ContactDirectory) -> Result<String, CommandError> {
    let [name] = expect_args::<1>(Command::ShowBirthday, args)?;
    let record = book
        .find(name)
        .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))?;
    Ok(match record.birthday() {
        Some(birthday) => format!("{}: {}", name, birthday),
        None => format!("{} has no birthday set", name),
    })
}

pub fn upcoming(
    ctx: &Context<'_>,
    args: &[&str],
    book: &ContactDirectory,
) -> Result<String, CommandError> {
    let days = match args {
        [] => ctx.config.birthday_window_days,
        [raw] => parse_window_days(raw)?,
        _ => {
            return Err(CommandError::TooManyArguments {
                usage: Command::Birthdays.usage(),
            })
        }
    };

    let upcoming = book.upcoming_birthdays(ctx.today(), days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
