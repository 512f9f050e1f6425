use crate::error::CommandError;
use chrono::NaiveDate;
use phonebook_config::AppConfig;
use phonebook_core::time::local_today;
use phonebook_core::ContactDirectory;
use std::cmp::Ordering;
use std::str::FromStr;

pub mod birthdays;
pub mod contacts;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    today: Option<NaiveDate>,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(config: &'a AppConfig, today: NaiveDate) -> Self {
        Self {
            config,
            today: Some(today),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::RemovePhone,
        Command::Delete,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Help,
        Command::Exit,
    ];

    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old_phone> <new_phone>",
            Command::Phone => "phone <name>",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays [days]",
            Command::Help => "help",
            Command::Exit => "exit | close",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "help" => Ok(Command::Help),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(raw.to_string())),
        }
    }
}

/// What the session should do with a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Contacts,
    Help(String),
    Exit,
}

pub fn execute(
    ctx: &Context<'_>,
    command: Command,
    args: &[&str],
    book: &mut ContactDirectory,
) -> Result<Reply, CommandError> {
    let message = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => contacts::add_contact(args, book)?,
        Command::Change => contacts::change_contact(args, book)?,
        Command::Phone => contacts::show_phone(args, book)?,
        Command::RemovePhone => contacts::remove_phone(args, book)?,
        Command::Delete => contacts::delete_contact(args, book)?,
        Command::AddBirthday => birthdays::add_birthday(args, book)?,
        Command::ShowBirthday => birthdays::show_birthday(args, book)?,
        Command::Birthdays => birthdays::upcoming(ctx, args, book)?,
        Command::All => return Ok(Reply::Contacts),
        Command::Help => return Ok(Reply::Help(help_text())),
        Command::Exit => return Ok(Reply::Exit),
    };
    Ok(Reply::Message(message))
}

pub fn help_text() -> String {
    Command::ALL
        .iter()
        .map(|command| format!("- {}", command.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Destructures exactly `N` arguments.
pub(crate) fn expect_args<'a, const N: usize>(
    command: Command,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    match args.len().cmp(&N) {
        Ordering::Less => Err(CommandError::NotEnoughArguments {
            usage: command.usage(),
        }),
        Ordering::Greater => Err(CommandError::TooManyArguments {
            usage: command.usage(),
        }),
        Ordering::Equal => <[&'a str; N]>::try_from(args).map_err(|_| {
            CommandError::NotEnoughArguments {
                usage: command.usage(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, expect_args, help_text, Command, Context, Reply};
    use crate::error::CommandError;
    use phonebook_config::AppConfig;
    use phonebook_core::ContactDirectory;
    use std::str::FromStr;

    #[test]
    fn command_tokens_parse() {
        assert_eq!(Command::from_str("add-birthday"), Ok(Command::AddBirthday));
        assert_eq!(Command::from_str("close"), Ok(Command::Exit));
        assert_eq!(
            Command::from_str("fly"),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
    }

    #[test]
    fn expect_args_checks_count() {
        assert_eq!(
            expect_args::<2>(Command::Add, &["John", "1234567890"]),
            Ok(["John", "1234567890"])
        );
        assert_eq!(
            expect_args::<2>(Command::Add, &["John"]),
            Err(CommandError::NotEnoughArguments {
                usage: "add <name> <phone>"
            })
        );
        assert_eq!(
            expect_args::<1>(Command::Phone, &["John", "extra"]),
            Err(CommandError::TooManyArguments {
                usage: "phone <name>"
            })
        );
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text();
        for command in Command::ALL {
            assert!(help.contains(command.usage()), "missing {:?}", command);
        }
        assert!(help.starts_with("- hello"));
    }

    #[test]
    fn execute_routes_non_message_replies() {
        let config = AppConfig::default();
        let ctx = Context::new(&config);
        let mut book = ContactDirectory::new();
        assert_eq!(
            execute(&ctx, Command::All, &[], &mut book),
            Ok(Reply::Contacts)
        );
        assert_eq!(execute(&ctx, Command::Exit, &[], &mut book), Ok(Reply::Exit));
        assert_eq!(
            execute(&ctx, Command::Hello, &[], &mut book),
            Ok(Reply::Message("How can I help you?".to_string()))
        );
    }
}
