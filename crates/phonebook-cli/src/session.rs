use crate::commands::{execute, Command, Context, Reply};
use crate::util::parse_input;
use crate::view::View;
use phonebook_core::{ContactDirectory, ContactRecord};
use std::io;
use std::str::FromStr;
use tracing::debug;

const PROMPT: &str = "Enter a command:";

/// Runs the command loop until `exit`/`close` or end of input.
///
/// Command failures are shown and the loop continues; only I/O errors on
/// the view end it early.
pub fn run<V: View>(
    view: &mut V,
    ctx: &Context<'_>,
    book: &mut ContactDirectory,
) -> io::Result<()> {
    view.show_message("Welcome to the assistant bot!")?;
    loop {
        let Some(line) = view.prompt(PROMPT)? else {
            debug!("end of input");
            view.show_message("Good bye!")?;
            return Ok(());
        };
        let Some((token, args)) = parse_input(&line) else {
            continue;
        };

        let reply = Command::from_str(&token)
            .and_then(|command| execute(ctx, command, &args, book));
        match reply {
            Ok(Reply::Message(message)) => view.show_message(&message)?,
            Ok(Reply::Contacts) => {
                let records: Vec<&ContactRecord> = book.all().collect();
                view.show_contacts(&records)?;
            }
            Ok(Reply::Help(help)) => view.show_commands(&help)?,
            Ok(Reply::Exit) => {
                view.show_message("Good bye!")?;
                return Ok(());
            }
            Err(err) => {
                debug!(command = %token, kind = ?err.kind(), "command failed");
                view.show_error(&err.to_string())?;
            }
        }
    }
}
