use phonebook_core::ContactRecord;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Presentation layer the session talks to.
pub trait View {
    /// Reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;
    fn show_message(&mut self, text: &str) -> io::Result<()>;
    fn show_error(&mut self, text: &str) -> io::Result<()>;
    fn show_contacts(&mut self, records: &[&ContactRecord]) -> io::Result<()>;
    fn show_commands(&mut self, help_text: &str) -> io::Result<()>;
}

pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", text)?;
        self.output.flush()?;

        // Raw bytes, so a line that is not UTF-8 still reaches the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn show_message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn show_error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "ERROR: {}", text)
    }

    fn show_contacts(&mut self, records: &[&ContactRecord]) -> io::Result<()> {
        if records.is_empty() {
            return writeln!(self.output, "Address book is empty");
        }
        for record in records {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn show_commands(&mut self, help_text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", help_text)
    }
}
