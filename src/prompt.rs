use log::debug;
use std::io::{self, BufRead, Write};

use crate::validation::is_valid_name;

pub const PROMPT: &str = "input new app's name: ";
pub const BAD_NAME: &str = "bad name, try again";

/// Asks for an app name until a valid one is entered.
pub struct NamePrompt<R, W> {
    input: R,
    output: W,
}

impl NamePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> NamePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts, reads one line and retries on an invalid name. The line
    /// ending is dropped; other whitespace is kept.
    ///
    /// Running out of input before a valid name is an `UnexpectedEof` error.
    pub fn read_name(&mut self) -> io::Result<String> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid app name was entered",
                ));
            }
            let raw = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(&line);

            if is_valid_name(raw) {
                return Ok(raw.to_string());
            }
            debug!("Rejected app name {:?}", raw);
            writeln!(self.output, "{}", BAD_NAME)?;
        }
    }
}
