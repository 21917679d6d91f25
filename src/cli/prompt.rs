use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before the entry was complete")]
    Closed,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of feedback.
    pub fn say(&mut self, message: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Show `label` and read one trimmed line.
    pub fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Keep asking until `parse` accepts the answer, echoing each rejection.
    pub fn ask_until<T, E, F>(&mut self, label: &str, mut parse: F) -> Result<T, PromptError>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }
}
