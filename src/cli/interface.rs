use std::io::{self, BufRead, Write};
use tracing::debug;

use super::args::Command;
use super::display::{display_error, display_outcome, Outcome};
use super::prompt::Prompter;
use crate::database::{DatabaseHandler, ListOptions};

/// Runs one parsed command against a loaded catalogue.
///
/// Failures are written to the output stream; only a failure to write that
/// stream is returned.
pub struct CLI<R, W> {
    pub handler: DatabaseHandler,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> CLI<R, W> {
    pub fn new(handler: DatabaseHandler, input: R, output: W) -> Self {
        CLI {
            handler,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn execute(&mut self, command: &Command) -> io::Result<()> {
        debug!(?command, "executing");
        match command {
            Command::List(args) => self.list(&args.options()),
            Command::Add(args) if args.person => self.add_person(),
            Command::Add(_) => self.add_movie(),
            Command::Delete(args) => self.delete_person(&args.person),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn list(&mut self, options: &ListOptions) -> io::Result<()> {
        match self.handler.list(options, self.prompter.output()) {
            Ok(count) => {
                debug!(count, "listed movies");
                Ok(())
            }
            Err(e) => display_error(self.prompter.output(), &e),
        }
    }

    fn add_person(&mut self) -> io::Result<()> {
        match self.handler.add_person(&mut self.prompter) {
            Ok(person) => display_outcome(self.prompter.output(), &Outcome::Added(person.to_string())),
            Err(e) => display_error(self.prompter.output(), &e),
        }
    }

    fn add_movie(&mut self) -> io::Result<()> {
        match self.handler.add_movie(&mut self.prompter) {
            Ok(movie) => display_outcome(self.prompter.output(), &Outcome::Added(movie.to_string())),
            Err(e) => display_error(self.prompter.output(), &e),
        }
    }

    fn delete_person(&mut self, name: &str) -> io::Result<()> {
        match self.handler.delete_person(name) {
            Ok(person) => display_outcome(self.prompter.output(), &Outcome::Deleted(&person.name)),
            Err(e) => display_error(self.prompter.output(), &e),
        }
    }
}
