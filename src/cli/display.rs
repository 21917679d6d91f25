use std::io::{self, Write};

use crate::database::DatabaseError;

pub enum Outcome<'a> {
    Added(String),
    Deleted(&'a str),
}

pub fn display_outcome<W: Write>(out: &mut W, outcome: &Outcome<'_>) -> io::Result<()> {
    match outcome {
        Outcome::Added(what) => writeln!(out, "Added {}", what),
        Outcome::Deleted(name) => writeln!(out, "Deleted {}", name),
    }
}

/// Report a failed command on the user-facing stream.
pub fn display_error<W: Write>(out: &mut W, error: &DatabaseError) -> io::Result<()> {
    match error {
        DatabaseError::Storage(e) => writeln!(out, "Could not save changes: {}", e),
        other => writeln!(out, "{}", other),
    }
}
