use std::io;
use thiserror::Error;

use crate::cli::prompt::PromptError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Non valid regex pattern")]
    InvalidPattern(#[source] regex::Error),

    #[error("No person named '{0}'")]
    PersonNotFound(String),

    #[error("'{name}' matches several people: {candidates}. Use the form 'Name (YYYY)'")]
    AmbiguousPerson { name: String, candidates: String },

    #[error("{name} directs {titles} and cannot be deleted")]
    DirectorInUse { name: String, titles: String },

    #[error("{0} is already registered")]
    DuplicatePerson(String),

    #[error("'{title}' by {director} already exists")]
    DuplicateMovie { title: String, director: String },
}
