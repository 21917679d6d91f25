pub mod cli;
pub mod config;
pub mod database;
pub mod model;
pub mod storage;


pub use cli::{Args, Command, Prompter, CLI};
pub use config::Config;
pub use database::{DatabaseError, DatabaseHandler, ListOptions, SortOrder};
pub use model::{Movie, Person, Runtime};
pub use storage::{JsonFile, StorageError};
