use std::path::PathBuf;

pub const DEFAULT_MOVIES_FILE: &str = "movies.json";
pub const DEFAULT_PEOPLE_FILE: &str = "actors.json";

/// Where the record files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub movies_path: PathBuf,
    pub people_path: PathBuf,
}

impl Config {
    pub fn new(movies_path: impl Into<PathBuf>, people_path: impl Into<PathBuf>) -> Self {
        Config {
            movies_path: movies_path.into(),
            people_path: people_path.into(),
        }
    }
}
