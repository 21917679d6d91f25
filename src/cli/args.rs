use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_MOVIES_FILE, DEFAULT_PEOPLE_FILE};
use crate::database::{ListOptions, SortOrder};

#[derive(Debug, Parser)]
#[command(
    name = "moviedb",
    version,
    about = "Keep a small catalogue of movies and the people in them",
    long_about = None
)]
pub struct Args {
    /// Movie records file
    #[arg(long = "movies-file", env = "MOVIEDB_MOVIES", default_value = DEFAULT_MOVIES_FILE, global = true)]
    pub movies_file: PathBuf,

    /// People registry file, created on the first added person
    #[arg(long = "actors-file", env = "MOVIEDB_ACTORS", default_value = DEFAULT_PEOPLE_FILE, global = true)]
    pub actors_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List movies
    #[command(name = "l")]
    List(ListArgs),

    /// Add a person or a movie, answering prompts on stdin
    #[command(name = "a")]
    Add(AddArgs),

    /// Delete a person
    #[command(name = "d")]
    Delete(DeleteArgs),
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Show the cast with their age at release
    #[arg(short, long)]
    pub verbose: bool,

    /// Filter by title
    #[arg(short, long, value_name = "REGEX", allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Filter by director name
    #[arg(short, long, value_name = "REGEX", allow_hyphen_values = true)]
    pub director: Option<String>,

    /// Filter by cast member name
    #[arg(short, long, value_name = "REGEX", allow_hyphen_values = true)]
    pub actor: Option<String>,

    /// Order by runtime, shortest first (also `-la`)
    #[arg(long = "la", conflicts_with = "ld")]
    pub la: bool,

    /// Order by runtime, longest first (also `-ld`)
    #[arg(long = "ld")]
    pub ld: bool,
}

impl ListArgs {
    pub fn options(&self) -> ListOptions {
        let order = if self.la {
            Some(SortOrder::Ascending)
        } else if self.ld {
            Some(SortOrder::Descending)
        } else {
            None
        };

        ListOptions {
            verbose: self.verbose,
            title: self.title.clone(),
            director: self.director.clone(),
            actor: self.actor.clone(),
            order,
        }
    }
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct AddArgs {
    /// Add a person
    #[arg(short, long)]
    pub person: bool,

    /// Add a movie
    #[arg(short, long)]
    pub movie: bool,
}

#[derive(Debug, clap::Args)]
pub struct DeleteArgs {
    /// Person to delete, as `Name` or `Name (YYYY)`
    #[arg(short, long)]
    pub person: String,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new(&self.movies_file, &self.actors_file)
    }
}

/// Options whose next token is their value.
const VALUE_OPTIONS: &[&str] = &[
    "-t",
    "--title",
    "-d",
    "--director",
    "-a",
    "--actor",
    "-p",
    "--person",
    "--movies-file",
    "--actors-file",
];

/// Rewrite the single-dash `-la`/`-ld` spellings into long flags clap
/// understands. A token in value position is left alone.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut normalized: Vec<String> = Vec::new();
    for arg in args.into_iter().map(Into::into) {
        let is_value = normalized
            .last()
            .is_some_and(|prev| VALUE_OPTIONS.contains(&prev.as_str()));
        let arg = match arg.as_str() {
            "-la" | "-ld" if !is_value => format!("-{}", arg),
            _ => arg,
        };
        normalized.push(arg);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(normalize_args(std::iter::once("moviedb").chain(args.iter().copied())))
    }

    #[test]
    fn test_list_flags() {
        let args = parse(&["l", "-v", "-t", "Pulp", "-d", "Tarantino", "-a", "Travolta", "-ld"]).unwrap();
        let Command::List(list) = args.command else {
            panic!("expected list");
        };
        let options = list.options();
        assert!(options.verbose);
        assert_eq!(options.title.as_deref(), Some("Pulp"));
        assert_eq!(options.director.as_deref(), Some("Tarantino"));
        assert_eq!(options.actor.as_deref(), Some("Travolta"));
        assert_eq!(options.order, Some(SortOrder::Descending));
    }

    #[test]
    fn test_list_defaults_to_title_order() {
        let Command::List(list) = parse(&["l"]).unwrap().command else {
            panic!("expected list");
        };
        assert_eq!(list.options().order, None);
        assert!(!list.options().verbose);
    }

    #[test]
    fn test_sort_flags_conflict() {
        assert!(parse(&["l", "-la", "-ld"]).is_err());
        assert!(parse(&["l", "--la"]).is_ok());
    }

    #[test]
    fn test_sort_spelling_kept_as_option_value() {
        assert_eq!(
            normalize_args(["moviedb", "l", "-t", "-la", "-ld"]),
            ["moviedb", "l", "-t", "-la", "--ld"]
        );

        let Command::List(list) = parse(&["l", "--title", "-ld", "-la"]).unwrap().command else {
            panic!("expected list");
        };
        let options = list.options();
        assert_eq!(options.title.as_deref(), Some("-ld"));
        assert_eq!(options.order, Some(SortOrder::Ascending));
    }

    #[test]
    fn test_add_needs_exactly_one_kind() {
        assert!(parse(&["a"]).is_err());
        assert!(parse(&["a", "-p", "-m"]).is_err());

        let Command::Add(add) = parse(&["a", "-m"]).unwrap().command else {
            panic!("expected add");
        };
        assert!(add.movie && !add.person);
    }

    #[test]
    fn test_delete_requires_person() {
        assert!(parse(&["d"]).is_err());
        let Command::Delete(delete) = parse(&["d", "-p", "John Travolta"]).unwrap().command else {
            panic!("expected delete");
        };
        assert_eq!(delete.person, "John Travolta");
    }

    #[test]
    fn test_file_locations() {
        let args = parse(&["l", "--movies-file", "/tmp/m.json"]).unwrap();
        let config = args.config();
        assert_eq!(config.movies_path, PathBuf::from("/tmp/m.json"));
    }
}
