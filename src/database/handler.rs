use chrono::{Datelike, Local};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use super::error::DatabaseError;
use super::filter::{sort_movies, ListOptions, MovieFilter};
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::model::{Movie, Person, Runtime};
use crate::storage::JsonFile;

/// Owns the in-memory catalogue and the two files backing it.
pub struct DatabaseHandler {
    movies_file: JsonFile<Movie>,
    people_file: JsonFile<Person>,
    movies: Vec<Movie>,
    people: Vec<Person>,
}

impl DatabaseHandler {
    /// Load both record files. The movie file must exist and parse; a missing
    /// people registry starts out empty.
    ///
    /// People embedded in movie records are taken as written and are not
    /// reconciled with the registry.
    pub fn load(config: &Config) -> Result<Self, DatabaseError> {
        let movies_file: JsonFile<Movie> = JsonFile::new(&config.movies_path);
        let people_file: JsonFile<Person> = JsonFile::new(&config.people_path);

        let movies = movies_file.read_all()?;
        let people = people_file.read_all_or_default()?;
        info!(
            movies = movies.len(),
            people = people.len(),
            "loaded catalogue"
        );

        Ok(DatabaseHandler {
            movies_file,
            people_file,
            movies,
            people,
        })
    }

    /// Build a handler over records already in memory. Nothing is read; the
    /// files in `config` are only touched by later writes.
    pub fn with_records(config: &Config, movies: Vec<Movie>, people: Vec<Person>) -> Self {
        DatabaseHandler {
            movies_file: JsonFile::new(&config.movies_path),
            people_file: JsonFile::new(&config.people_path),
            movies,
            people,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Resolve `Name` or `Name (YYYY)` against the registry.
    pub fn find_person(&self, query: &str) -> Result<&Person, DatabaseError> {
        let mut found = self.people.iter().filter(|p| p.matches(query));
        let first = found
            .next()
            .ok_or_else(|| DatabaseError::PersonNotFound(query.to_string()))?;

        let others: Vec<&Person> = found.collect();
        if others.is_empty() {
            return Ok(first);
        }

        let candidates = std::iter::once(first)
            .chain(others)
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(DatabaseError::AmbiguousPerson {
            name: query.to_string(),
            candidates,
        })
    }

    /// Write the matching movies to `out`, one line each, and return how many
    /// were written. Nothing is written when a pattern fails to compile.
    pub fn list<W: Write>(&self, options: &ListOptions, out: &mut W) -> Result<usize, DatabaseError> {
        let filter = MovieFilter::compile(options)?;

        let mut selected: Vec<&Movie> = self.movies.iter().filter(|m| filter.matches(m)).collect();
        sort_movies(&mut selected, options.order);

        for movie in &selected {
            writeln!(out, "{}", movie)?;
            if options.verbose {
                writeln!(out, "  Starring:")?;
                for actor in &movie.actors {
                    writeln!(
                        out,
                        "    - {} at age {}",
                        actor.name,
                        actor.age_in(movie.release_year)
                    )?;
                }
            }
        }
        Ok(selected.len())
    }

    /// Ask for a name and birth year, then register the person.
    pub fn add_person<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Person, DatabaseError> {
        let name = prompter.ask_until("Name: ", non_empty("Name"))?;
        let current_year = Local::now().year();
        let birth_year = prompter.ask_until("Birth year: ", |s: &str| -> Result<i32, String> {
            let year: i32 = s.parse().map_err(|_| "Birth year must be a number".to_string())?;
            if year <= 0 {
                return Err("Birth year must be a positive year".to_string());
            }
            if year > current_year {
                return Err(format!("Birth year cannot be after {}", current_year));
            }
            Ok(year)
        })?;

        let person = Person::new(name, birth_year);
        if self.people.contains(&person) {
            warn!(person = %person, "refusing duplicate person");
            return Err(DatabaseError::DuplicatePerson(person.to_string()));
        }

        self.people.push(person.clone());
        self.people_file.append(&person)?;
        info!(person = %person, "added person");
        Ok(person)
    }

    /// Ask for every movie field, resolving director and cast against the
    /// registry, then record the movie. An empty actor line ends the cast.
    pub fn add_movie<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Movie, DatabaseError> {
        let title = prompter.ask_until("Title: ", non_empty("Title"))?;
        let director = prompter.ask_until("Director: ", |s| {
            self.find_person(s).cloned().map_err(|e| e.to_string())
        })?;

        if self
            .movies
            .iter()
            .any(|m| m.title == title && m.is_directed_by(&director))
        {
            warn!(title = %title, "refusing duplicate movie");
            return Err(DatabaseError::DuplicateMovie {
                title,
                director: director.name,
            });
        }

        let release_year = prompter.ask_until("Release year: ", |s| {
            s.parse::<i32>()
                .map_err(|_| "Release year must be a number")
        })?;
        let length = prompter.ask_until("Length (HH:MM): ", |s| s.parse::<Runtime>())?;

        let mut actors: Vec<Person> = Vec::new();
        loop {
            let name = prompter.ask("Actor (empty line to finish): ")?;
            if name.is_empty() {
                break;
            }
            match self.find_person(&name) {
                Ok(actor) if actors.contains(actor) => {
                    prompter.say(format!("{} is already in the cast", actor.name))?
                }
                Ok(actor) => actors.push(actor.clone()),
                Err(e) => prompter.say(e)?,
            }
        }

        let movie = Movie::new(title, director, release_year, length, actors);
        self.movies.push(movie.clone());
        self.movies_file.append(&movie)?;
        info!(title = %movie.title, director = %movie.director.name, "added movie");
        Ok(movie)
    }

    /// Remove a person from the registry and from every cast.
    ///
    /// Directors are never removed; the refusal names the movies they direct
    /// and leaves memory and files untouched.
    pub fn delete_person(&mut self, query: &str) -> Result<Person, DatabaseError> {
        let person = self.find_person(query)?.clone();

        let directed: Vec<&str> = self
            .movies
            .iter()
            .filter(|m| m.is_directed_by(&person))
            .map(|m| m.title.as_str())
            .collect();
        if !directed.is_empty() {
            warn!(person = %person, movies = directed.len(), "refusing to delete a director");
            return Err(DatabaseError::DirectorInUse {
                name: person.name.clone(),
                titles: directed.join(", "),
            });
        }

        let removed: usize = self
            .movies
            .iter_mut()
            .map(|m| m.remove_actor(&person))
            .sum();
        self.people.retain(|p| p != &person);

        self.people_file.rewrite(&self.people)?;
        self.movies_file.rewrite(&self.movies)?;
        info!(person = %person, cast_entries = removed, "deleted person");
        Ok(person)
    }
}

fn non_empty(field: &'static str) -> impl Fn(&str) -> Result<String, String> {
    move |s| {
        if s.is_empty() {
            Err(format!("{} cannot be empty", field))
        } else {
            Ok(s.to_string())
        }
    }
}
