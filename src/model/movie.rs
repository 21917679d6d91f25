use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Person, Runtime};

/// A catalogued movie. Two movies are the same record when they share a
/// title and a director; release year, runtime and cast are not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub director: Person,
    pub release_year: i32,
    pub length: Runtime,
    pub actors: Vec<Person>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        director: Person,
        release_year: i32,
        length: Runtime,
        actors: Vec<Person>,
    ) -> Self {
        Self {
            title: title.into(),
            director,
            release_year,
            length,
            actors,
        }
    }

    pub fn is_directed_by(&self, person: &Person) -> bool {
        &self.director == person
    }

    /// Drops every cast entry equal to `person`, returning how many were removed.
    pub fn remove_actor(&mut self, person: &Person) -> usize {
        let before = self.actors.len();
        self.actors.retain(|actor| actor != person);
        before - self.actors.len()
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.director == other.director
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.director.hash(state);
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} in {}, {}",
            self.title, self.director.name, self.release_year, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie::new(
            "Inception",
            Person::new("Christopher Nolan", 1970),
            2010,
            Runtime::from_minutes(148),
            vec![
                Person::new("Leonardo DiCaprio", 1974),
                Person::new("Joseph Gordon-Levitt", 1981),
            ],
        )
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            inception().to_string(),
            "Inception by Christopher Nolan in 2010, 02:28"
        );
    }

    #[test]
    fn test_identity_is_title_and_director() {
        let mut remake = inception();
        remake.release_year = 2030;
        remake.actors.clear();
        assert_eq!(inception(), remake);

        remake.director = Person::new("Someone Else", 1980);
        assert_ne!(inception(), remake);
    }

    #[test]
    fn test_remove_actor_keeps_order() {
        let mut movie = inception();
        movie.actors.push(Person::new("Elliot Page", 1987));
        assert_eq!(movie.remove_actor(&Person::new("Joseph Gordon-Levitt", 1981)), 1);
        let names: Vec<_> = movie.actors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Leonardo DiCaprio", "Elliot Page"]);
        assert_eq!(movie.remove_actor(&Person::new("Nobody", 1900)), 0);
    }

    #[test]
    fn test_record_layout() {
        let json = r#"{
            "title": "Pulp Fiction",
            "director": {"name": "Quentin Tarantino", "birth_year": 1963},
            "release_year": 1994,
            "length": 154,
            "actors": [{"name": "John Travolta", "birth_year": 1954}]
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.length.minutes(), 154);
        assert_eq!(movie.actors.len(), 1);
        assert_eq!(movie.director.name, "Quentin Tarantino");
    }
}
