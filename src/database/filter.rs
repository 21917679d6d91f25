use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;

use super::error::DatabaseError;
use crate::model::Movie;

/// Runtime ordering for listings. Ties are always broken by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub verbose: bool,
    pub title: Option<String>,
    pub director: Option<String>,
    pub actor: Option<String>,
    pub order: Option<SortOrder>,
}

/// Compiled title/director/actor patterns. An absent pattern accepts everything.
#[derive(Debug, Default)]
pub struct MovieFilter {
    title: Option<Regex>,
    director: Option<Regex>,
    actor: Option<Regex>,
}

impl MovieFilter {
    pub fn compile(options: &ListOptions) -> Result<Self, DatabaseError> {
        Ok(MovieFilter {
            title: compile_pattern(options.title.as_deref())?,
            director: compile_pattern(options.director.as_deref())?,
            actor: compile_pattern(options.actor.as_deref())?,
        })
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let title_ok = self.title.as_ref().map_or(true, |re| re.is_match(&movie.title));
        let director_ok = self
            .director
            .as_ref()
            .map_or(true, |re| re.is_match(&movie.director.name));
        let actor_ok = self
            .actor
            .as_ref()
            .map_or(true, |re| movie.actors.iter().any(|a| re.is_match(&a.name)));

        title_ok && director_ok && actor_ok
    }
}

fn compile_pattern(pattern: Option<&str>) -> Result<Option<Regex>, DatabaseError> {
    pattern
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(DatabaseError::InvalidPattern)
        })
        .transpose()
}

/// Sort by title, or by runtime then title when an order is given.
pub fn sort_movies(movies: &mut [&Movie], order: Option<SortOrder>) {
    match order {
        None => movies.sort_by(|a, b| a.title.cmp(&b.title)),
        Some(SortOrder::Ascending) => movies.sort_by(|a, b| {
            (a.length, &a.title).cmp(&(b.length, &b.title))
        }),
        Some(SortOrder::Descending) => movies.sort_by(|a, b| {
            (Reverse(a.length), &a.title).cmp(&(Reverse(b.length), &b.title))
        }),
    }
}
