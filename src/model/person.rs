use serde::{Deserialize, Serialize};
use std::fmt;

/// An actor or director.
///
/// Equality and hashing cover both the name and the birth year, so two
/// people sharing a name stay distinct as long as they were born in
/// different years.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birth_year: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            name: name.into(),
            birth_year,
        }
    }

    /// Age reached during `year`. Negative when the year predates the birth.
    pub fn age_in(&self, year: i32) -> i64 {
        i64::from(year) - i64::from(self.birth_year)
    }

    /// Whether `query` names this person, either as `Name` or `Name (YYYY)`.
    pub fn matches(&self, query: &str) -> bool {
        match split_birth_year(query) {
            Some((name, year)) => self.name == name && self.birth_year == year,
            None => self.name == query,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.birth_year)
    }
}

fn split_birth_year(query: &str) -> Option<(&str, i32)> {
    let open = query.strip_suffix(')')?.rfind(" (")?;
    let name = &query[..open];
    let year = query[open + 2..query.len() - 1].parse().ok()?;
    Some((name, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_in_release_year() {
        let leo = Person::new("Leonardo DiCaprio", 1974);
        assert_eq!(leo.age_in(2010), 36);
        assert_eq!(leo.age_in(1970), -4);
    }

    #[test]
    fn test_age_in_extreme_years() {
        let p = Person::new("Old", i32::MIN);
        assert_eq!(p.age_in(i32::MAX), i64::from(i32::MAX) - i64::from(i32::MIN));
    }

    #[test]
    fn test_identity_includes_birth_year() {
        let a = Person::new("Michael Douglas", 1944);
        let b = Person::new("Michael Douglas", 1951);
        assert_ne!(a, b);
        assert_eq!(a, Person::new("Michael Douglas", 1944));
    }

    #[test]
    fn test_matches_plain_and_qualified_names() {
        let p = Person::new("Michael Douglas", 1944);
        assert!(p.matches("Michael Douglas"));
        assert!(p.matches("Michael Douglas (1944)"));
        assert!(!p.matches("Michael Douglas (1951)"));
        assert!(!p.matches("michael douglas"));
    }

    #[test]
    fn test_parenthesised_name_without_year() {
        let p = Person::new("Prince (Artist)", 1958);
        assert!(p.matches("Prince (Artist)"));
        assert!(p.matches("Prince (Artist) (1958)"));
    }

    #[test]
    fn test_json_shape() {
        let p: Person = serde_json::from_str(r#"{"name":"Christopher Nolan","birth_year":1970}"#).unwrap();
        assert_eq!(p, Person::new("Christopher Nolan", 1970));
    }
}
