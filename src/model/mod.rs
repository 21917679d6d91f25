mod movie;
mod person;
mod runtime;

pub use movie::Movie;
pub use person::Person;
pub use runtime::{Runtime, RuntimeParseError};
