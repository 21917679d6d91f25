pub mod error;
pub mod filter;
pub mod handler;

pub use error::DatabaseError;
pub use filter::{ListOptions, MovieFilter, SortOrder};
pub use handler::DatabaseHandler;
