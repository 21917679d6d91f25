pub mod error;
pub mod json_file;

pub use error::StorageError;
pub use json_file::JsonFile;
