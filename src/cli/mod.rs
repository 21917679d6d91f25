pub mod args;
pub mod display;
pub mod interface;
pub mod prompt;

pub use args::{normalize_args, Args, Command};
pub use interface::CLI;
pub use prompt::{PromptError, Prompter};
