//! Command parsing and exit resolution.

mod command;
mod resolver;

pub use command::{Arity, Command, Verb, parse_command, suggest_verb};
pub use resolver::{ExitMatch, resolve_exit};
