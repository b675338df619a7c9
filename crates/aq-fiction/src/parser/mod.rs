//! Command parsing and target resolution.

mod command;
mod resolver;

pub use command::{Command, Verb, parse_command};
pub use resolver::{matches, resolve_enemy, resolve_exit, resolve_item, resolve_npc};
