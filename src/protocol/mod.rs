//! Console protocol
//!
//! Line commands standing in for the editor's Mount / UnMount menus.

pub mod commands;
pub mod handlers;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::handle_command;
