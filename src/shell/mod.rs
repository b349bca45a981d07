//! Command shell
//!
//! Line-oriented front end over the registry: parsing, dispatch, and the
//! read loop.

pub mod command;
pub mod dispatcher;
pub mod session;

pub use command::{COMMANDS, Command, CommandSpec};
pub use dispatcher::{Dispatcher, Response};
pub use session::{Flow, SessionStats, Shell};
