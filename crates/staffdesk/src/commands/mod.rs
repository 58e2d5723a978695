//! Command dispatch: bridges CLI args -> store actions -> output formatting.

pub mod config_cmd;
pub mod dashboard;
pub mod departments;
pub mod routes;
pub mod staff;
pub mod util;

use staffdesk_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Departments(args) => departments::handle(console, args, global).await,
        Command::Staff(args) => staff::handle(console, args, global).await,
        Command::Dashboard => dashboard::handle(console, global).await,
        // Handled before a console is built
        Command::Routes(_) | Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
