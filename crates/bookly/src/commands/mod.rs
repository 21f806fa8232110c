//! Command dispatch: bridges CLI args -> Bookshelf operations -> output.

pub mod books;
pub mod config_cmd;
pub mod util;

use bookly_core::Bookshelf;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    shelf: &mut Bookshelf,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => books::list(shelf, args, global).await,
        Command::Create(args) => books::create(shelf, args, global).await,
        Command::Edit(args) => books::edit(shelf, args, global).await,
        Command::Delete(args) => books::delete(shelf, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
