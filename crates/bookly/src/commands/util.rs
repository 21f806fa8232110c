//! Shared helpers for command handlers.

use bookly_core::{BookId, Bookshelf};

use crate::error::CliError;

/// Resolve a uid (or an unambiguous prefix of one) against the cache.
///
/// The cache must have been refreshed first — resolution never issues
/// its own request.
pub fn resolve_uid(shelf: &Bookshelf, identifier: &str) -> Result<BookId, CliError> {
    let books = shelf.books();

    if let Some(book) = books.iter().find(|b| b.uid.as_str() == identifier) {
        return Ok(book.uid.clone());
    }

    let mut matches = books.iter().filter(|b| b.uid.as_str().starts_with(identifier));
    match (matches.next(), matches.next()) {
        (Some(book), None) => Ok(book.uid.clone()),
        (Some(_), Some(_)) => Err(CliError::Ambiguous {
            identifier: identifier.into(),
        }),
        (None, _) => Err(CliError::NotFound {
            identifier: identifier.into(),
        }),
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
