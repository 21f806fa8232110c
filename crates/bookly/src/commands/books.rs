//! Book command handlers.
//!
//! Every handler refreshes or mutates through the `Bookshelf` facade and
//! renders the reconciled result. Handlers run one operation at a time,
//! so the facade's busy/loading flags are always idle between calls.

use bookly_core::{Bookshelf, FormState};

use crate::cli::{DeleteArgs, EditArgs, FieldArgs, GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

use super::util;

/// Copy the provided field flags onto the form draft. Unset flags leave
/// the draft's current values (defaults in create mode, the entity's
/// fields in edit mode) untouched.
fn apply_fields(form: &mut FormState, fields: FieldArgs) {
    if let Some(title) = fields.title {
        form.draft.title = title;
    }
    if let Some(author) = fields.author {
        form.draft.author = author;
    }
    if let Some(publisher) = fields.publisher {
        form.draft.publisher = publisher;
    }
    if let Some(date) = fields.published_date {
        form.draft.published_date = date;
    }
    if let Some(pages) = fields.page_count {
        form.draft.page_count = pages;
    }
    if let Some(language) = fields.language {
        form.draft.language = language;
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(
    shelf: &mut Bookshelf,
    args: ListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    shelf.refresh().await?;

    let query = args.query.unwrap_or_default();
    let view = shelf.filtered(&query);
    output::print_output(&output::render_books(&global.output, &view), global.quiet);
    Ok(())
}

pub async fn create(
    shelf: &mut Bookshelf,
    args: FieldArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut form = shelf.form();
    apply_fields(&mut form, args);

    let created = shelf.submit(&mut form).await?;

    if !global.quiet {
        eprintln!("Book created");
    }
    output::print_output(&output::render_book(&global.output, &created), global.quiet);
    Ok(())
}

pub async fn edit(
    shelf: &mut Bookshelf,
    args: EditArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Refresh first so uid resolution sees server truth.
    shelf.refresh().await?;
    let uid = util::resolve_uid(shelf, &args.uid)?;
    let book = shelf
        .book(&uid)
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            identifier: args.uid.clone(),
        })?;

    let mut form = shelf.form();
    form.start_edit(&book);
    apply_fields(&mut form, args.fields);

    let updated = shelf.submit(&mut form).await?;

    if !global.quiet {
        eprintln!("Book updated");
    }
    output::print_output(&output::render_book(&global.output, &updated), global.quiet);
    Ok(())
}

pub async fn delete(
    shelf: &mut Bookshelf,
    args: DeleteArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    shelf.refresh().await?;
    let uid = util::resolve_uid(shelf, &args.uid)?;
    let title = shelf
        .book(&uid)
        .map_or_else(|| uid.to_string(), |b| b.title.clone());

    if !util::confirm(&format!("Delete '{title}'?"), global.yes)? {
        return Ok(());
    }

    shelf.delete(&uid).await?;

    if !global.quiet {
        eprintln!("Book deleted");
    }
    Ok(())
}
