// ── Form state and draft validation ──
//
// Owns the mutable draft the user edits, distinguishes create from edit
// mode, and validates field constraints before anything touches the
// network. Validation failures never reach the store or the transport.

use serde::{Deserialize, Serialize};

use bookly_api::{Book, BookCreate, BookId};

use crate::error::CoreError;

// ── Defaults ────────────────────────────────────────────────────────

/// Initial values for a fresh create-mode draft. Configuration-resolved;
/// these are the fallbacks when no profile overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_published_date")]
    pub published_date: String,
    #[serde(default = "default_page_count")]
    pub page_count: i64,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            published_date: default_published_date(),
            page_count: default_page_count(),
            language: default_language(),
        }
    }
}

fn default_published_date() -> String {
    "2021-01-01".into()
}
fn default_page_count() -> i64 {
    100
}
fn default_language() -> String {
    "English".into()
}

// ── Draft ───────────────────────────────────────────────────────────

/// The editable draft behind the create/edit form.
///
/// `page_count` is held as `f64` — the value a numeric input yields —
/// so non-finite input is representable and can be rejected. It becomes
/// an integer only once validation has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub page_count: f64,
    pub language: String,
}

impl BookForm {
    /// A fresh create-mode draft: empty title/author/publisher, the
    /// configured date, page count, and language.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            publisher: String::new(),
            published_date: defaults.published_date.clone(),
            page_count: defaults.page_count as f64,
            language: defaults.language.clone(),
        }
    }

    /// An edit-mode draft: a copy of the entity's fields, uid excluded.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            published_date: book.published_date.clone(),
            page_count: book.page_count as f64,
            language: book.language.clone(),
        }
    }

    /// Check field constraints in a fixed order; the first failure wins
    /// and is reported as a single human-readable message.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(invalid("Title must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(invalid("Author must not be empty"));
        }
        if !is_date_pattern(&self.published_date) {
            return Err(invalid("Published date must be in YYYY-MM-DD format"));
        }
        if !self.page_count.is_finite() || self.page_count <= 0.0 {
            return Err(invalid("Page count must be a positive number"));
        }
        Ok(())
    }

    /// Validate, then convert the draft into a create payload, verbatim.
    #[allow(clippy::cast_possible_truncation)]
    pub fn payload(&self) -> Result<BookCreate, CoreError> {
        self.validate()?;
        // page_count is finite and positive here.
        Ok(BookCreate {
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            published_date: self.published_date.clone(),
            page_count: self.page_count as i64,
            language: self.language.clone(),
        })
    }
}

fn invalid(message: &str) -> CoreError {
    CoreError::ValidationFailed {
        message: message.to_owned(),
    }
}

/// Syntactic date check: four digits, hyphen, two digits, hyphen, two
/// digits. Calendar validity is not checked; the stored value passes
/// through as opaque text.
fn is_date_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

// ── Mode and state ──────────────────────────────────────────────────

/// Whether a submitted draft creates a new entity or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(BookId),
}

/// The form controller's state: the current mode plus the draft.
///
/// Ephemeral: reset after a successful submission, after cancellation,
/// and whenever the entity being edited changes.
#[derive(Debug, Clone)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: BookForm,
}

impl FormState {
    /// A fresh create-mode form.
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            mode: FormMode::Create,
            draft: BookForm::from_defaults(defaults),
        }
    }

    /// Switch to edit mode for `book`, re-initializing the draft from
    /// its fields. Any in-progress draft is discarded.
    pub fn start_edit(&mut self, book: &Book) {
        self.mode = FormMode::Edit(book.uid.clone());
        self.draft = BookForm::from_book(book);
    }

    /// Discard the draft and return to create mode. Used both for
    /// cancellation and after a successful submission.
    pub fn reset(&mut self, defaults: &FormDefaults) {
        self.mode = FormMode::Create;
        self.draft = BookForm::from_defaults(defaults);
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }
}
