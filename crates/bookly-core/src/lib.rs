//! Client-side state layer between `bookly-api` and UI consumers.
//!
//! This crate owns the synchronization logic that keeps a local cached
//! book list consistent with server-confirmed mutations:
//!
//! - **[`Bookshelf`]** — Central facade. Owns the store and the status
//!   context; every operation is bracketed by the appropriate
//!   loading/busy window and every failure lands in the status slot.
//!
//! - **[`BookStore`]** — The authoritative local cache: an ordered list
//!   reconciled all-or-nothing from confirmed server responses. Created
//!   entities are prepended; existing order is otherwise stable.
//!
//! - **[`filter_books`] / [`BookFilter`]** — Pure view derivation: the
//!   subsequence of the cache matching a free-text query, recomputed on
//!   demand from its inputs alone.
//!
//! - **[`FormState`]** — Draft ownership and ordered validation for the
//!   create/edit form, with mode switching and cancellation.
//!
//! - **[`OpStatus`]** — Explicit loading/busy/error context with
//!   RAII-guarded flag cleanup on every exit path.

pub mod error;
pub mod filter;
pub mod form;
pub mod shelf;
pub mod status;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use filter::{BookFilter, filter_books};
pub use form::{BookForm, FormDefaults, FormMode, FormState};
pub use shelf::Bookshelf;
pub use status::{OpStatus, StatusGuard};
pub use store::BookStore;

// Re-export the wire model and transport entry points at the crate root
// for ergonomics; the wire shape is the canonical shape — the server
// copy is authoritative.
pub use bookly_api::{Book, BookCreate, BookId, BookUpdate, BooksClient, TransportConfig};
