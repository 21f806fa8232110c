// ── Bookshelf facade ──
//
// The entry point for consumers. Owns the store and the status context;
// every operation runs inside its status window, and every failure is
// recorded before it propagates. Consumers never touch the transport.

use bookly_api::{Book, BookCreate, BookId, BookUpdate, BooksClient};

use crate::error::CoreError;
use crate::filter::filter_books;
use crate::form::{FormDefaults, FormMode, FormState};
use crate::status::OpStatus;
use crate::store::BookStore;

/// Facade over the book store, status context, and form defaults.
///
/// The refresh path runs inside the loading window; create, update, and
/// delete run inside the busy window. Windows open before the call and
/// close when their guard drops — on every exit path. The facade exposes
/// the flags but does not enforce exclusion; presentation layers should
/// disable mutating actions while [`status`](Self::status) is not idle.
pub struct Bookshelf {
    store: BookStore,
    status: OpStatus,
    defaults: FormDefaults,
}

impl Bookshelf {
    pub fn new(client: BooksClient, defaults: FormDefaults) -> Self {
        Self {
            store: BookStore::new(client),
            status: OpStatus::new(),
            defaults,
        }
    }

    // ── Read access ──────────────────────────────────────────────────

    /// The cached collection, in order.
    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    /// Look up a cached book by uid.
    pub fn book(&self, uid: &BookId) -> Option<&Book> {
        self.store.book(uid)
    }

    /// The filtered view of the cache for a free-text query.
    pub fn filtered(&self, query: &str) -> Vec<&Book> {
        filter_books(self.store.books(), query)
    }

    /// The status context (loading/busy/error flags).
    pub fn status(&self) -> &OpStatus {
        &self.status
    }

    /// The configured form defaults.
    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    /// A fresh create-mode form.
    pub fn form(&self) -> FormState {
        FormState::new(&self.defaults)
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Refresh the cache from the server, inside the loading window.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let result = {
            let _window = self.status.begin_loading();
            self.store.refresh().await
        };
        if let Err(ref err) = result {
            self.status.record(err);
        }
        result
    }

    /// Create a book, inside the busy window.
    pub async fn create(&mut self, payload: BookCreate) -> Result<Book, CoreError> {
        let result = {
            let _window = self.status.begin_busy();
            self.store.create(&payload).await
        };
        if let Err(ref err) = result {
            self.status.record(err);
        }
        result
    }

    /// Update a book, inside the busy window.
    pub async fn update(&mut self, uid: &BookId, patch: BookUpdate) -> Result<Book, CoreError> {
        let result = {
            let _window = self.status.begin_busy();
            self.store.update(uid, &patch).await
        };
        if let Err(ref err) = result {
            self.status.record(err);
        }
        result
    }

    /// Delete a book, inside the busy window. Unconditional — any
    /// confirmation dialog is the presentation layer's concern.
    pub async fn delete(&mut self, uid: &BookId) -> Result<(), CoreError> {
        let result = {
            let _window = self.status.begin_busy();
            self.store.delete(uid).await
        };
        if let Err(ref err) = result {
            self.status.record(err);
        }
        result
    }

    /// Validate and submit a form, dispatching on its mode: create-mode
    /// drafts become create payloads, edit-mode drafts become full-field
    /// updates for the edited uid. On success the form resets to create
    /// mode.
    ///
    /// Validation failures are returned without opening the busy window
    /// or touching the status error slot — they are form-local, raised
    /// before any network call.
    pub async fn submit(&mut self, form: &mut FormState) -> Result<Book, CoreError> {
        let payload = form.draft.payload()?;
        let saved = match form.mode.clone() {
            FormMode::Create => self.create(payload).await?,
            FormMode::Edit(uid) => self.update(&uid, BookUpdate::from(payload)).await?,
        };
        form.reset(&self.defaults);
        Ok(saved)
    }
}
