// ── Resource store ──
//
// The authoritative local cache of the book collection. Every mutation
// goes server-first: the cache changes only in the continuation of a
// confirmed response, all-or-nothing, so it never holds an entity the
// server has not confirmed.

use tracing::debug;

use bookly_api::{Book, BookCreate, BookId, BookUpdate, BooksClient};

use crate::error::CoreError;

/// Ordered local cache of books, reconciled from confirmed server
/// responses.
///
/// Ordering rules: `refresh` adopts the server's list order wholesale;
/// `create` prepends the new entity; `update` replaces in place;
/// `delete` removes. Existing order is never otherwise disturbed.
///
/// Mutating methods take `&mut self` — within a single task the borrow
/// checker serializes reconciliation, so there are no partial writes to
/// interleave. There is no locking and no cancellation: once a call is
/// issued it runs to completion or failure.
pub struct BookStore {
    client: BooksClient,
    cache: Vec<Book>,
}

impl BookStore {
    /// An empty store. Call [`refresh`](Self::refresh) to populate it.
    pub fn new(client: BooksClient) -> Self {
        Self {
            client,
            cache: Vec::new(),
        }
    }

    // ── Cache accessors ──────────────────────────────────────────────

    /// The current cache, in order.
    pub fn books(&self) -> &[Book] {
        &self.cache
    }

    /// Look up a cached book by uid.
    pub fn book(&self, uid: &BookId) -> Option<&Book> {
        self.cache.iter().find(|b| &b.uid == uid)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Fetch the full collection and replace the cache wholesale.
    /// On failure the cache is left untouched.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let fetched = self.client.list_books().await?;
        debug!(count = fetched.len(), "cache replaced from server list");
        self.cache = fetched;
        Ok(())
    }

    /// Create a book and prepend the server's confirmed copy.
    pub async fn create(&mut self, payload: &BookCreate) -> Result<Book, CoreError> {
        let created = self.client.create_book(payload).await?;
        debug!(uid = %created.uid, "created book prepended to cache");
        self.cache.insert(0, created.clone());
        Ok(created)
    }

    /// Update a book and replace the cache row whose uid matches the
    /// confirmed entity.
    ///
    /// Membership is not pre-checked: callers normally only update uids
    /// they obtained from the cache, and a confirmed update that matches
    /// no cached row (a stale cache, say) simply leaves the cache as-is.
    pub async fn update(&mut self, uid: &BookId, patch: &BookUpdate) -> Result<Book, CoreError> {
        let updated = self.client.update_book(uid, patch).await?;
        match self.cache.iter_mut().find(|b| b.uid == updated.uid) {
            Some(row) => {
                debug!(uid = %updated.uid, "cache row replaced with confirmed update");
                *row = updated.clone();
            }
            None => debug!(uid = %updated.uid, "confirmed update matched no cached row"),
        }
        Ok(updated)
    }

    /// Delete a book and remove its cache row once the server confirms.
    pub async fn delete(&mut self, uid: &BookId) -> Result<(), CoreError> {
        self.client.delete_book(uid).await?;
        debug!(%uid, "deleted book removed from cache");
        self.cache.retain(|b| &b.uid != uid);
        Ok(())
    }
}
