// ── View-filter for the book cache ──
//
// Pure derivation: a filtered projection of the cache, computed on
// demand from (cache, query) alone. No memoization, no side effects.

use bookly_api::Book;

/// Filter predicate for book collections.
pub enum BookFilter {
    /// Match everything.
    All,
    /// Free-text query matched case-insensitively against title, author,
    /// publisher, and language. Whitespace-only queries match everything.
    Query(String),
    /// Arbitrary predicate.
    Custom(Box<dyn Fn(&Book) -> bool + Send + Sync>),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Query(q) => {
                let needle = q.trim().to_lowercase();
                needle.is_empty() || haystacks(book).any(|field| field.to_lowercase().contains(&needle))
            }
            Self::Custom(f) => f(book),
        }
    }

    /// Apply this filter to a cache slice, preserving order.
    pub fn apply<'a>(&self, cache: &'a [Book]) -> Vec<&'a Book> {
        match self {
            Self::Query(q) => filter_books(cache, q),
            _ => cache.iter().filter(|b| self.matches(b)).collect(),
        }
    }
}

/// The searchable text fields of a book, in match order.
fn haystacks(book: &Book) -> impl Iterator<Item = &str> {
    [
        book.title.as_str(),
        book.author.as_str(),
        book.publisher.as_str(),
        book.language.as_str(),
    ]
    .into_iter()
}

/// Derive the subsequence of `cache` matching `query`.
///
/// The query is trimmed and lowercased once; a book matches when any of
/// title, author, publisher, or language contains it as a substring.
/// An empty or whitespace-only query yields the full cache. Order is
/// always the cache order.
pub fn filter_books<'a>(cache: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return cache.iter().collect();
    }
    cache
        .iter()
        .filter(|book| haystacks(book).any(|field| field.to_lowercase().contains(&needle)))
        .collect()
}
