// ── Wire model for the book collection ──
//
// These types mirror the server's JSON shapes exactly. The server copy is
// authoritative: every mutation returns the definitive entity, and callers
// reconcile their local state from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── BookId ──────────────────────────────────────────────────────────

/// Opaque server-assigned identifier for a book.
///
/// Assigned on create, immutable afterwards. Treated as an opaque string
/// on the client side — no structure is assumed beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BookId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── Book ────────────────────────────────────────────────────────────

/// A single book record as confirmed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub uid: BookId,
    pub title: String,
    pub author: String,
    /// May be empty — the server does not require a publisher.
    pub publisher: String,
    /// Calendar date encoded as `YYYY-MM-DD`. Stored verbatim; the client
    /// never checks calendar validity, only the digit pattern on input.
    pub published_date: String,
    pub page_count: i64,
    pub language: String,
}

// ── Create / update payloads ────────────────────────────────────────

/// Payload for creating a book: every `Book` field minus the `uid`,
/// which the server assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub page_count: i64,
    pub language: String,
}

/// Partial payload for updating a book. Unset fields are omitted from
/// the request body and left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl From<BookCreate> for BookUpdate {
    /// Full-field update — what a submitted edit form produces.
    fn from(payload: BookCreate) -> Self {
        Self {
            title: Some(payload.title),
            author: Some(payload.author),
            publisher: Some(payload.publisher),
            published_date: Some(payload.published_date),
            page_count: Some(payload.page_count),
            language: Some(payload.language),
        }
    }
}
