// HTTP client for the Bookly collection API.
//
// Wraps `reqwest::Client` with base-address handling, JSON codec, and
// uniform error mapping. The endpoint surface is fixed: one collection
// route for list/create, one item route for update/delete.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use crate::transport::TransportConfig;

const BOOKS_PATH: &str = "api/v1/books";
const BOOK_PATH: &str = "api/v1/book";

/// Async client for the Bookly REST API.
///
/// All calls target `base_url` + a fixed path, carry JSON bodies with
/// `Content-Type: application/json`, and map non-success responses to
/// [`Error::Api`]. No retries; failures propagate immediately.
#[derive(Debug)]
pub struct BooksClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BooksClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a base address and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (test seam; the caller manages
    /// timeouts and default headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// The configured base address.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Normalize the base address so relative joins always work:
    /// the path is forced to end with exactly one `/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Join a fixed API path onto the base address.
    fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Parse a successful response body as JSON, or map a non-success
    /// status to [`Error::Api`].
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Accept any success status without touching the body — the delete
    /// route answers 204 No Content.
    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Build an [`Error::Api`] from a non-success response. The body is
    /// read best-effort; a secondary read failure yields an empty string.
    async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let body = resp.text().await.unwrap_or_default();
        Error::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch the full book collection. `GET /api/v1/books`
    pub async fn list_books(&self) -> Result<Vec<Book>, Error> {
        self.get(BOOKS_PATH).await
    }

    /// Create a book. The server returns the definitive copy, including
    /// the assigned `uid`. `POST /api/v1/books`
    pub async fn create_book(&self, payload: &BookCreate) -> Result<Book, Error> {
        self.post(BOOKS_PATH, payload).await
    }

    /// Partially update a book; the returned entity is authoritative.
    /// `PATCH /api/v1/book/{uid}`
    pub async fn update_book(&self, uid: &BookId, patch: &BookUpdate) -> Result<Book, Error> {
        self.patch(&format!("{BOOK_PATH}/{uid}"), patch).await
    }

    /// Delete a book. `DELETE /api/v1/book/{uid}` answers 204 No Content.
    pub async fn delete_book(&self, uid: &BookId) -> Result<(), Error> {
        self.delete(&format!("{BOOK_PATH}/{uid}")).await
    }
}
