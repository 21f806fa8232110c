// bookly-api: Async Rust client for the Bookly book-collection REST API

pub mod client;
pub mod error;
pub mod model;
pub mod transport;

pub use client::BooksClient;
pub use error::Error;
pub use model::{Book, BookCreate, BookId, BookUpdate};
pub use transport::TransportConfig;
