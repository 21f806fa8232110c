//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders books in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits one uid per line.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use bookly_core::Book;

use crate::cli::OutputFormat;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Pages")]
    pages: i64,
    #[tabled(rename = "Lang")]
    language: String,
    #[tabled(rename = "UID")]
    uid: String,
}

impl From<&Book> for BookRow {
    fn from(b: &Book) -> Self {
        Self {
            title: b.title.clone(),
            author: b.author.clone(),
            published: b.published_date.clone(),
            pages: b.page_count,
            language: b.language.clone(),
            uid: b.uid.to_string(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a filtered view of the collection in the chosen format.
pub fn render_books(format: &OutputFormat, books: &[&Book]) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<BookRow> = books.iter().map(|b| BookRow::from(*b)).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => render_json(books, false),
        OutputFormat::JsonCompact => render_json(books, true),
        OutputFormat::Yaml => render_yaml(books),
        OutputFormat::Plain => books
            .iter()
            .map(|b| b.uid.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a single book in the chosen format.
pub fn render_book(format: &OutputFormat, book: &Book) -> String {
    match format {
        OutputFormat::Table => detail(book),
        OutputFormat::Json => render_json(book, false),
        OutputFormat::JsonCompact => render_json(book, true),
        OutputFormat::Yaml => render_yaml(book),
        OutputFormat::Plain => book.uid.to_string(),
    }
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn detail(book: &Book) -> String {
    format!(
        "Title:      {}\n\
         Author:     {}\n\
         Publisher:  {}\n\
         Published:  {}\n\
         Pages:      {}\n\
         Language:   {}\n\
         UID:        {}",
        book.title,
        book.author,
        book.publisher,
        book.published_date,
        book.page_count,
        book.language,
        book.uid,
    )
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(data).expect("serialization should not fail")
    } else {
        serde_json::to_string_pretty(data).expect("serialization should not fail")
    }
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
