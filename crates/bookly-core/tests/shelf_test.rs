// Integration tests for `Bookshelf` reconciliation using wiremock.
//
// These exercise the cache/status behavior end to end: every mutation is
// server-first, the cache changes only on confirmation, and the status
// windows close on success and failure alike.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookly_core::{
    Book, BookCreate, BookId, BookUpdate, BooksClient, Bookshelf, CoreError, FormDefaults,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Bookshelf) {
    let server = MockServer::start().await;
    let client = BooksClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, Bookshelf::new(client, FormDefaults::default()))
}

fn book(uid: &Uuid, title: &str) -> Book {
    Book {
        uid: BookId::from(uid.to_string()),
        title: title.into(),
        author: "Allen B. Downey".into(),
        publisher: "O'Reilly Media".into(),
        published_date: "2021-01-01".into(),
        page_count: 100,
        language: "English".into(),
    }
}

fn payload(title: &str) -> BookCreate {
    BookCreate {
        title: title.into(),
        author: "Allen B. Downey".into(),
        publisher: "O'Reilly Media".into(),
        published_date: "2021-01-01".into(),
        page_count: 100,
        language: "English".into(),
    }
}

async fn mount_list(server: &MockServer, books: &[Book]) {
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books))
        .mount(server)
        .await;
}

// ── Refresh ─────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_replaces_the_cache_in_server_order() {
    let (server, mut shelf) = setup().await;
    let a = book(&Uuid::new_v4(), "Think Python");
    let b = book(&Uuid::new_v4(), "Fluent Python");
    mount_list(&server, &[a.clone(), b.clone()]).await;

    shelf.refresh().await.unwrap();

    assert_eq!(shelf.books().len(), 2);
    assert_eq!(shelf.books()[0].uid, a.uid);
    assert_eq!(shelf.books()[1].uid, b.uid);
    assert!(shelf.status().is_idle());
    assert!(shelf.status().error().is_none());
}

#[tokio::test]
async fn failed_refresh_leaves_the_cache_untouched() {
    let (server, mut shelf) = setup().await;
    let a = book(&Uuid::new_v4(), "Think Python");

    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([a])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("list failed"))
        .mount(&server)
        .await;

    shelf.refresh().await.unwrap();
    assert_eq!(shelf.books().len(), 1);

    let err = shelf.refresh().await.unwrap_err();
    assert!(matches!(err, CoreError::Api { status: Some(500), .. }));

    // Cache kept, loading window closed, failure surfaced.
    assert_eq!(shelf.books().len(), 1);
    assert!(!shelf.status().is_loading());
    assert!(shelf.status().error().unwrap().contains("list failed"));
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_prepends_the_confirmed_entity() {
    let (server, mut shelf) = setup().await;
    let existing = book(&Uuid::new_v4(), "Fluent Python");
    mount_list(&server, &[existing.clone()]).await;
    shelf.refresh().await.unwrap();

    let uid = Uuid::new_v4();
    let wanted = payload("Think Python");
    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .and(body_json(&wanted))
        .respond_with(ResponseTemplate::new(201).set_body_json(book(&uid, "Think Python")))
        .mount(&server)
        .await;

    let created = shelf.create(wanted.clone()).await.unwrap();

    // Round-trip: the confirmed entity matches the draft, uid aside.
    assert_eq!(created.title, wanted.title);
    assert_eq!(created.author, wanted.author);
    assert_eq!(created.page_count, wanted.page_count);

    assert_eq!(shelf.books().len(), 2);
    assert_eq!(shelf.books()[0].uid, BookId::from(uid.to_string()));
    assert_eq!(shelf.books()[1].uid, existing.uid);
    assert!(!shelf.status().is_busy());
}

#[tokio::test]
async fn failed_create_clears_busy_and_keeps_the_cache() {
    let (server, mut shelf) = setup().await;
    let existing = book(&Uuid::new_v4(), "Fluent Python");
    mount_list(&server, &[existing.clone()]).await;
    shelf.refresh().await.unwrap();
    let before: Vec<Book> = shelf.books().to_vec();

    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("create failed"))
        .mount(&server)
        .await;

    let err = shelf.create(payload("Doomed")).await.unwrap_err();

    assert!(matches!(err, CoreError::Api { status: Some(500), .. }));
    assert!(!shelf.status().is_busy());
    assert_eq!(shelf.books(), before.as_slice());
    assert!(shelf.status().error().unwrap().contains("create failed"));
}

// ── Update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_exactly_the_matching_row() {
    let (server, mut shelf) = setup().await;
    let uid = Uuid::new_v4();
    let target = book(&uid, "Think Pythen");
    let other = book(&Uuid::new_v4(), "Fluent Python");
    mount_list(&server, &[target.clone(), other.clone()]).await;
    shelf.refresh().await.unwrap();

    let mut corrected = target.clone();
    corrected.title = "Think Python".into();

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/book/{uid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&corrected))
        .mount(&server)
        .await;

    let patch = BookUpdate {
        title: Some("Think Python".into()),
        ..BookUpdate::default()
    };
    shelf.update(&target.uid, patch).await.unwrap();

    let hits: Vec<&Book> = shelf.books().iter().filter(|b| b.uid == target.uid).collect();
    assert_eq!(hits.len(), 1, "exactly one row per uid");
    assert_eq!(hits[0].title, "Think Python");
    // The untouched row keeps its position and contents.
    assert_eq!(shelf.books()[1], other);
}

#[tokio::test]
async fn confirmed_update_for_an_uncached_uid_leaves_the_cache_alone() {
    let (server, mut shelf) = setup().await;
    let cached = book(&Uuid::new_v4(), "Fluent Python");
    mount_list(&server, &[cached.clone()]).await;
    shelf.refresh().await.unwrap();

    // Membership is a caller precondition the store does not enforce:
    // the PATCH is issued, and the confirmed entity matches no row.
    let stray = Uuid::new_v4();
    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/book/{stray}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(book(&stray, "Stray")))
        .mount(&server)
        .await;

    let updated = shelf
        .update(&BookId::from(stray.to_string()), BookUpdate::default())
        .await
        .unwrap();

    assert_eq!(updated.title, "Stray");
    assert_eq!(shelf.books().len(), 1);
    assert_eq!(shelf.books()[0], cached);
}

#[tokio::test]
async fn failed_update_keeps_the_stale_row() {
    let (server, mut shelf) = setup().await;
    let uid = Uuid::new_v4();
    let target = book(&uid, "Think Pythen");
    mount_list(&server, &[target.clone()]).await;
    shelf.refresh().await.unwrap();

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/book/{uid}")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Book not found"))
        .mount(&server)
        .await;

    let err = shelf
        .update(&target.uid, BookUpdate::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(shelf.books()[0].title, "Think Pythen");
    assert!(!shelf.status().is_busy());
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_the_confirmed_row() {
    let (server, mut shelf) = setup().await;
    let uid = Uuid::new_v4();
    let doomed = book(&uid, "Doomed");
    let kept = book(&Uuid::new_v4(), "Kept");
    mount_list(&server, &[doomed.clone(), kept.clone()]).await;
    shelf.refresh().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/book/{uid}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    shelf.delete(&doomed.uid).await.unwrap();

    assert_eq!(shelf.books().len(), 1);
    assert!(shelf.book(&doomed.uid).is_none());
    assert_eq!(shelf.books()[0].uid, kept.uid);
}

#[tokio::test]
async fn failed_delete_keeps_the_row() {
    let (server, mut shelf) = setup().await;
    let uid = Uuid::new_v4();
    let target = book(&uid, "Sticky");
    mount_list(&server, &[target.clone()]).await;
    shelf.refresh().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/book/{uid}")))
        .respond_with(ResponseTemplate::new(500).set_body_string("delete failed"))
        .mount(&server)
        .await;

    shelf.delete(&target.uid).await.unwrap_err();

    assert_eq!(shelf.books().len(), 1);
    assert!(!shelf.status().is_busy());
    assert!(shelf.status().error().unwrap().contains("delete failed"));
}

// ── Form submission ─────────────────────────────────────────────────

#[tokio::test]
async fn submitting_a_create_form_prepends_and_resets() {
    let (server, mut shelf) = setup().await;
    mount_list(&server, &[]).await;
    shelf.refresh().await.unwrap();

    let uid = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(201).set_body_json(book(&uid, "Think Python")))
        .mount(&server)
        .await;

    let mut form = shelf.form();
    form.draft.title = "Think Python".into();
    form.draft.author = "Allen B. Downey".into();
    form.draft.publisher = "O'Reilly Media".into();

    let created = shelf.submit(&mut form).await.unwrap();

    assert_eq!(created.uid, BookId::from(uid.to_string()));
    assert_eq!(shelf.books().len(), 1);
    // Draft is ephemeral: reset to create-mode defaults on success.
    assert!(!form.is_editing());
    assert_eq!(form.draft.title, "");
}

#[tokio::test]
async fn submitting_an_edit_form_sends_a_full_field_update() {
    let (server, mut shelf) = setup().await;
    let uid = Uuid::new_v4();
    let original = book(&uid, "Think Pythen");
    mount_list(&server, &[original.clone()]).await;
    shelf.refresh().await.unwrap();

    let mut corrected = original.clone();
    corrected.title = "Think Python".into();

    // The edit form submits every field, not a sparse diff.
    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/book/{uid}")))
        .and(body_json(json!({
            "title": "Think Python",
            "author": "Allen B. Downey",
            "publisher": "O'Reilly Media",
            "published_date": "2021-01-01",
            "page_count": 100,
            "language": "English"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&corrected))
        .mount(&server)
        .await;

    let mut form = shelf.form();
    form.start_edit(&original);
    form.draft.title = "Think Python".into();

    shelf.submit(&mut form).await.unwrap();

    assert_eq!(shelf.books()[0].title, "Think Python");
    assert!(!form.is_editing());
}

#[tokio::test]
async fn validation_failures_stay_local_to_the_form() {
    let (server, mut shelf) = setup().await;
    mount_list(&server, &[]).await;
    shelf.refresh().await.unwrap();

    // No POST mock mounted: a network call here would fail loudly.
    let mut form = shelf.form();
    form.draft.author = "Allen B. Downey".into(); // title left empty

    let err = shelf.submit(&mut form).await.unwrap_err();

    assert!(matches!(err, CoreError::ValidationFailed { .. }));
    // The busy window never opened and the status error slot is for
    // network failures only.
    assert!(!shelf.status().is_busy());
    assert!(shelf.status().error().is_none());
    // The draft survives for the user to fix.
    assert_eq!(form.draft.author, "Allen B. Downey");
}

// ── Overlapping mutations ───────────────────────────────────────────

#[tokio::test]
async fn overlapping_mutations_resolve_in_completion_order() {
    // Documented race, not a guarantee: when a delete and an update for
    // the same uid both succeed, the cache reflects whichever response
    // was reconciled last. Here the delete reconciles first, so the
    // update's confirmed entity matches no row and the book stays gone.
    let (server, mut shelf) = setup().await;
    let uid = Uuid::new_v4();
    let target = book(&uid, "Contested");
    mount_list(&server, &[target.clone()]).await;
    shelf.refresh().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/book/{uid}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/book/{uid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(book(&uid, "Contested v2")))
        .mount(&server)
        .await;

    shelf.delete(&target.uid).await.unwrap();
    shelf
        .update(&target.uid, BookUpdate::default())
        .await
        .unwrap();

    assert!(shelf.book(&target.uid).is_none());
}
