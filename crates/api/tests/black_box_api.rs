use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use shelfmark_catalog::BookRecord;
use shelfmark_core::{AuthorId, BookId};
use shelfmark_service::CatalogService;
use shelfmark_store::{InMemoryAuthorStore, InMemoryBookStore, InMemoryGenreStore};

struct TestServer {
    base_url: String,
    books: Arc<InMemoryBookStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Build the same router as prod over in-memory stores, bound to an
    /// ephemeral port. The book store handle stands in for the external
    /// collaborator that owns book records.
    async fn spawn() -> Self {
        let authors = Arc::new(InMemoryAuthorStore::new());
        let genres = Arc::new(InMemoryGenreStore::new());
        let books = Arc::new(InMemoryBookStore::new());
        let catalog = CatalogService::new(authors, genres, books.clone());

        let app = shelfmark_api::app::build_app_with(catalog);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            books,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client that surfaces redirects instead of following them.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

fn location(res: &reqwest::Response) -> String {
    res.headers()[reqwest::header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

fn id_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap()
}

#[tokio::test]
async fn health_endpoint_is_live() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn genre_create_is_idempotent_on_duplicate_names() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .post(format!("{}/catalog/genres/create", srv.base_url))
        .form(&[("name", "Fantasy")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let first_url = location(&res);
    assert!(first_url.starts_with("/catalog/genres/"));

    // Creating the same name again redirects to the existing identity.
    let res = client
        .post(format!("{}/catalog/genres/create", srv.base_url))
        .form(&[("name", "Fantasy")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), first_url);

    let listing: Value = client
        .get(format!("{}/catalog/genres", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing["view"], "genre_list");
    assert_eq!(listing["genre_list"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn author_create_normalizes_and_detail_derives_display_fields() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .post(format!("{}/catalog/authors/create", srv.base_url))
        .form(&[
            ("first_name", "  Ursula "),
            ("family_name", "LeGuin"),
            ("date_of_birth", "1929-10-21"),
            ("date_of_death", "2018-01-22"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let detail_url = location(&res);

    let detail: Value = client
        .get(format!("{}{}", srv.base_url, detail_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(detail["view"], "author_detail");
    assert_eq!(detail["author"]["first_name"], "Ursula");
    assert_eq!(detail["author"]["name"], "Ursula LeGuin");
    assert_eq!(detail["author"]["lifespan"], "1929 - 2018");
    assert_eq!(detail["author"]["dob_formatted"], "Oct 21, 1929");
    assert_eq!(detail["author"]["url"], detail_url);
    assert_eq!(detail["author_books"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn invalid_author_input_re_renders_the_form_with_errors() {
    let srv = TestServer::spawn().await;

    let res = client()
        .post(format!("{}/catalog/authors/create", srv.base_url))
        .form(&[("first_name", ""), ("family_name", "LeGuin"), ("date_of_birth", "bad")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["view"], "author_form");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "first_name"));
    assert!(errors.iter().any(|e| e["msg"] == "Invalid date of birth"));
    // Raw input is echoed for pre-filling.
    assert_eq!(body["author"]["family_name"], "LeGuin");
}

#[tokio::test]
async fn author_deletion_is_guarded_by_referencing_books() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .post(format!("{}/catalog/authors/create", srv.base_url))
        .form(&[("first_name", "Iain"), ("family_name", "Banks")])
        .send()
        .await
        .unwrap();
    let detail_url = location(&res);
    let author_id: AuthorId = id_segment(&detail_url).parse().unwrap();

    // The external collaborator records two books referencing the author.
    let mut book_ids = Vec::new();
    for title in ["Consider Phlebas", "The Player of Games"] {
        let book = BookRecord {
            id: BookId::new(),
            title: title.to_string(),
            summary: format!("{title} summary"),
            author: Some(author_id),
            genres: vec![],
        };
        book_ids.push(book.id);
        srv.books.record(book).unwrap();
    }

    // Blocked: the delete view is rendered and nothing is mutated.
    let res = client
        .post(format!("{}/catalog/authors/{}/delete", srv.base_url, author_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["view"], "author_delete");
    assert_eq!(body["author_books"].as_array().unwrap().len(), 2);

    let res = client
        .get(format!("{}{}", srv.base_url, detail_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Unblock: the collaborator removes both books, then retry.
    for id in book_ids {
        srv.books.remove(id).unwrap();
    }

    let res = client
        .post(format!("{}/catalog/authors/{}/delete", srv.base_url, author_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/catalog/authors");

    // Subsequent detail fetch reports not-found.
    let res = client
        .get(format!("{}{}", srv.base_url, detail_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting the already-gone redirects to the listing as success.
    let res = client
        .post(format!("{}/catalog/authors/{}/delete", srv.base_url, author_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    // The delete confirmation view for the gone author does the same.
    let res = client
        .get(format!("{}/catalog/authors/{}/delete", srv.base_url, author_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/catalog/authors");
}

#[tokio::test]
async fn malformed_ids_and_update_stubs_map_to_the_right_statuses() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .get(format!("{}/catalog/authors/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let gone = AuthorId::new();
    let res = client
        .get(format!("{}/catalog/authors/{}/update", srv.base_url, gone))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
}
