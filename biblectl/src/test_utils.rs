//! Test utilities for CLI testing
//!
//! Provides a mock bible-api server and test helpers for exercising the
//! client over real HTTP. The mock records the exact path and query of
//! every request it receives, so tests can assert the resolved URLs, and
//! serves canned data for a handful of references, translations, and books.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Translations the mock server knows about
const KNOWN_TRANSLATIONS: &[&str] = &["web", "kjv"];

/// Mock server state
#[derive(Debug, Clone, Default)]
pub struct MockServerState {
    /// Exact path+query of every request received, in order
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockServerState {
    fn record(&self, uri: &Uri) {
        self.requests.lock().unwrap().push(uri.to_string());
    }
}

/// Query parameters for verse requests
#[derive(Debug, Deserialize)]
pub struct VerseQuery {
    translation: Option<String>,
}

/// Mock bible-api server implementation
#[derive(Debug, Default)]
pub struct MockServer {
    state: MockServerState,
    port: u16,
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the mock server and return the address
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
        }

        Ok((self, server_url))
    }

    /// Get the server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the server state
    pub fn state(&self) -> &MockServerState {
        &self.state
    }

    /// Path+query of every request received so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Create the mock server router
    fn create_router(&self) -> Router {
        Router::new()
            // Static data endpoints take precedence over the verse catch-all
            .route("/data", get(translations_handler))
            .route("/data/:translation", get(books_handler))
            .route("/data/:translation/:book", get(chapters_handler))
            .route("/data/web/random", get(random_handler))
            .route("/data/web/random/:filter", get(random_filter_handler))
            .route("/:reference", get(verse_handler))
            .with_state(self.state.clone())
    }
}

// Canned data

/// Look up a canned verse by its plus-encoded reference.
fn lookup_verse(reference: &str) -> Option<(&'static str, &'static str, u32, u32, &'static str)> {
    match reference {
        "John+3:16" => Some((
            "JHN",
            "John",
            3,
            16,
            "For God so loved the world, that he gave his one and only Son.",
        )),
        "Matthew+5:9" => Some((
            "MAT",
            "Matthew",
            5,
            9,
            "Blessed are the peacemakers, for they shall be called children of God.",
        )),
        "1+John+4:8" => Some(("1JN", "1 John", 4, 8, "God is love.")),
        _ => None,
    }
}

fn verse_body(reference: &str, translation: &str) -> Value {
    let (book_id, book_name, chapter, verse, text) =
        lookup_verse(reference).expect("verse must exist");
    json!({
        "reference": reference.replace('+', " "),
        "verses": [{
            "book_id": book_id,
            "book_name": book_name,
            "chapter": chapter,
            "verse": verse,
            "text": text,
        }],
        "text": text,
        "translation_id": translation,
    })
}

fn random_verse_body(book_id: &str) -> Value {
    let (reference, text) = match book_id {
        "GEN" => ("Genesis 1:1", "In the beginning, God created the heavens and the earth."),
        "MAT" => ("Matthew 5:9", "Blessed are the peacemakers."),
        _ => ("John 3:16", "For God so loved the world."),
    };
    json!({
        "translation": {
            "identifier": "web",
            "name": "World English Bible",
        },
        "random_verse": {
            "book_id": book_id,
            "reference": reference,
            "text": text,
        },
    })
}

fn chapter_count(book: &str) -> Option<u32> {
    match book {
        "GEN" => Some(50),
        "JHN" => Some(21),
        "MAT" => Some(28),
        _ => None,
    }
}

// Handler functions

async fn translations_handler(State(state): State<MockServerState>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    Json(json!([
        {"identifier": "web", "name": "World English Bible", "language": "English"},
        {"identifier": "kjv", "name": "King James Version", "language": "English"},
    ]))
}

async fn books_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Path(translation): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);

    if !KNOWN_TRANSLATIONS.contains(&translation.as_str()) {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(json!({
        "translation": {"identifier": translation},
        "books": [
            {"id": "GEN", "name": "Genesis"},
            {"id": "MAT", "name": "Matthew"},
            {"id": "JHN", "name": "John"},
        ],
    })))
}

async fn chapters_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Path((translation, book)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);

    if !KNOWN_TRANSLATIONS.contains(&translation.as_str()) {
        return Err(StatusCode::NOT_FOUND);
    }
    let count = chapter_count(&book).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(json!({
        "translation": {"identifier": translation},
        "book": {"id": book},
        "chapters": (1..=count).collect::<Vec<u32>>(),
    })))
}

async fn random_handler(State(state): State<MockServerState>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    Json(random_verse_body("JHN"))
}

async fn random_filter_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Path(filter): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);

    match filter.as_str() {
        "OT" => Ok(Json(random_verse_body("GEN"))),
        "NT" => Ok(Json(random_verse_body("JHN"))),
        books => {
            // Comma-separated book IDs; answer from the first known one.
            let first = books
                .split(',')
                .find(|id| chapter_count(id).is_some())
                .ok_or(StatusCode::NOT_FOUND)?;
            Ok(Json(random_verse_body(first)))
        }
    }
}

async fn verse_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Path(reference): Path<String>,
    Query(params): Query<VerseQuery>,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);

    if lookup_verse(&reference).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    let translation = params.translation.as_deref().unwrap_or("web");
    Ok(Json(verse_body(&reference, translation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_startup() {
        let server = MockServer::new();
        let (server, url) = server.start().await.unwrap();

        assert!(server.port() > 0);
        assert!(url.contains(&server.port().to_string()));

        let client = reqwest::Client::new();
        let response = client.get(format!("{}/data", url)).send().await.unwrap();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_verse_endpoint() {
        let server = MockServer::new();
        let (server, url) = server.start().await.unwrap();

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/John+3:16?translation=kjv", url))
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["reference"], "John 3:16");
        assert_eq!(body["translation_id"], "kjv");

        assert_eq!(server.requests(), vec!["/John+3:16?translation=kjv"]);
    }

    #[tokio::test]
    async fn test_unknown_reference_returns_404() {
        let server = MockServer::new();
        let (_, url) = server.start().await.unwrap();

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/Nowhere+99:9", url))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_random_endpoints() {
        let server = MockServer::new();
        let (_, url) = server.start().await.unwrap();

        let client = reqwest::Client::new();

        let body: Value = client
            .get(format!("{}/data/web/random", url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["random_verse"]["book_id"], "JHN");

        let body: Value = client
            .get(format!("{}/data/web/random/OT", url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["random_verse"]["book_id"], "GEN");

        let body: Value = client
            .get(format!("{}/data/web/random/MAT,JHN", url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["random_verse"]["book_id"], "MAT");
    }

    #[tokio::test]
    async fn test_chapters_endpoint() {
        let server = MockServer::new();
        let (_, url) = server.start().await.unwrap();

        let client = reqwest::Client::new();
        let body: Value = client
            .get(format!("{}/data/web/JHN", url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["chapters"].as_array().unwrap().len(), 21);
    }
}
