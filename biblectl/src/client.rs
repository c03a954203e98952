//! HTTP client for communicating with a bible-api server.

use anyhow::{Context, Result};
use bible_core::{ApiRequest, BibleError, RandomFilter, Testament};
use serde_json::Value;

/// Normalize a server URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP client for communicating with a bible-api server's REST surface.
///
/// Each method issues exactly one GET request: no retries, no custom
/// headers, no timeout override. The server's JSON body is relayed as an
/// opaque [`serde_json::Value`] without schema validation, so responses can
/// be re-serialized with their field ordering intact.
///
/// Construction performs no network access; the only request happens when a
/// command method is called.
///
/// # Examples
///
/// ```no_run
/// use biblectl::client::BibleClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = BibleClient::new("http://localhost:4567")?;
///
/// let verse = client.get_verse("John 3:16", Some("kjv")).await?;
/// println!("{}", verse["text"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BibleClient {
    client: reqwest::Client,
    base_url: String,
}

impl BibleClient {
    /// Create a new client for the server at `server_url`.
    ///
    /// Trailing slashes on the URL are stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(server_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_url(server_url),
        })
    }

    /// The normalized base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `request` to its URL and perform the single GET.
    ///
    /// # Errors
    ///
    /// Returns [`BibleError::HttpStatus`] for any non-success status,
    /// [`BibleError::Transport`] when the request cannot be sent, and
    /// [`BibleError::Decode`] when the body is not valid JSON.
    pub async fn fetch(&self, request: &ApiRequest) -> Result<Value> {
        let url = request.url(&self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BibleError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BibleError::HttpStatus(status.as_u16()).into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| BibleError::Transport(e.to_string()))?;

        let data = serde_json::from_str(&text).map_err(BibleError::Decode)?;
        Ok(data)
    }

    /// Fetch a verse or passage by reference.
    ///
    /// Spaces in `reference` become literal `+` characters in the URL path;
    /// when `translation` is absent the query parameter is omitted entirely.
    pub async fn get_verse(&self, reference: &str, translation: Option<&str>) -> Result<Value> {
        self.fetch(&ApiRequest::Verse {
            reference: reference.to_string(),
            translation: translation.map(str::to_string),
        })
        .await
    }

    /// List the translations the server offers.
    pub async fn get_translations(&self) -> Result<Value> {
        self.fetch(&ApiRequest::Translations).await
    }

    /// List the books of a translation.
    pub async fn get_books(&self, translation: &str) -> Result<Value> {
        self.fetch(&ApiRequest::Books {
            translation: translation.to_string(),
        })
        .await
    }

    /// List the chapters of a book in a translation.
    pub async fn get_chapters(&self, translation: &str, book: &str) -> Result<Value> {
        self.fetch(&ApiRequest::Chapters {
            translation: translation.to_string(),
            book: book.to_string(),
        })
        .await
    }

    /// Fetch a random verse, optionally scoped to books or a testament.
    pub async fn get_random(&self, filter: Option<RandomFilter>) -> Result<Value> {
        self.fetch(&ApiRequest::Random { filter }).await
    }

    /// Fetch a random verse from the given books.
    pub async fn get_random_from_books(&self, books: Vec<String>) -> Result<Value> {
        self.get_random(Some(RandomFilter::Books(books))).await
    }

    /// Fetch a random verse from the given testament.
    pub async fn get_random_from_testament(&self, testament: Testament) -> Result<Value> {
        self.get_random(Some(RandomFilter::Testament(testament)))
            .await
    }
}
