//! Request descriptor and URL mapping for the bible-api REST surface
//!
//! Every CLI invocation produces exactly one [`ApiRequest`], which resolves
//! deterministically to a single request URL. The mapping is pure string
//! interpolation; responses are opaque JSON and never modeled here.

/// Translation used when none is specified for `books` and `chapters`,
/// and the only translation served by the random-verse endpoint.
pub const DEFAULT_TRANSLATION: &str = "web";

/// Old or New Testament, as accepted by the random-verse endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Wire spelling of the testament, used as a URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope filter for the random-verse endpoint.
///
/// The two variants are mutually exclusive; the CLI layer rejects
/// invocations that specify both before a request is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomFilter {
    /// Restrict to a set of book IDs, joined with commas into one path segment
    Books(Vec<String>),
    /// Restrict to the Old or New Testament
    Testament(Testament),
}

/// A parsed invocation: one variant per CLI command.
///
/// Constructed once per process run, never mutated, and discarded after the
/// single URL resolution and fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Fetch a verse or passage by reference
    Verse {
        /// Bible reference, e.g. "John 3:16"
        reference: String,
        /// Optional translation ID; the query parameter is omitted when absent
        translation: Option<String>,
    },
    /// List available translations
    Translations,
    /// List books for a translation
    Books { translation: String },
    /// List chapters for a book in a translation
    Chapters { translation: String, book: String },
    /// Fetch a random verse, optionally scoped by books or testament
    Random { filter: Option<RandomFilter> },
}

/// Replace spaces in a reference with literal `+` characters.
///
/// No other escaping is performed: the server expects the reference verbatim
/// apart from this substitution, so reserved URL characters pass through.
pub fn encode_reference(reference: &str) -> String {
    reference.replace(' ', "+")
}

impl ApiRequest {
    /// Resolve this request to its URL under `base`.
    ///
    /// Trailing slashes on `base` are stripped before concatenation.
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');

        match self {
            ApiRequest::Verse {
                reference,
                translation,
            } => {
                let mut url = format!("{}/{}", base, encode_reference(reference));
                if let Some(translation) = translation {
                    url.push_str(&format!("?translation={}", translation));
                }
                url
            }
            ApiRequest::Translations => format!("{}/data", base),
            ApiRequest::Books { translation } => format!("{}/data/{}", base, translation),
            ApiRequest::Chapters { translation, book } => {
                format!("{}/data/{}/{}", base, translation, book)
            }
            ApiRequest::Random { filter } => {
                // The random endpoint exists only for the web translation.
                let mut url = format!("{}/data/{}/random", base, DEFAULT_TRANSLATION);
                match filter {
                    Some(RandomFilter::Books(books)) => {
                        url.push('/');
                        url.push_str(&books.join(","));
                    }
                    Some(RandomFilter::Testament(testament)) => {
                        url.push('/');
                        url.push_str(testament.as_str());
                    }
                    None => {}
                }
                url
            }
        }
    }
}
