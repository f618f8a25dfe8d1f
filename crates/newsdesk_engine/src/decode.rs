use serde::{Deserialize, Deserializer};

use crate::{NewsArticle, NewsPage};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response is not the expected json shape: {0}")]
    InvalidJson(String),
    #[error("response has no articles list")]
    MissingArticles,
    #[error("api reported errors: {0}")]
    ApiErrors(String),
}

#[derive(Debug, Deserialize)]
struct WirePayload {
    #[serde(rename = "totalArticles")]
    total_articles: Option<u64>,
    articles: Option<Vec<WireArticle>>,
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    title: String,
    #[serde(deserialize_with = "null_as_empty")]
    description: String,
    url: String,
    image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<WireSource>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    name: Option<String>,
}

// The key itself is required; only its value may be null.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a response body into a page of articles.
///
/// An `errors` field wins over everything else; otherwise `articles` must be
/// an array of objects with string `title` and `url` and a `description` key.
/// A null `description` decodes as empty.
pub fn decode_articles(bytes: &[u8]) -> Result<NewsPage, DecodeError> {
    let payload: WirePayload =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;

    if let Some(errors) = payload.errors.filter(|value| !value.is_null()) {
        return Err(DecodeError::ApiErrors(describe_errors(&errors)));
    }

    let articles = payload
        .articles
        .ok_or(DecodeError::MissingArticles)?
        .into_iter()
        .map(|wire| NewsArticle {
            title: wire.title,
            description: wire.description,
            url: wire.url,
            image: wire.image.filter(|image| !image.is_empty()),
            source_name: wire.source.and_then(|source| source.name),
            published_at: wire.published_at,
        })
        .collect();

    Ok(NewsPage {
        articles,
        total_articles: payload.total_articles,
    })
}

/// Pull a readable message out of an error payload for logs and status lines.
fn describe_errors(errors: &serde_json::Value) -> String {
    match errors {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(describe_errors)
            .collect::<Vec<_>>()
            .join("; "),
        serde_json::Value::Object(map) => map
            .values()
            .map(describe_errors)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
