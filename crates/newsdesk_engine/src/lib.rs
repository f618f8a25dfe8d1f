//! Newsdesk engine: news API access, async fetch execution, and viewport sessions.
mod decode;
mod engine;
mod fetch;
mod request;
mod settings;
mod types;
pub mod viewport;

pub use decode::{decode_articles, DecodeError};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{NewsSource, ReqwestNewsSource};
pub use request::{build_request_url, redact_api_key};
pub use settings::{
    ApiSettings, SettingsError, DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_LANG,
    DEFAULT_PAGE_SIZE,
};
pub use types::{EngineEvent, FailureKind, FetchError, NewsArticle, NewsPage, NewsQuery, NewsRequest};
