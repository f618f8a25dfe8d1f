use std::fmt;

/// Which endpoint a request targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NewsQuery {
    /// Full-text search.
    Search { term: String },
    /// Top headlines for a category.
    TopHeadlines { category: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewsRequest {
    pub query: NewsQuery,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub source_name: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsPage {
    pub articles: Vec<NewsArticle>,
    /// Total matches reported by the API, when present.
    pub total_articles: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Emitted once per enqueued request, in completion order.
    FetchCompleted {
        request: NewsRequest,
        result: Result<NewsPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    /// 2xx response carrying an `errors` payload.
    ApiRejected,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Malformed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::ApiRejected => write!(f, "api rejected request"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Malformed => write!(f, "malformed response"),
        }
    }
}
