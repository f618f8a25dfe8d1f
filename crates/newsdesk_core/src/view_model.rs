use crate::{Category, ErrorKind, Generation, PageEntry};

/// What the results area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsStatus {
    /// No fetch has been accepted yet.
    #[default]
    Idle,
    Loading,
    /// A fetch failed and there is nothing to fall back on.
    Error,
    /// The latest accepted fetch returned no articles.
    Empty,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_query: String,
    pub category: Category,
    pub page: u32,
    pub loading: bool,
    pub error: Option<ErrorKind>,
    pub status: ResultsStatus,
    pub generation: Generation,
    pub articles: Vec<ArticleCardView>,
    pub pagination: Vec<PageEntry>,
    pub prev_enabled: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCardView {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub url: String,
    pub host: Option<String>,
    pub image: Option<String>,
    pub source_name: Option<String>,
    pub published_at: Option<String>,
    pub revealed: bool,
}
