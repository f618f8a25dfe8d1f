use std::fmt;

use crate::pagination::{pagination_range, TOTAL_PAGES};
use crate::query::QueryState;
use crate::reveal::{Generation, RevealState};
use crate::view_model::{AppViewModel, ArticleCardView, ResultsStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub source_name: Option<String>,
    pub published_at: Option<String>,
}

/// Classified fetch failure, stored in state rather than propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request could not be completed (connectivity, DNS, timeout).
    NetworkError,
    /// Non-success status or an error payload from the API.
    ApiError,
    /// Success status but the payload lacks the expected article list.
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NetworkError => write!(f, "network error"),
            ErrorKind::ApiError => write!(f, "news service error"),
            ErrorKind::MalformedResponse => write!(f, "unexpected response from news service"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: QueryState,
    articles: Vec<Article>,
    error: Option<ErrorKind>,
    loading: bool,
    has_result: bool,
    reveal: RevealState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn view(&self) -> AppViewModel {
        let status = if self.loading {
            ResultsStatus::Loading
        } else if !self.articles.is_empty() {
            ResultsStatus::Results
        } else if self.error.is_some() {
            ResultsStatus::Error
        } else if self.has_result {
            ResultsStatus::Empty
        } else {
            ResultsStatus::Idle
        };

        let articles = self
            .articles
            .iter()
            .enumerate()
            .map(|(index, article)| ArticleCardView {
                index,
                title: article.title.clone(),
                description: article.description.clone(),
                url: article.url.clone(),
                host: link_host(&article.url),
                image: article.image.clone(),
                source_name: article.source_name.clone(),
                published_at: article.published_at.clone(),
                revealed: self.reveal.is_revealed(index),
            })
            .collect();

        AppViewModel {
            search_query: self.query.search_query().to_string(),
            category: self.query.category(),
            page: self.query.page(),
            loading: self.loading,
            error: self.error,
            status,
            generation: self.reveal.generation(),
            articles,
            pagination: pagination_range(self.query.page(), TOTAL_PAGES),
            prev_enabled: self.query.page() > 1,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryState {
        self.dirty = true;
        &mut self.query
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
        self.dirty = true;
    }

    pub(crate) fn accept_articles(&mut self, articles: Vec<Article>) -> Generation {
        let generation = self.reveal.reset(articles.len());
        self.articles = articles;
        self.error = None;
        self.loading = false;
        self.has_result = true;
        self.dirty = true;
        generation
    }

    pub(crate) fn accept_error(&mut self, kind: ErrorKind) {
        self.error = Some(kind);
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn reveal_card(&mut self, generation: Generation, index: usize) {
        if self.reveal.reveal(generation, index) {
            self.dirty = true;
        }
    }
}

fn link_host(raw: &str) -> Option<String> {
    url::Url::parse(raw)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.trim_start_matches("www.").to_string()))
}
