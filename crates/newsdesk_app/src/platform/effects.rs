use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_info, engine_warn};
use newsdesk_core::{Article, Effect, ErrorKind, FetchRequest, FilterMode, Msg};
use newsdesk_engine::viewport::ViewportAnimator;
use newsdesk_engine::{
    EngineError, EngineEvent, EngineHandle, FailureKind, NewsArticle, NewsQuery, NewsRequest,
    NewsSource,
};

use super::app::AppEvent;
use super::ui::viewport::TerminalViewport;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn NewsSource>, event_tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::spawn(source)?;
        spawn_event_loop(events, event_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>, animator: &mut ViewportAnimator<TerminalViewport>) {
        for effect in effects {
            match effect {
                Effect::IssueFetch(request) => {
                    engine_info!(
                        "IssueFetch mode={:?} term={:?} page={}",
                        request.mode,
                        request.term,
                        request.page
                    );
                    self.engine.enqueue(to_news_request(&request));
                }
                Effect::ObserveCards { generation, count } => {
                    engine_debug!("ObserveCards generation={} count={}", generation, count);
                    animator.observe(generation, count);
                    animator.port_mut().scroll_to(0);
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::FetchCompleted { request, result } => Msg::FetchCompleted {
                    request: to_fetch_request(&request),
                    result: match result {
                        Ok(page) => Ok(page.articles.into_iter().map(map_article).collect()),
                        Err(err) => {
                            engine_warn!("Fetch for page {} failed: {}", request.page, err);
                            Err(map_failure(&err.kind))
                        }
                    },
                },
            };
            if event_tx.send(AppEvent::Msg(msg)).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn to_news_request(request: &FetchRequest) -> NewsRequest {
    let query = match request.mode {
        FilterMode::Search => NewsQuery::Search {
            term: request.term.clone(),
        },
        FilterMode::Category => NewsQuery::TopHeadlines {
            category: request.term.clone(),
        },
    };
    NewsRequest {
        query,
        page: request.page,
    }
}

pub(crate) fn to_fetch_request(request: &NewsRequest) -> FetchRequest {
    let (mode, term) = match &request.query {
        NewsQuery::Search { term } => (FilterMode::Search, term.clone()),
        NewsQuery::TopHeadlines { category } => (FilterMode::Category, category.clone()),
    };
    FetchRequest {
        mode,
        term,
        page: request.page,
    }
}

fn map_article(article: NewsArticle) -> Article {
    Article {
        title: article.title,
        description: article.description,
        url: article.url,
        image: article.image,
        source_name: article.source_name,
        published_at: article.published_at,
    }
}

pub(crate) fn map_failure(kind: &FailureKind) -> ErrorKind {
    match kind {
        FailureKind::InvalidUrl | FailureKind::Network | FailureKind::Timeout => {
            ErrorKind::NetworkError
        }
        FailureKind::HttpStatus(_) | FailureKind::ApiRejected => ErrorKind::ApiError,
        FailureKind::Malformed | FailureKind::TooLarge { .. } => ErrorKind::MalformedResponse,
    }
}
