//! Newsdesk core: pure query/result state machine and view-model helpers.
mod effect;
mod msg;
mod pagination;
mod query;
mod reveal;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{pagination_range, PageEntry, TOTAL_PAGES};
pub use query::{ActiveFilter, Category, FetchRequest, FilterMode, QueryState, UnknownCategory};
pub use reveal::{Generation, RevealState};
pub use state::{AppState, Article, ErrorKind};
pub use update::update;
pub use view_model::{AppViewModel, ArticleCardView, ResultsStatus};
