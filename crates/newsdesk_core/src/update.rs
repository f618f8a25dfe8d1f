use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => issue_fetch(&mut state),
        Msg::SearchChanged(text) => {
            state.query_mut().set_search(text);
            issue_fetch(&mut state)
        }
        Msg::CategorySelected(category) => {
            state.query_mut().set_category(category);
            issue_fetch(&mut state)
        }
        Msg::PageSelected(page) => {
            if page == 0 {
                return (state, Vec::new());
            }
            state.query_mut().set_page(page);
            issue_fetch(&mut state)
        }
        Msg::PrevPageClicked => {
            if state.query().page() <= 1 {
                return (state, Vec::new());
            }
            state.query_mut().prev_page();
            issue_fetch(&mut state)
        }
        Msg::NextPageClicked => {
            state.query_mut().next_page();
            issue_fetch(&mut state)
        }
        Msg::FetchCompleted { request, result } => {
            // Reconcile against what the user wants now, not against issue order.
            if request != state.query().fetch_request() {
                return (state, Vec::new());
            }
            match result {
                Ok(articles) => {
                    let count = articles.len();
                    let generation = state.accept_articles(articles);
                    vec![Effect::ObserveCards { generation, count }]
                }
                Err(kind) => {
                    state.accept_error(kind);
                    Vec::new()
                }
            }
        }
        Msg::CardEnteredViewport { generation, index } => {
            state.reveal_card(generation, index);
            Vec::new()
        }
    };

    (state, effects)
}

fn issue_fetch(state: &mut AppState) -> Vec<Effect> {
    state.begin_loading();
    vec![Effect::IssueFetch(state.query().fetch_request())]
}
