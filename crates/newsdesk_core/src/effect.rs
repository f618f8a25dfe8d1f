#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch articles for this request. Superseded requests are not cancelled.
    IssueFetch(crate::FetchRequest),
    /// Replace the viewport observation session with one over `count` fresh cards.
    ObserveCards {
        generation: crate::Generation,
        count: usize,
    },
}
