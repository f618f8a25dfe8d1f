#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Shell finished setup; load the default headlines.
    SessionStarted,
    /// User edited the search box.
    SearchChanged(String),
    /// User picked a category from the selector.
    CategorySelected(crate::Category),
    /// User clicked a page number. Re-selecting the current page refetches it.
    PageSelected(u32),
    PrevPageClicked,
    NextPageClicked,
    /// Engine finished a fetch, successfully or not.
    FetchCompleted {
        request: crate::FetchRequest,
        result: Result<Vec<crate::Article>, crate::ErrorKind>,
    },
    /// A card crossed the reveal threshold in the viewport.
    CardEnteredViewport {
        generation: crate::Generation,
        index: usize,
    },
}
