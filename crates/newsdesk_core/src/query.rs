use std::fmt;
use std::str::FromStr;

/// Headline categories accepted by the top-headlines endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    General,
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::General,
        Category::World,
        Category::Nation,
        Category::Business,
        Category::Technology,
        Category::Entertainment,
        Category::Sports,
        Category::Science,
        Category::Health,
    ];

    /// Wire name, as sent in the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::World => "world",
            Category::Nation => "nation",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Science => "science",
            Category::Health => "health",
        }
    }

    /// Capitalized label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::World => "World",
            Category::Nation => "Nation",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
            Category::Science => "Science",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|cat| cat.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Search,
    Category,
}

/// Whichever of search text or category currently governs the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveFilter {
    pub mode: FilterMode,
    pub term: String,
}

/// Projection of [`QueryState`] at the moment a fetch is issued.
///
/// Two requests are the same logical fetch iff they compare equal; responses
/// are reconciled against the current state's projection with `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub mode: FilterMode,
    pub term: String,
    pub page: u32,
}

/// The user's current filter intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_query: String,
    category: Category,
    page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: Category::General,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Sets the search text and returns to page 1. The category is left
    /// dormant and takes over again once the text is cleared.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
        self.page = 1;
    }

    /// Selects a category, clearing any search text, and returns to page 1.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.search_query.clear();
        self.page = 1;
    }

    /// Jumps to `page`. Returns `false` and leaves state untouched for page 0.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 {
            return false;
        }
        self.page = page;
        true
    }

    /// Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn active_filter(&self) -> ActiveFilter {
        if self.search_query.is_empty() {
            ActiveFilter {
                mode: FilterMode::Category,
                term: self.category.as_str().to_string(),
            }
        } else {
            ActiveFilter {
                mode: FilterMode::Search,
                term: self.search_query.clone(),
            }
        }
    }

    pub fn fetch_request(&self) -> FetchRequest {
        let ActiveFilter { mode, term } = self.active_filter();
        FetchRequest {
            mode,
            term,
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_dormant_category() {
        let mut query = QueryState::new();
        query.set_category(Category::Sports);
        query.set_search("rust");
        assert_eq!(query.category(), Category::Sports);
        assert_eq!(query.active_filter().mode, FilterMode::Search);

        query.set_search("");
        assert_eq!(
            query.active_filter(),
            ActiveFilter {
                mode: FilterMode::Category,
                term: "sports".to_string(),
            }
        );
    }

    #[test]
    fn page_navigation_leaves_filters_alone() {
        let mut query = QueryState::new();
        query.set_search("climate");
        assert!(query.set_page(4));
        assert_eq!(query.search_query(), "climate");
        assert_eq!(query.page(), 4);

        assert!(!query.set_page(0));
        assert_eq!(query.page(), 4);
    }

    #[test]
    fn prev_page_stops_at_one() {
        let mut query = QueryState::new();
        assert!(!query.prev_page());
        query.next_page();
        assert!(query.prev_page());
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Technology".parse::<Category>(), Ok(Category::Technology));
        assert_eq!(" health ".parse::<Category>(), Ok(Category::Health));
        assert!("weather".parse::<Category>().is_err());
    }
}
