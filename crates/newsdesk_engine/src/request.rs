use url::Url;

use crate::{ApiSettings, FailureKind, FetchError, NewsQuery, NewsRequest};

const SEARCH_PATH: &str = "search";
const HEADLINES_PATH: &str = "top-headlines";

/// Builds the endpoint URL for `request`, including the API key.
pub fn build_request_url(settings: &ApiSettings, request: &NewsRequest) -> Result<Url, FetchError> {
    let mut url = Url::parse(&settings.base_url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

    let endpoint = match request.query {
        NewsQuery::Search { .. } => SEARCH_PATH,
        NewsQuery::TopHeadlines { .. } => HEADLINES_PATH,
    };
    url.path_segments_mut()
        .map_err(|_| FetchError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
        .pop_if_empty()
        .push(endpoint);

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        match &request.query {
            NewsQuery::Search { term } => {
                pairs.append_pair("q", term);
                pairs.append_pair("lang", &settings.lang);
            }
            NewsQuery::TopHeadlines { category } => {
                pairs.append_pair("category", category);
                pairs.append_pair("lang", &settings.lang);
                pairs.append_pair("country", &settings.country);
            }
        }
        pairs.append_pair("max", &settings.page_size.to_string());
        pairs.append_pair("page", &request.page.to_string());
        pairs.append_pair("apikey", &settings.api_key);
    }

    Ok(url)
}

/// Renders `url` for logs with the `apikey` value masked.
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> ApiSettings {
        ApiSettings::with_api_key("k3y")
    }

    #[test]
    fn search_url_encodes_term() {
        let request = NewsRequest {
            query: NewsQuery::Search {
                term: "rust & go".to_string(),
            },
            page: 3,
        };
        let url = build_request_url(&settings(), &request).unwrap();
        assert_eq!(url.path(), "/api/v4/search");
        assert_eq!(
            url.query(),
            Some("q=rust+%26+go&lang=en&max=10&page=3&apikey=k3y")
        );
    }

    #[test]
    fn headlines_url_carries_country() {
        let request = NewsRequest {
            query: NewsQuery::TopHeadlines {
                category: "sports".to_string(),
            },
            page: 1,
        };
        let url = build_request_url(&settings(), &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://gnews.io/api/v4/top-headlines?category=sports&lang=en&country=us&max=10&page=1&apikey=k3y"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let mut settings = settings();
        settings.base_url = "http://localhost:9000/v4/".to_string();
        let request = NewsRequest {
            query: NewsQuery::TopHeadlines {
                category: "world".to_string(),
            },
            page: 2,
        };
        let url = build_request_url(&settings, &request).unwrap();
        assert_eq!(url.path(), "/v4/top-headlines");
    }

    #[test]
    fn redaction_masks_key_only() {
        let request = NewsRequest {
            query: NewsQuery::Search {
                term: "moon".to_string(),
            },
            page: 1,
        };
        let url = build_request_url(&settings(), &request).unwrap();
        let shown = redact_api_key(&url);
        assert!(!shown.contains("k3y"));
        assert!(shown.contains("q=moon"));
        assert!(shown.contains("apikey=***") || shown.contains("apikey=%2A%2A%2A"));
    }
}
