use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("api key is missing or empty")]
    MissingApiKey,
    #[error("invalid base url {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Connection settings for the news API.
///
/// Timeouts default to `None`, which leaves them to the HTTP client.
#[derive(Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: String,
    pub lang: String,
    pub country: String,
    pub page_size: u32,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl ApiSettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            lang: DEFAULT_LANG.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 2 * 1024 * 1024,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        if self.page_size == 0 {
            return Err(SettingsError::InvalidPageSize);
        }
        let parsed = Url::parse(&self.base_url).map_err(|err| SettingsError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(SettingsError::InvalidBaseUrl {
                url: self.base_url.clone(),
                message: "url cannot be a base".to_string(),
            });
        }
        Ok(())
    }
}

// Hand-written so the key never reaches a log line.
impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("lang", &self.lang)
            .field("country", &self.country)
            .field("page_size", &self.page_size)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_with_key() {
        let settings = ApiSettings::with_api_key("secret");
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.page_size, 10);
        assert!(settings.request_timeout.is_none());
    }

    #[test]
    fn blank_key_is_rejected() {
        let settings = ApiSettings::with_api_key("  ");
        assert_eq!(settings.validate(), Err(SettingsError::MissingApiKey));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let mut settings = ApiSettings::with_api_key("secret");
        settings.base_url = "not a url".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidBaseUrl { .. })
        ));

        settings.base_url = "mailto:news@example.com".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn debug_output_hides_key() {
        let settings = ApiSettings::with_api_key("top-secret");
        assert!(!format!("{settings:?}").contains("top-secret"));
    }
}
