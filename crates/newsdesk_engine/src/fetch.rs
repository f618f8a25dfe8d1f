use engine_logging::{engine_debug, engine_warn};
use futures_util::StreamExt;

use crate::decode::{decode_articles, DecodeError};
use crate::request::{build_request_url, redact_api_key};
use crate::{ApiSettings, FailureKind, FetchError, NewsPage, NewsRequest, SettingsError};

/// Source of article pages. The engine runs one `fetch` per request,
/// concurrently, so completions may arrive in any order.
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, request: &NewsRequest) -> Result<NewsPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNewsSource {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestNewsSource {
    pub fn new(settings: ApiSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let client =
            build_client(&settings).map_err(|err| SettingsError::HttpClient(err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

fn build_client(settings: &ApiSettings) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[async_trait::async_trait]
impl NewsSource for ReqwestNewsSource {
    async fn fetch(&self, request: &NewsRequest) -> Result<NewsPage, FetchError> {
        let url = build_request_url(&self.settings, request)?;
        engine_debug!("GET {}", redact_api_key(&url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body usually explains a rejected key or an exhausted quota.
            let detail = match self.read_body(response).await {
                Ok(body) => match decode_articles(&body) {
                    Err(DecodeError::ApiErrors(message)) => message,
                    _ => status.to_string(),
                },
                Err(_) => status.to_string(),
            };
            engine_warn!("news api returned {}: {}", status.as_u16(), detail);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                detail,
            ));
        }

        let body = self.read_body(response).await?;
        decode_articles(&body).map_err(|err| match err {
            DecodeError::ApiErrors(message) => FetchError::new(FailureKind::ApiRejected, message),
            other => FetchError::new(FailureKind::Malformed, other.to_string()),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    // The request url carries the api key.
    let err = err.without_url();
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
