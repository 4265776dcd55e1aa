use crate::pager::{Page, PageRequest};
use crate::retry::{with_retry_if, RetryConfig};
use crate::server::USERS_PATH;
use crate::source::{FetchError, UserSource};
use crate::user::User;
use tracing::debug;

/// HTTP client for the users API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    async fn fetch_once(&self, request: PageRequest) -> Result<Page<User>, FetchError> {
        let url = self.users_url();
        let response = self
            .client
            .get(&url)
            .query(&[("page", request.page), ("size", request.size.get())])
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { url, source })?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl UserSource for ApiClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<User>, FetchError> {
        debug!(
            "Fetching users page {} (size {})",
            request.page, request.size
        );
        with_retry_if(
            &self.retry,
            "Users API",
            || self.fetch_once(request),
            FetchError::is_retryable,
        )
        .await
    }
}
