use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::{BackendError, ChatRequest, ChatResponse, FailureKind, IngestRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    /// Scheme, host and optional path prefix the endpoint paths are appended to.
    pub base_url: String,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Registers one URL for indexing. Any 2xx is success; the body is ignored.
    async fn ingest(&self, url: &str) -> Result<(), BackendError>;

    /// Asks one question. Any non-2xx is a failure regardless of body.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// No request timeout is configured; the transport default applies.
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, BackendError> {
        let endpoint = self.settings.endpoint(path);
        let url = reqwest::Url::parse(&endpoint).map_err(|err| {
            BackendError::new(FailureKind::InvalidUrl, format!("{endpoint}: {err}"))
        })?;
        let payload = serde_json::to_vec(body)
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn ingest(&self, url: &str) -> Result<(), BackendError> {
        let request = IngestRequest {
            url: url.to_string(),
        };
        self.post_json("/ingest", &request).await?;
        Ok(())
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        let response = self.post_json("/chat", request).await?;
        let body = response
            .bytes()
            .await
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        serde_json::from_slice(&body)
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))
    }
}
