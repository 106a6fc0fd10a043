use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /ingest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    pub url: String,
}

/// Body of `POST /chat`.
///
/// `urls` is left out of the JSON entirely when `None`; the backend reads a
/// missing field as "search everything", which an empty list would not mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<SourceRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    pub chunk_index: i64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// An ingestion batch finished. `Ok` carries the number of URLs accepted.
    IngestCompleted { result: Result<usize, BackendError> },
    /// A chat request finished.
    ChatCompleted {
        result: Result<ChatResponse, BackendError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Network,
    Decode,
    /// The task running the request ended without reporting a result.
    Aborted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Aborted => write!(f, "aborted"),
        }
    }
}
