//! Docchat engine: backend contracts, request orchestration and effect execution.
mod backend;
mod engine;
mod orchestrate;
mod types;

pub use backend::{Backend, BackendSettings, ReqwestBackend};
pub use engine::EngineHandle;
pub use orchestrate::{ask, ingest_all};
pub use types::{
    BackendError, ChatRequest, ChatResponse, EngineEvent, FailureKind, IngestRequest, SourceRecord,
};
