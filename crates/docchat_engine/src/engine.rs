use std::sync::{mpsc, Arc};
use std::thread;

use docchat_logging::{docchat_error, docchat_warn};

use crate::backend::{Backend, BackendSettings, ReqwestBackend};
use crate::orchestrate::{ask, ingest_all};
use crate::{BackendError, ChatRequest, EngineEvent, FailureKind};

enum EngineCommand {
    Ingest { urls: Vec<String> },
    Ask { request: ChatRequest },
}

impl EngineCommand {
    fn kind(&self) -> CommandKind {
        match self {
            EngineCommand::Ingest { .. } => CommandKind::Ingest,
            EngineCommand::Ask { .. } => CommandKind::Ask,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CommandKind {
    Ingest,
    Ask,
}

impl CommandKind {
    fn failed(self, err: BackendError) -> EngineEvent {
        match self {
            CommandKind::Ingest => EngineEvent::IngestCompleted { result: Err(err) },
            CommandKind::Ask => EngineEvent::ChatCompleted { result: Err(err) },
        }
    }
}

/// Runs backend requests on a dedicated tokio runtime thread.
///
/// Every command yields exactly one event on the receiver returned by the
/// constructor. Commands run as independent tasks, so an ingestion batch and
/// a question can be in flight at the same time.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: BackendSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        Self::with_backend(Arc::new(ReqwestBackend::new(settings)))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    docchat_error!("Failed to start engine runtime: {}", err);
                    // Answer every command with a failure so no flag stays set.
                    while let Ok(command) = cmd_rx.recv() {
                        let guard = CompletionGuard::new(command.kind(), event_tx.clone());
                        drop(guard);
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let guard = CompletionGuard::new(command.kind(), event_tx.clone());
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, guard).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn ingest(&self, urls: Vec<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Ingest { urls });
    }

    pub fn ask(&self, question: impl Into<String>, urls: Option<Vec<String>>) {
        let _ = self.cmd_tx.send(EngineCommand::Ask {
            request: ChatRequest {
                question: question.into(),
                urls,
            },
        });
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand, guard: CompletionGuard) {
    match command {
        EngineCommand::Ingest { urls } => {
            let result = ingest_all(backend, &urls).await;
            guard.complete(EngineEvent::IngestCompleted { result });
        }
        EngineCommand::Ask { request } => {
            let result = ask(backend, &request).await;
            guard.complete(EngineEvent::ChatCompleted { result });
        }
    }
}

/// Sends the completion event for one command.
///
/// Dropped without `complete` (task panicked or was never run), it reports an
/// `Aborted` failure instead, so the caller's in-flight flag is always released.
struct CompletionGuard {
    command: CommandKind,
    event_tx: Option<mpsc::Sender<EngineEvent>>,
}

impl CompletionGuard {
    fn new(command: CommandKind, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            command,
            event_tx: Some(event_tx),
        }
    }

    fn complete(mut self, event: EngineEvent) {
        if let Some(tx) = self.event_tx.take() {
            let _ = tx.send(event);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let Some(tx) = self.event_tx.take() else {
            return;
        };
        docchat_warn!("{:?} command ended without a result", self.command);
        let err = BackendError::new(
            FailureKind::Aborted,
            format!("{:?} command did not complete", self.command),
        );
        let _ = tx.send(self.command.failed(err));
    }
}
