use std::sync::mpsc;
use std::thread;

use docchat_core::{Effect, Msg, Source};
use docchat_engine::{BackendSettings, EngineEvent, EngineHandle, SourceRecord};
use docchat_logging::{docchat_info, docchat_warn};

use super::events::AppEvent;

/// Hands core effects to the engine and feeds engine results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: BackendSettings, msg_tx: mpsc::Sender<AppEvent>) -> Self {
        let (engine, events) = EngineHandle::new(settings);
        spawn_event_loop(events, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IngestUrls { urls } => {
                    docchat_info!("IngestUrls count={}", urls.len());
                    self.engine.ingest(urls);
                }
                Effect::Ask { question, urls } => {
                    docchat_info!(
                        "Ask question_len={} scoped={}",
                        question.len(),
                        urls.as_ref().map_or(0, Vec::len)
                    );
                    self.engine.ask(question, urls);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(AppEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

/// Turns an engine result into the completion message the core expects.
///
/// Failure detail stays in the log; the conversation only gets the generic text.
pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::IngestCompleted { result: Ok(count) } => {
            docchat_info!("Ingestion batch complete count={}", count);
            Msg::IngestSucceeded
        }
        EngineEvent::IngestCompleted { result: Err(err) } => {
            docchat_warn!("Ingestion batch failed: {}", err);
            Msg::IngestFailed
        }
        EngineEvent::ChatCompleted { result: Ok(response) } => Msg::AnswerReceived {
            answer: response.answer,
            sources: response
                .sources
                .unwrap_or_default()
                .into_iter()
                .map(map_source)
                .collect(),
        },
        EngineEvent::ChatCompleted { result: Err(err) } => {
            docchat_warn!("Question failed: {}", err);
            Msg::AskFailed
        }
    }
}

fn map_source(record: SourceRecord) -> Source {
    Source {
        url: record.url,
        title: record.title,
        chunk_index: record.chunk_index,
        score: record.score,
    }
}

#[cfg(test)]
mod tests {
    use docchat_engine::{ChatResponse, FailureKind};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ingest_results_map_to_completion_messages() {
        assert_eq!(
            map_event(EngineEvent::IngestCompleted { result: Ok(3) }),
            Msg::IngestSucceeded
        );
        let failure = docchat_engine::BackendError {
            kind: FailureKind::HttpStatus(500),
            message: "500 Internal Server Error".into(),
        };
        assert_eq!(
            map_event(EngineEvent::IngestCompleted { result: Err(failure) }),
            Msg::IngestFailed
        );
    }

    #[test]
    fn chat_response_maps_sources_in_order() {
        let response = ChatResponse {
            answer: "X".into(),
            sources: Some(vec![
                SourceRecord {
                    url: "s1".into(),
                    title: None,
                    chunk_index: 0,
                    score: 0.9,
                },
                SourceRecord {
                    url: "s2".into(),
                    title: Some("Two".into()),
                    chunk_index: 7,
                    score: 0.1,
                },
            ]),
        };

        let msg = map_event(EngineEvent::ChatCompleted { result: Ok(response) });

        assert_eq!(
            msg,
            Msg::AnswerReceived {
                answer: "X".into(),
                sources: vec![
                    Source {
                        url: "s1".into(),
                        title: None,
                        chunk_index: 0,
                        score: 0.9,
                    },
                    Source {
                        url: "s2".into(),
                        title: Some("Two".into()),
                        chunk_index: 7,
                        score: 0.1,
                    },
                ],
            }
        );
    }

    #[test]
    fn missing_sources_become_empty_list() {
        let response = ChatResponse {
            answer: "X".into(),
            sources: None,
        };
        assert_eq!(
            map_event(EngineEvent::ChatCompleted { result: Ok(response) }),
            Msg::AnswerReceived {
                answer: "X".into(),
                sources: Vec::new(),
            }
        );
    }
}
