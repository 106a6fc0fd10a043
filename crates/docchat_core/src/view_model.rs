use crate::{Message, Role, Source};

pub const INGEST_IDLE_LABEL: &str = "Add resources";
pub const INGEST_BUSY_LABEL: &str = "Ingesting…";
pub const ASK_IDLE_LABEL: &str = "Ask";
pub const ASK_BUSY_LABEL: &str = "Thinking…";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub messages: Vec<MessageView>,
    pub sources: Vec<SourceView>,
    pub citations_revision: u64,
    pub urls_input: String,
    pub question_input: String,
    pub ingesting: bool,
    pub asking: bool,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn ingest_label(&self) -> &'static str {
        if self.ingesting {
            INGEST_BUSY_LABEL
        } else {
            INGEST_IDLE_LABEL
        }
    }

    pub fn ask_label(&self) -> &'static str {
        if self.asking {
            ASK_BUSY_LABEL
        } else {
            ASK_IDLE_LABEL
        }
    }

    pub fn ingest_enabled(&self) -> bool {
        !self.ingesting
    }

    pub fn ask_enabled(&self) -> bool {
        !self.asking
    }

    /// Messages appended after the first `seen` ones.
    pub fn messages_since(&self, seen: usize) -> &[MessageView] {
        self.messages.get(seen..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub role: Role,
    pub text: String,
}

impl MessageView {
    pub(crate) fn from_message(message: &Message) -> Self {
        Self {
            role: message.role(),
            text: message.content().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    pub label: String,
    pub url: String,
    pub detail: String,
}

impl SourceView {
    pub(crate) fn from_source(source: &Source) -> Self {
        Self {
            label: source.label().to_string(),
            url: source.url.clone(),
            detail: format!("chunk #{} • score {}", source.chunk_index, source.score),
        }
    }
}
