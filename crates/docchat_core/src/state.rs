use crate::view_model::{AppViewModel, MessageView, SourceView};
use crate::{CitationPanel, Conversation, Message, Source};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    urls_input: String,
    question_input: String,
    conversation: Conversation,
    citations: CitationPanel,
    ingesting: bool,
    asking: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            messages: self
                .conversation
                .messages()
                .iter()
                .map(MessageView::from_message)
                .collect(),
            sources: self
                .citations
                .sources()
                .iter()
                .map(SourceView::from_source)
                .collect(),
            citations_revision: self.citations.revision(),
            urls_input: self.urls_input.clone(),
            question_input: self.question_input.clone(),
            ingesting: self.ingesting,
            asking: self.asking,
            dirty: self.dirty,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn sources(&self) -> &[Source] {
        self.citations.sources()
    }

    pub fn urls_input(&self) -> &str {
        &self.urls_input
    }

    pub fn question_input(&self) -> &str {
        &self.question_input
    }

    pub fn is_ingesting(&self) -> bool {
        self.ingesting
    }

    pub fn is_asking(&self) -> bool {
        self.asking
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_urls_input(&mut self, text: String) {
        if self.urls_input != text {
            self.urls_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_question_input(&mut self, text: String) {
        if self.question_input != text {
            self.question_input = text;
            self.mark_dirty();
        }
    }

    /// Empties the question input and returns what it held.
    pub(crate) fn take_question(&mut self) -> String {
        self.mark_dirty();
        std::mem::take(&mut self.question_input)
    }

    pub(crate) fn append_message(&mut self, message: Message) {
        self.conversation.append(message);
        self.mark_dirty();
    }

    pub(crate) fn replace_sources(&mut self, sources: Vec<Source>) {
        self.citations.replace(sources);
        self.mark_dirty();
    }

    pub(crate) fn set_ingesting(&mut self, ingesting: bool) {
        if self.ingesting != ingesting {
            self.ingesting = ingesting;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_asking(&mut self, asking: bool) {
        if self.asking != asking {
            self.asking = asking;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
