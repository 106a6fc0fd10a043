/// Seeded assistant greeting shown before anything else happens.
pub const ONBOARDING_TEXT: &str =
    "Hi! Add one or more website URLs, then ask me anything based on those resources.";
pub const INGEST_COMPLETE_TEXT: &str = "Ingestion complete. Ask your question!";
pub const INGEST_FAILED_TEXT: &str =
    "Failed to ingest one of the URLs. Please verify and try again.";
pub const ANSWER_FAILED_TEXT: &str = "Sorry, something went wrong while answering.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append-only, insertion-ordered message log.
///
/// There is no way to reach the backing vector mutably; the only mutation is
/// [`Conversation::append`], which extends the log by one whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// A conversation holding only the onboarding greeting.
    pub fn seeded() -> Self {
        Self {
            messages: vec![Message::assistant(ONBOARDING_TEXT)],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::seeded()
    }
}
