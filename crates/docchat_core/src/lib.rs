//! Docchat core: pure conversation state machine and view-model helpers.
mod citations;
mod conversation;
mod effect;
mod msg;
mod resources;
mod state;
mod update;
mod view_model;

pub use citations::{CitationPanel, Source};
pub use conversation::{
    Conversation, Message, Role, ANSWER_FAILED_TEXT, INGEST_COMPLETE_TEXT, INGEST_FAILED_TEXT,
    ONBOARDING_TEXT,
};
pub use effect::Effect;
pub use msg::Msg;
pub use resources::parse_resource_list;
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, MessageView, SourceView, ASK_BUSY_LABEL, ASK_IDLE_LABEL, INGEST_BUSY_LABEL,
    INGEST_IDLE_LABEL,
};
