use crate::{parse_resource_list, AppState, Effect, Message, Msg};
use crate::{ANSWER_FAILED_TEXT, INGEST_COMPLETE_TEXT, INGEST_FAILED_TEXT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlsInputChanged(text) => {
            state.set_urls_input(text);
            Vec::new()
        }
        Msg::QuestionInputChanged(text) => {
            state.set_question_input(text);
            Vec::new()
        }
        Msg::IngestClicked => {
            // The ingest affordance is disabled while a batch is running.
            if state.is_ingesting() {
                return (state, Vec::new());
            }
            let urls = parse_resource_list(state.urls_input());
            if urls.is_empty() {
                return (state, Vec::new());
            }
            state.set_ingesting(true);
            vec![Effect::IngestUrls { urls }]
        }
        Msg::AskClicked => {
            if state.is_asking() || state.question_input().trim().is_empty() {
                return (state, Vec::new());
            }
            // Scope to whatever is typed right now, not what was last ingested.
            let urls = parse_resource_list(state.urls_input());
            let question = state.take_question();
            state.append_message(Message::user(question.clone()));
            state.set_asking(true);
            let urls = if urls.is_empty() { None } else { Some(urls) };
            vec![Effect::Ask { question, urls }]
        }
        Msg::IngestSucceeded => {
            state.append_message(Message::assistant(INGEST_COMPLETE_TEXT));
            state.set_ingesting(false);
            Vec::new()
        }
        Msg::IngestFailed => {
            state.append_message(Message::assistant(INGEST_FAILED_TEXT));
            state.set_ingesting(false);
            Vec::new()
        }
        Msg::AnswerReceived { answer, sources } => {
            state.append_message(Message::assistant(answer));
            state.replace_sources(sources);
            state.set_asking(false);
            Vec::new()
        }
        Msg::AskFailed => {
            state.append_message(Message::assistant(ANSWER_FAILED_TEXT));
            state.set_asking(false);
            Vec::new()
        }
    };

    (state, effects)
}
