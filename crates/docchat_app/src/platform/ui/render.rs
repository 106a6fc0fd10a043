use docchat_core::{AppViewModel, MessageView, Role, SourceView};

use super::constants::*;

/// Turns successive views into terminal lines.
///
/// Remembers what has already been printed so each call only emits what is
/// new: messages the store gained, a busy label when an action starts, and
/// the sources panel when a fresh citation set arrives.
#[derive(Debug, Default)]
pub struct Renderer {
    printed_messages: usize,
    citations_revision: u64,
    ingesting: bool,
    asking: bool,
}

impl Renderer {
    pub fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();

        for message in view.messages_since(self.printed_messages) {
            lines.extend(message_lines(message));
        }
        self.printed_messages = view.messages.len();

        if view.ingesting && !self.ingesting {
            lines.push(status_line(view.ingest_label()));
        }
        if view.asking && !self.asking {
            lines.push(status_line(view.ask_label()));
        }
        self.ingesting = view.ingesting;
        self.asking = view.asking;

        if view.citations_revision != self.citations_revision {
            self.citations_revision = view.citations_revision;
            lines.extend(sources_panel(&view.sources));
        }

        lines
    }
}

pub fn header() -> Vec<String> {
    vec![
        HEADER_TITLE.to_string(),
        HEADER_SUBTITLE.to_string(),
        format!("Type {CMD_HELP} for commands."),
        String::new(),
    ]
}

/// Empty when there is nothing to cite, matching the hidden panel.
pub fn sources_panel(sources: &[SourceView]) -> Vec<String> {
    if sources.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("{SOURCES_TITLE}:")];
    for (index, source) in sources.iter().enumerate() {
        lines.push(format!("  [{}] {}", index + 1, source.label));
        if source.label == source.url {
            lines.push(format!("      {}", source.detail));
        } else {
            lines.push(format!("      {} | {}", source.detail, source.url));
        }
    }
    lines
}

pub fn busy_notice(label: &str) -> String {
    format!("(still busy: {label} Try again when it finishes.)")
}

fn status_line(label: &str) -> String {
    format!("[{label}]")
}

fn message_lines(message: &MessageView) -> Vec<String> {
    let marker = match message.role {
        Role::User => USER_MARKER,
        Role::Assistant => ASSISTANT_MARKER,
    };
    let indent = " ".repeat(marker.chars().count() + 1);
    let mut lines = Vec::new();
    for (index, text) in message.text.split('\n').enumerate() {
        if index == 0 {
            lines.push(format!("{marker} {text}"));
        } else {
            lines.push(format!("{indent}{text}"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use docchat_core::{update, AppState, Msg, Source, ONBOARDING_TEXT};
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
        msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
    }

    #[test]
    fn first_render_prints_greeting_once() {
        let mut renderer = Renderer::default();
        let view = AppState::new().view();

        assert_eq!(renderer.render(&view), vec![format!("bot> {ONBOARDING_TEXT}")]);
        assert!(renderer.render(&view).is_empty());
    }

    #[test]
    fn question_then_answer_with_sources() {
        let mut renderer = Renderer::default();
        let state = AppState::new();
        renderer.render(&state.view());

        let state = apply(
            state,
            vec![Msg::QuestionInputChanged("Q".into()), Msg::AskClicked],
        );
        assert_eq!(
            renderer.render(&state.view()),
            vec!["you> Q".to_string(), "[Thinking…]".to_string()]
        );

        let state = apply(
            state,
            vec![Msg::AnswerReceived {
                answer: "line one\nline two".into(),
                sources: vec![
                    Source {
                        url: "https://a.example.com".into(),
                        title: Some("A".into()),
                        chunk_index: 2,
                        score: 0.75,
                    },
                    Source {
                        url: "https://b.example.com".into(),
                        title: None,
                        chunk_index: 0,
                        score: 1.0,
                    },
                ],
            }],
        );
        assert_eq!(
            renderer.render(&state.view()),
            vec![
                "bot> line one",
                "     line two",
                "Sources:",
                "  [1] A",
                "      chunk #2 • score 0.75 | https://a.example.com",
                "  [2] https://b.example.com",
                "      chunk #0 • score 1",
            ]
        );
    }

    #[test]
    fn ingestion_shows_busy_label_then_status() {
        let mut renderer = Renderer::default();
        let state = AppState::new();
        renderer.render(&state.view());

        let state = apply(
            state,
            vec![
                Msg::UrlsInputChanged("https://a.example.com".into()),
                Msg::IngestClicked,
            ],
        );
        assert_eq!(renderer.render(&state.view()), vec!["[Ingesting…]"]);

        let state = apply(state, vec![Msg::IngestFailed]);
        assert_eq!(
            renderer.render(&state.view()),
            vec!["bot> Failed to ingest one of the URLs. Please verify and try again."]
        );
    }

    #[test]
    fn empty_source_set_prints_no_panel() {
        assert!(sources_panel(&[]).is_empty());
    }
}
