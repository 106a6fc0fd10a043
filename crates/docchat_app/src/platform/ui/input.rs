use docchat_core::Msg;

use super::constants::*;
use crate::platform::events::AppEvent;

/// Maps one line typed at the prompt to shell events.
///
/// A leading `//` escapes the command prefix: the rest, starting at the second
/// slash, is asked as a question.
pub fn parse_line(line: &str) -> Vec<AppEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if let Some(question) = trimmed.strip_prefix(ESCAPE_PREFIX) {
        return ask(&format!("/{question}"));
    }
    if !trimmed.starts_with('/') {
        return ask(line);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    match command {
        CMD_ADD => vec![
            AppEvent::Core(Msg::UrlsInputChanged(rest.to_string())),
            AppEvent::Core(Msg::IngestClicked),
        ],
        CMD_URLS => vec![AppEvent::Core(Msg::UrlsInputChanged(rest.to_string()))],
        CMD_INGEST => vec![AppEvent::Core(Msg::IngestClicked)],
        CMD_SOURCES => vec![AppEvent::ShowSources],
        CMD_HELP => vec![AppEvent::Help],
        CMD_QUIT | CMD_EXIT => vec![AppEvent::Quit],
        other => vec![AppEvent::Unknown(other.to_string())],
    }
}

fn ask(question: &str) -> Vec<AppEvent> {
    vec![
        AppEvent::Core(Msg::QuestionInputChanged(question.to_string())),
        AppEvent::Core(Msg::AskClicked),
    ]
}
