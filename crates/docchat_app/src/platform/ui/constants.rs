pub const HEADER_TITLE: &str = "Ask anything from your resources";
pub const HEADER_SUBTITLE: &str = "Provide URLs to websites or docs. \
    I'll read them, understand key points, and answer with citations.";

pub const USER_MARKER: &str = "you>";
pub const ASSISTANT_MARKER: &str = "bot>";
pub const SOURCES_TITLE: &str = "Sources";

pub const CMD_ADD: &str = "/add";
pub const CMD_URLS: &str = "/urls";
pub const CMD_INGEST: &str = "/ingest";
pub const CMD_SOURCES: &str = "/sources";
pub const CMD_HELP: &str = "/help";
pub const CMD_QUIT: &str = "/quit";
pub const CMD_EXIT: &str = "/exit";
/// Starts a question that itself begins with `/`.
pub const ESCAPE_PREFIX: &str = "//";

pub const HELP_LINES: &[&str] = &[
    "/add <urls>    set the resource list and ingest it",
    "/urls <urls>   set the resource list only (scopes later questions)",
    "/ingest        ingest the current resource list",
    "/sources       show the sources of the last answer",
    "/help          show this help",
    "/quit          leave",
    "//<text>       ask a question that starts with /",
    "anything else  ask a question",
];
