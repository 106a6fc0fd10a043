use docchat_core::Msg;

/// Everything the shell loop reacts to, from stdin or from the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Feed a message to the core state machine.
    Core(Msg),
    /// Re-print the current sources panel.
    ShowSources,
    Help,
    /// A slash command nobody knows.
    Unknown(String),
    Quit,
}
