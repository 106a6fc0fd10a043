use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use docchat_core::{update, AppState, Msg};
use docchat_logging::{docchat_debug, docchat_error, docchat_info, docchat_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::events::AppEvent;
use super::logging;
use super::ui;
use super::ui::render::Renderer;

pub fn run_app() -> Result<()> {
    let config = AppConfig::from_process_env().context("loading configuration")?;
    logging::initialize(config.log_destination, config.log_level());
    docchat_info!(
        "Starting docchat backend={} config={:?}",
        config.backend.base_url,
        config.source_file
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.backend.clone(), event_tx.clone());
    spawn_stdin_reader(event_tx);

    let mut shell = Shell::new(runner, io::stdout());
    shell.write_lines(&ui::render::header())?;
    shell.render()?;

    while let Ok(event) = event_rx.recv() {
        if !shell.handle_event(event)? {
            break;
        }
    }

    docchat_info!("Leaving docchat");
    Ok(())
}

/// Reads stdin on its own thread; EOF quits.
fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        forward_input(stdin.lock(), &event_tx);
        let _ = event_tx.send(AppEvent::Quit);
    });
}

/// Forwards each input line as shell events until EOF or a read error.
///
/// Lines are decoded lossily; a stray non-UTF-8 byte becomes U+FFFD instead of
/// ending the session.
fn forward_input<R: BufRead>(mut reader: R, event_tx: &mpsc::Sender<AppEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                docchat_error!("Failed to read input: {}", err);
                return;
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            docchat_warn!("Input line was not valid UTF-8; replaced invalid bytes");
        }
        let line = line.trim_end_matches(['\n', '\r']);
        for event in ui::input::parse_line(line) {
            if event_tx.send(event).is_err() {
                return;
            }
        }
    }
}

/// Owns the state and the terminal. All state changes happen here, one event at a time.
struct Shell<W: Write> {
    state: AppState,
    renderer: Renderer,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::default(),
            runner,
            out,
        }
    }

    /// Returns `Ok(false)` when the shell should stop.
    fn handle_event(&mut self, event: AppEvent) -> Result<bool> {
        match event {
            AppEvent::Core(msg) => self.dispatch_msg(msg)?,
            AppEvent::ShowSources => {
                let panel = ui::render::sources_panel(&self.state.view().sources);
                if panel.is_empty() {
                    self.write_lines(&["No sources yet.".to_string()])?;
                } else {
                    self.write_lines(&panel)?;
                }
            }
            AppEvent::Help => {
                let lines: Vec<String> =
                    ui::constants::HELP_LINES.iter().map(|l| l.to_string()).collect();
                self.write_lines(&lines)?;
            }
            AppEvent::Unknown(command) => {
                self.write_lines(&[format!(
                    "Unknown command {command}. Type {} for commands, or start with {} to ask it.",
                    ui::constants::CMD_HELP,
                    ui::constants::ESCAPE_PREFIX
                )])?;
            }
            AppEvent::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> Result<()> {
        // Actions are disabled while their own request is outstanding.
        let view = self.state.view();
        match msg {
            Msg::IngestClicked if !view.ingest_enabled() => {
                return self.write_lines(&[ui::render::busy_notice(view.ingest_label())]);
            }
            Msg::AskClicked if !view.ask_enabled() => {
                return self.write_lines(&[ui::render::busy_notice(view.ask_label())]);
            }
            _ => {}
        }

        docchat_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        if self.state.consume_dirty() {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let lines = self.renderer.render(&self.state.view());
        self.write_lines(&lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use docchat_core::{INGEST_FAILED_TEXT, ONBOARDING_TEXT};
    use docchat_engine::BackendSettings;

    use super::*;

    fn shell() -> (Shell<Vec<u8>>, mpsc::Receiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        // Nothing listens on the discard port, so every request fails fast.
        let settings = BackendSettings::new("http://127.0.0.1:9");
        let runner = EffectRunner::new(settings, event_tx);
        (Shell::new(runner, Vec::new()), event_rx)
    }

    fn output(shell: &Shell<Vec<u8>>) -> String {
        String::from_utf8(shell.out.clone()).unwrap()
    }

    fn forwarded(input: &[u8]) -> Vec<AppEvent> {
        let (event_tx, event_rx) = mpsc::channel();
        forward_input(input, &event_tx);
        drop(event_tx);
        event_rx.iter().collect()
    }

    #[test]
    fn invalid_utf8_line_is_asked_and_reading_continues() {
        docchat_logging::initialize_for_tests();
        let events = forwarded(b"caf\xe9 question?\nsecond question\r\n");

        assert_eq!(
            events,
            vec![
                AppEvent::Core(Msg::QuestionInputChanged("caf\u{FFFD} question?".into())),
                AppEvent::Core(Msg::AskClicked),
                AppEvent::Core(Msg::QuestionInputChanged("second question".into())),
                AppEvent::Core(Msg::AskClicked),
            ]
        );
    }

    #[test]
    fn last_line_without_newline_is_forwarded() {
        assert_eq!(forwarded(b"/ingest"), vec![AppEvent::Core(Msg::IngestClicked)]);
        assert!(forwarded(b"").is_empty());
    }

    #[test]
    fn quit_stops_and_help_continues() {
        let (mut shell, _events) = shell();
        assert!(shell.handle_event(AppEvent::Help).unwrap());
        assert!(output(&shell).contains("/add <urls>"));
        assert!(!shell.handle_event(AppEvent::Quit).unwrap());
    }

    #[test]
    fn unknown_command_points_at_escape() {
        let (mut shell, _events) = shell();
        assert!(shell.handle_event(AppEvent::Unknown("/etc/hosts:".into())).unwrap());
        let text = output(&shell);
        assert!(text.contains("Unknown command /etc/hosts:."));
        assert!(text.contains("start with // to ask it"));
    }

    #[test]
    fn sources_command_without_answer_says_so() {
        let (mut shell, _events) = shell();
        shell.handle_event(AppEvent::ShowSources).unwrap();
        assert_eq!(output(&shell), "No sources yet.\n");
    }

    #[test]
    fn failed_ingestion_round_trip_through_engine() {
        docchat_logging::initialize_for_tests();
        let (mut shell, events) = shell();
        shell.render().unwrap();

        for line in ["/add https://a.example.com https://b.example.com", "/ingest"] {
            for event in ui::input::parse_line(line) {
                shell.handle_event(event).unwrap();
            }
        }
        assert!(shell.state.is_ingesting());

        let completion = events
            .recv_timeout(Duration::from_secs(10))
            .expect("engine reports completion");
        assert_eq!(completion, AppEvent::Core(Msg::IngestFailed));
        shell.handle_event(completion).unwrap();

        assert!(!shell.state.is_ingesting());
        let text = output(&shell);
        assert!(text.starts_with(&format!("bot> {ONBOARDING_TEXT}\n")));
        assert_eq!(text.matches("[Ingesting…]").count(), 1);
        assert!(text.contains("still busy: Ingesting…"));
        assert!(text.ends_with(&format!("bot> {INGEST_FAILED_TEXT}\n")));
    }
}
