/// Main TUI application
///
/// Owns the terminal, the event log and everything drawn on screen. The poll
/// loop reaches it only through the update channel, which is drained here on
/// the UI task before each frame.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use crate::core::{EventLog, LoggingToggle, Severity, UiUpdate};
use crate::screens::Dashboard;

/// Input poll timeout; also bounds how stale a frame can get
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Top-level view currently in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// One-time greeting shown before the dashboard
    Welcome,
    Dashboard,
    Help,
}

pub struct App {
    dashboard: Dashboard,
    event_log: EventLog,
    view: View,
    logging: LoggingToggle,
    recorder_open: bool,
    updates_rx: mpsc::UnboundedReceiver<UiUpdate>,
    should_quit: bool,
}

impl App {
    pub fn new(
        updates_rx: mpsc::UnboundedReceiver<UiUpdate>,
        logging: LoggingToggle,
        recorder_open: bool,
    ) -> Self {
        Self {
            dashboard: Dashboard::new(),
            event_log: EventLog::default(),
            view: View::Welcome,
            logging,
            recorder_open,
            updates_rx,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.drain_updates();

            let view = self.view;
            terminal.draw(|f| self.dashboard.render(f, view, &self.event_log))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(INPUT_POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
    }

    /// Apply every pending update from the poll loop, returning how many
    pub fn drain_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.updates_rx.try_recv() {
            self.apply(update);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::Dashboard(model) => self.dashboard.update_model(model),
            UiUpdate::Unreachable(message) => self.dashboard.update_unreachable(message),
            UiUpdate::Event(entry) => self.event_log.append(entry),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => self.toggle_logging(),
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.view = if self.view == View::Help { View::Dashboard } else { View::Help };
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') if self.view != View::Dashboard => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn toggle_logging(&mut self) {
        let enabled = self.logging.toggle();
        info!(enabled, "CSV logging toggled");

        if enabled && !self.recorder_open {
            self.event_log.record(
                Severity::Warning,
                "CSV logging enabled, but no log file is open (start with --log)",
            );
        } else {
            self.event_log.record(
                Severity::Info,
                format!("CSV logging {}", if enabled { "enabled" } else { "disabled" }),
            );
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_log::EventLogEntry;
    use crate::core::metrics::derive;
    use crate::core::alerts::Thresholds;
    use crate::core::snapshot::RawSnapshot;
    use crate::screens::dashboard::Panel;
    use chrono::Local;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(logging: bool, recorder_open: bool) -> (App, mpsc::UnboundedSender<UiUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(rx, LoggingToggle::new(logging), recorder_open), tx)
    }

    fn online_update() -> UiUpdate {
        let raw = RawSnapshot {
            uptime_s: 100,
            ..Default::default()
        };
        UiUpdate::Dashboard(Box::new(derive(&raw, Local::now(), false, &Thresholds::default())))
    }

    #[test]
    fn test_starts_on_welcome_and_dismisses() {
        let (mut app, _tx) = app_with(false, false);
        assert_eq!(app.view(), View::Welcome);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.view(), View::Dashboard);
    }

    #[test]
    fn test_help_opens_and_closes() {
        let (mut app, _tx) = app_with(false, false);
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('H')));
        assert_eq!(app.view(), View::Help);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.view(), View::Dashboard);

        app.handle_key(key(KeyCode::Char('?')));
        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.view(), View::Dashboard);
    }

    #[test]
    fn test_quit_from_any_view() {
        let (mut app, _tx) = app_with(false, false);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_toggle_logging_flips_shared_state() {
        let (tx, rx) = mpsc::unbounded_channel::<UiUpdate>();
        drop(tx);
        let logging = LoggingToggle::new(false);
        let mut app = App::new(rx, logging.clone(), true);

        app.handle_key(key(KeyCode::Char('l')));
        assert!(logging.is_enabled());
        app.handle_key(key(KeyCode::Char('L')));
        assert!(!logging.is_enabled());

        let messages: Vec<&str> = app.event_log().entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["CSV logging enabled", "CSV logging disabled"]);
    }

    #[test]
    fn test_toggle_without_recorder_warns() {
        let (mut app, _tx) = app_with(false, false);
        app.handle_key(key(KeyCode::Char('l')));
        let entry = app.event_log().entries().last().unwrap();
        assert_eq!(entry.severity, Severity::Warning);
    }

    #[test]
    fn test_failure_then_success_updates_panel() {
        let (mut app, tx) = app_with(false, false);

        tx.send(UiUpdate::Unreachable("DISH UNREACHABLE".to_string())).unwrap();
        tx.send(UiUpdate::Event(EventLogEntry::new(
            Local::now(),
            Severity::Error,
            "Dish appears to be offline!",
        )))
        .unwrap();
        assert_eq!(app.drain_updates(), 2);
        assert_eq!(
            app.dashboard().panel(),
            &Panel::Unreachable("DISH UNREACHABLE".to_string())
        );
        assert_eq!(app.event_log().len(), 1);

        tx.send(online_update()).unwrap();
        assert_eq!(app.drain_updates(), 1);
        assert!(matches!(app.dashboard().panel(), Panel::Live(m) if m.is_online()));
        // The failure entry survives the recovery
        assert_eq!(app.event_log().len(), 1);
    }

    #[test]
    fn test_render_loop_exits_on_quit() {
        let (mut app, tx) = app_with(false, false);
        tx.send(online_update()).unwrap();
        app.handle_key(key(KeyCode::Char('q')));

        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 40)).unwrap();
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(app.run_loop(&mut terminal)).unwrap();
        assert!(matches!(app.dashboard().panel(), Panel::Live(_)));
    }
}
