//! Application state and key handling.

use crossterm::event::KeyCode;
use solo_tictactoe::{GameSession, Outcome, Position, SessionSnapshot};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::input::{digit_position, move_cursor};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// The board and statistics come only from the session's snapshots; the
/// app adds the cursor and a one-line notice.
pub struct App {
    session: GameSession,
    view: watch::Receiver<SessionSnapshot>,
    cursor: Position,
    notice: Option<String>,
    dirty: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        let view = session.subscribe();
        Self {
            session,
            view,
            cursor: Position::Center,
            notice: None,
            dirty: true,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the latest snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        *self.view.borrow()
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the pending notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Status line for the current snapshot.
    pub fn status_message(&self) -> String {
        match self.snapshot().outcome {
            Outcome::InProgress => "Your move (X)".to_string(),
            outcome => format!("{} Press 'n' for a new game.", outcome),
        }
    }

    /// Returns true once per change that needs a redraw.
    pub fn take_redraw(&mut self) -> bool {
        let changed = self.view.has_changed().unwrap_or(false);
        if changed {
            drop(self.view.borrow_and_update());
        }
        std::mem::take(&mut self.dirty) || changed
    }

    /// Forces a redraw, e.g. after a terminal resize.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        self.dirty = true;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('n') => {
                self.session.new_game();
                self.notice = None;
            }
            KeyCode::Char('r') => match self.session.reset_statistics() {
                Ok(()) => self.notice = Some("Statistics reset.".to_string()),
                Err(e) => self.notice = Some(format!("Statistics reset but not saved: {}", e.message)),
            },
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }
        Control::Continue
    }

    fn play(&mut self, pos: Position) {
        match self.session.play(pos.row(), pos.col()) {
            Ok(snapshot) => {
                debug!(position = %pos, outcome = ?snapshot.outcome, "Move applied");
                self.notice = None;
            }
            Err(e) => {
                warn!(position = %pos, error = %e, "Move rejected");
                self.notice = Some(e.to_string());
            }
        }
    }
}
