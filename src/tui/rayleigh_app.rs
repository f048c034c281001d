//! Rayleigh TUI application state and logic.
//!
//! Terminal I/O lives in the `rayleigh-tui` binary; everything testable
//! (key handling, ticking, status text) lives here.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::config::RayleighConfig;
use crate::demos::FrameOutcome;
use crate::engine::AnimationSession;
use crate::scene::Scene;

/// Application state for the Rayleigh TUI demo.
#[derive(Debug, Clone)]
pub struct RayleighApp {
    /// Engine and frame clock.
    pub session: AnimationSession,
    /// Outcome of the most recently rendered frame.
    pub last_outcome: Option<FrameOutcome>,
    /// Starts ignored because a run was already active.
    pub ignored_starts: u32,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl RayleighApp {
    /// App with the embedded default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(RayleighConfig::embedded())
    }

    /// App for a specific configuration.
    #[must_use]
    pub fn from_config(config: RayleighConfig) -> Self {
        Self {
            session: AnimationSession::new(config),
            last_outcome: None,
            ignored_starts: 0,
            should_quit: false,
        }
    }

    /// The start trigger.
    pub fn start(&mut self) {
        if self.session.start() {
            self.last_outcome = None;
        } else {
            self.ignored_starts += 1;
        }
    }

    /// Render a frame if one is due.
    ///
    /// Returns `true` when the scene changed.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.session.tick(now) {
            Some(outcome) => {
                self.last_outcome = Some(outcome);
                true
            }
            None => false,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') | KeyCode::Enter => self.start(),
            _ => {}
        }
    }

    /// Current drawables.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        self.session.scene()
    }

    /// One-line status for the footer.
    #[must_use]
    pub fn status_line(&self) -> String {
        let clock = self.session.clock();
        let state = if self.session.is_running() {
            "running"
        } else if clock.runs_started() == 0 {
            "idle"
        } else {
            "done"
        };
        format!(
            "{state} | frame {}/{} | clouds {} | seed {}",
            clock.frames_delivered(),
            clock.total_frames(),
            self.session.regenerations().len(),
            crate::demos::DemoEngine::seed(self.session.engine()),
        )
    }
}

impl Default for RayleighApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> RayleighApp {
        RayleighApp::from_config(RayleighConfig::builder().seed(42).build().expect("config"))
    }

    #[test]
    fn test_new_app_is_idle() {
        let app = app();
        assert!(!app.should_quit);
        assert!(!app.session.is_running());
        assert!(app.scene().is_blank());
        assert!(app.status_line().starts_with("idle"));
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_esc() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_start() {
        let mut app = app();
        app.handle_key(KeyCode::Char('s'));
        assert!(app.session.is_running());
        assert!(app.status_line().starts_with("running"));
    }

    #[test]
    fn test_enter_starts() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert!(app.session.is_running());
    }

    #[test]
    fn test_start_while_running_ignored() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_key(KeyCode::Char('s'));
        assert!(app.update(t0));
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.ignored_starts, 2);
        assert_eq!(app.session.clock().runs_started(), 1);
        assert_eq!(app.session.clock().frames_delivered(), 1);
    }

    #[test]
    fn test_update_without_start_does_nothing() {
        let mut app = app();
        assert!(!app.update(Instant::now()));
        assert!(app.last_outcome.is_none());
    }

    #[test]
    fn test_update_respects_interval() {
        let mut app = app();
        let t0 = Instant::now();
        app.start();
        assert!(app.update(t0));
        assert!(!app.update(t0 + Duration::from_millis(10)));
        assert!(app.update(t0 + Duration::from_millis(60)));
        assert_eq!(app.last_outcome.as_ref().map(|o| o.frame), Some(1));
    }

    #[test]
    fn test_full_run_then_done() {
        let mut app = app();
        let t0 = Instant::now();
        app.start();
        let mut frames = 0;
        for i in 0..200u64 {
            if app.update(t0 + Duration::from_millis(50 * i)) {
                frames += 1;
            }
        }
        assert_eq!(frames, 100);
        assert!(app.status_line().starts_with("done | frame 100/100 | clouds 24"));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.should_quit);
        assert!(!app.session.is_running());
    }

    #[test]
    fn test_default() {
        let app = RayleighApp::default();
        assert!(!app.should_quit);
    }
}
