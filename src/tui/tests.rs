//! Integration tests for the TUI module.

use super::rayleigh_app::RayleighApp;
use crate::config::RayleighConfig;
use crate::demos::Phase;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

fn seeded(seed: u64) -> RayleighApp {
    RayleighApp::from_config(RayleighConfig::builder().seed(seed).build().expect("config"))
}

#[test]
fn test_rayleigh_app_lifecycle() {
    let mut app = seeded(42);
    let t0 = Instant::now();

    // Idle until triggered
    assert!(!app.update(t0));
    assert!(app.scene().is_blank());

    app.handle_key(KeyCode::Char('s'));
    for i in 0..40u64 {
        app.update(t0 + Duration::from_millis(50 * i));
    }
    let outcome = app.last_outcome.clone().expect("frame rendered");
    assert_eq!(outcome.frame, 39);
    assert_eq!(outcome.phase, Phase::Scatter);
    assert!(!app.scene().cloud.is_empty());

    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_restart_after_completion_clears_scene() {
    let mut app = seeded(7);
    app.start();
    while app.session.advance().is_some() {}
    assert!(!app.scene().is_blank());

    app.handle_key(KeyCode::Enter);
    assert!(app.scene().is_blank());
    assert!(app.session.is_running());
    assert_eq!(app.session.clock().runs_started(), 2);
    assert_eq!(app.ignored_starts, 0);
}

#[test]
fn test_same_seed_apps_agree() {
    let mut a = seeded(3);
    let mut b = seeded(3);
    a.start();
    b.start();
    while a.session.advance().is_some() {}
    while b.session.advance().is_some() {}
    assert_eq!(a.scene(), b.scene());
}
