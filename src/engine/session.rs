//! Animation session: one engine, one clock, one run at a time.
//!
//! The session is the explicit owner of all animation state. Hosts call
//! [`AnimationSession::start`] on the user trigger and
//! [`AnimationSession::tick`] from their event loop; the session resets the
//! scene before each run and feeds frames to the engine in order.

use std::time::Instant;

use crate::config::RayleighConfig;
use crate::demos::rayleigh::{FrameOutcome, RayleighEngine};
use crate::demos::DemoEngine;
use crate::engine::clock::AnimationClock;
use crate::renderers::DrawSink;
use crate::scene::Scene;

/// A Rayleigh animation bound to its frame clock.
#[derive(Debug, Clone)]
pub struct AnimationSession {
    engine: RayleighEngine,
    clock: AnimationClock,
    regenerations: Vec<u32>,
}

impl AnimationSession {
    /// Session for the given configuration.
    #[must_use]
    pub fn new(config: RayleighConfig) -> Self {
        Self::from_engine(RayleighEngine::from_config(config))
    }

    /// Session around an existing engine.
    #[must_use]
    pub fn from_engine(engine: RayleighEngine) -> Self {
        let config = engine.config();
        let clock = AnimationClock::new(config.interval(), config.animation.total_frames);
        Self {
            engine,
            clock,
            regenerations: Vec::new(),
        }
    }

    /// The frame renderer.
    #[must_use]
    pub const fn engine(&self) -> &RayleighEngine {
        &self.engine
    }

    /// The frame clock.
    #[must_use]
    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Current drawables.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        self.engine.scene()
    }

    /// Whether a run is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Frames on which the cloud was regenerated in the current run.
    #[must_use]
    pub fn regenerations(&self) -> &[u32] {
        &self.regenerations
    }

    /// Start a run from a blank scene.
    ///
    /// Ignored (returns `false`) while a run is in flight.
    pub fn start(&mut self) -> bool {
        if self.clock.is_running() {
            log::debug!(
                "start ignored: run in progress at frame {}",
                self.clock.frames_delivered()
            );
            return false;
        }
        self.engine.reset_scene();
        self.regenerations.clear();
        self.clock.start();
        log::info!(
            "animation run {} started: {} frames every {:?} (seed {})",
            self.clock.runs_started(),
            self.clock.total_frames(),
            self.clock.interval(),
            self.engine.seed()
        );
        true
    }

    /// Render the next frame if the clock says one is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Option<FrameOutcome> {
        let frame = self.clock.next_frame(now)?;
        self.render(frame)
    }

    /// Render the next frame without waiting for the interval.
    pub fn advance(&mut self) -> Option<FrameOutcome> {
        let frame = self.clock.advance()?;
        self.render(frame)
    }

    /// Start a run (if none is active) and render all remaining frames.
    pub fn run_to_completion(&mut self) -> Vec<FrameOutcome> {
        self.start();
        std::iter::from_fn(|| self.advance()).collect()
    }

    /// Push the current frame to a sink.
    pub fn present(&self, sink: &mut dyn DrawSink) {
        self.engine.scene().present(sink);
    }

    fn render(&mut self, frame: u32) -> Option<FrameOutcome> {
        debug_assert_eq!(frame, self.engine.next_frame(), "clock and engine out of step");
        let outcome = self.engine.deliver(frame)?;
        if outcome.regenerated {
            self.regenerations.push(outcome.frame);
        }
        if !self.clock.is_running() {
            log::info!(
                "animation run {} complete: {} cloud regenerations",
                self.clock.runs_started(),
                self.regenerations.len()
            );
        }
        Some(outcome)
    }
}
