//! `RayleighEngine`: the scattering animation as a `DemoEngine`.
//!
//! # Frame Equations
//!
//! ```text
//! Approach (f < A):   x(f)        = linspace(-2, 0, A)[f]
//!                     beam        = (-2, 0) → (x(f), 0), colour cmap(0)
//!
//! Scatter  (f ≥ A):   progress(f) = (f − A) / (N − A)          ∈ [0, 1)
//!                     λ(f)        = λ₀ + Δλ · progress(f)      (nm)
//!                     fill(f)     = W · progress(f)
//!                     cloud       regenerated iff f mod k = 0
//! ```
//!
//! With the defaults `A = 30`, `N = 100`, `λ₀ = 400`, `Δλ = 300`, `W = 3`,
//! `k = 3`. Everything except the cloud positions is a pure function of `f`.
//! The cloud draws `n` angles in [0, 2π) and then `n` radii in
//! `[r_min, r_max]` from the injected [`SimRng`].

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::engine::{DemoEngine, DemoMeta, DeterministicReplay};
use crate::config::RayleighConfig;
use crate::engine::rng::SimRng;
use crate::error::{RayleighError, RayleighResult};
use crate::scene::{Point, Scene};

/// Where the beam enters the scene.
pub const BEAM_ORIGIN: Point = (-2.0, 0.0);

/// Where the beam meets the particle.
pub const BEAM_TARGET: Point = (0.0, 0.0);

/// First line of the scattering caption.
pub const LABEL_TITLE: &str = "Rayleigh Scattering";

/// The two phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The beam travels toward the particle.
    Approach,
    /// The beam scatters and the wavelength ramps.
    Scatter,
}

impl Phase {
    /// Phase for `frame` given the approach length.
    #[must_use]
    pub const fn of(frame: u32, approach_frames: u32) -> Self {
        if frame < approach_frames {
            Self::Approach
        } else {
            Self::Scatter
        }
    }
}

/// `i`-th of `n` evenly spaced samples over `[start, end]` (inclusive).
///
/// The last sample is exactly `end`.
#[must_use]
pub fn linspace_at(start: f64, end: f64, n: u32, i: u32) -> f64 {
    if n <= 1 {
        return start;
    }
    if i >= n - 1 {
        return end;
    }
    let step = (end - start) / f64::from(n - 1);
    start + f64::from(i) * step
}

/// `n` evenly spaced samples over `[start, end]` (inclusive).
#[must_use]
pub fn linspace(start: f64, end: f64, n: u32) -> Vec<f64> {
    (0..n).map(|i| linspace_at(start, end, n, i)).collect()
}

/// What happened on one rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// Frame index.
    pub frame: u32,
    /// Phase the frame belongs to.
    pub phase: Phase,
    /// Whether the scatter cloud was replaced on this frame.
    pub regenerated: bool,
    /// Displayed wavelength (scatter phase only).
    pub wavelength_nm: Option<f64>,
    /// Indicator fill width after the frame.
    pub fill_width: f64,
    /// Beam head x-coordinate after the frame.
    pub beam_head_x: Option<f64>,
}

/// Serializable engine snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayleighState {
    /// Index of the next frame `step` will render.
    pub next_frame: u32,
    /// Frames rendered since the last reset.
    pub step_count: u64,
    /// Drawables.
    pub scene: Scene,
    /// Scatter RNG, including its stream position.
    pub rng: SimRng,
}

/// The frame renderer and its drawable set.
#[derive(Debug, Clone)]
pub struct RayleighEngine {
    config: RayleighConfig,
    scene: Scene,
    rng: SimRng,
    seed: u64,
    next_frame: u32,
    step_count: u64,
    demo_meta: DemoMeta,
}

impl RayleighEngine {
    /// Engine with an explicitly injected random source.
    #[must_use]
    pub fn with_rng(config: RayleighConfig, rng: SimRng) -> Self {
        let scene = Self::fresh_scene(&config);
        let demo_meta = config.meta.clone();
        Self {
            seed: rng.master_seed(),
            config,
            scene,
            rng,
            next_frame: 0,
            step_count: 0,
            demo_meta,
        }
    }

    fn fresh_scene(config: &RayleighConfig) -> Scene {
        Scene::new(
            config.indicator.max_width,
            config.scatter.opacity,
            config.scatter.marker_size,
        )
    }

    /// Current drawables.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Frames per run.
    #[must_use]
    pub const fn total_frames(&self) -> u32 {
        self.config.animation.total_frames
    }

    /// Index of the next frame `step` will render.
    #[must_use]
    pub const fn next_frame(&self) -> u32 {
        self.next_frame
    }

    /// Phase of `frame`.
    #[must_use]
    pub const fn phase(&self, frame: u32) -> Phase {
        Phase::of(frame, self.config.animation.approach_frames)
    }

    /// Normalized position within the scatter phase, in [0, 1).
    ///
    /// Zero during the approach.
    #[must_use]
    pub fn progress(&self, frame: u32) -> f64 {
        let approach = self.config.animation.approach_frames;
        let span = self.config.scatter_frames();
        if frame < approach || span == 0 {
            return 0.0;
        }
        f64::from(frame - approach) / f64::from(span)
    }

    /// Wavelength shown on `frame`, in nanometres.
    #[must_use]
    pub fn wavelength_nm(&self, frame: u32) -> f64 {
        let w = &self.config.wavelength;
        w.start_nm + w.span_nm * self.progress(frame)
    }

    /// Caption shown on a scatter frame.
    #[must_use]
    pub fn label_text(&self, frame: u32) -> String {
        format!(
            "{LABEL_TITLE}\nWavelength: {:.1} nm",
            self.wavelength_nm(frame)
        )
    }

    /// Whether the cloud is replaced on `frame`.
    #[must_use]
    pub const fn regenerates_on(&self, frame: u32) -> bool {
        matches!(self.phase(frame), Phase::Scatter)
            && matches!(frame.checked_rem(self.config.scatter.every), Some(0))
    }

    /// Every frame of a run on which the cloud is replaced.
    #[must_use]
    pub fn regeneration_frames(&self) -> Vec<u32> {
        (0..self.total_frames())
            .filter(|&f| self.regenerates_on(f))
            .collect()
    }

    /// Clear the drawables and rewind the frame counter.
    ///
    /// The RNG stream is left where it is, so consecutive runs draw
    /// different clouds. Calling this repeatedly yields the same blank scene.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        self.next_frame = 0;
        self.step_count = 0;
    }

    /// Render `frame` and return the updated drawables.
    ///
    /// Frames past the end of a run are clamped to the last frame.
    pub fn render(&mut self, frame: u32) -> &Scene {
        let frame = frame.min(self.total_frames().saturating_sub(1));
        self.apply_frame(frame);
        &self.scene
    }

    /// Render `frame`, rejecting indices outside the run.
    ///
    /// # Errors
    ///
    /// Returns `RayleighError::FrameOutOfRange` if `frame >= total_frames`.
    pub fn render_checked(&mut self, frame: u32) -> RayleighResult<&Scene> {
        let total = self.total_frames();
        if frame >= total {
            return Err(RayleighError::FrameOutOfRange { frame, total });
        }
        self.apply_frame(frame);
        Ok(&self.scene)
    }

    /// Render the frame a clock delivered and move the frame counter past it.
    ///
    /// Returns `None` for indices outside the run.
    pub fn deliver(&mut self, frame: u32) -> Option<FrameOutcome> {
        if frame >= self.total_frames() {
            return None;
        }
        let outcome = self.apply_frame(frame);
        self.next_frame = frame + 1;
        self.step_count += 1;
        Some(outcome)
    }

    /// Apply one frame to the scene and report what changed.
    pub fn apply_frame(&mut self, frame: u32) -> FrameOutcome {
        match self.phase(frame) {
            Phase::Approach => self.render_approach(frame),
            Phase::Scatter => self.render_scatter(frame),
        }
    }

    fn render_approach(&mut self, frame: u32) -> FrameOutcome {
        let x = linspace_at(
            BEAM_ORIGIN.0,
            BEAM_TARGET.0,
            self.config.animation.approach_frames,
            frame,
        );
        self.scene.beam.endpoints = Some([BEAM_ORIGIN, (x, BEAM_TARGET.1)]);
        self.scene.beam.color = self.config.palette.eval(0.0);

        FrameOutcome {
            frame,
            phase: Phase::Approach,
            regenerated: false,
            wavelength_nm: None,
            fill_width: self.scene.indicator.fill_width,
            beam_head_x: Some(x),
        }
    }

    fn render_scatter(&mut self, frame: u32) -> FrameOutcome {
        let progress = self.progress(frame);
        let wavelength = self.wavelength_nm(frame);
        let color = self.config.palette.eval(progress);

        self.scene.beam.endpoints = Some([BEAM_ORIGIN, BEAM_TARGET]);
        self.scene.beam.color = color;

        self.scene.indicator.fill_width = self.config.indicator.max_width * progress;
        self.scene.indicator.fill_color = color;

        let regenerated = self.regenerates_on(frame);
        if regenerated {
            let points = self.draw_cloud();
            log::debug!(
                "frame {frame}: regenerated scatter cloud ({} points, generation {})",
                points.len(),
                self.scene.cloud.generation + 1
            );
            self.scene
                .cloud
                .replace(points, color, self.config.scatter.opacity);
        }

        self.scene.label.text = self.label_text(frame);

        FrameOutcome {
            frame,
            phase: Phase::Scatter,
            regenerated,
            wavelength_nm: Some(wavelength),
            fill_width: self.scene.indicator.fill_width,
            beam_head_x: Some(BEAM_TARGET.0),
        }
    }

    /// Fresh annulus of scatter points: all angles first, then all radii.
    fn draw_cloud(&mut self) -> Vec<Point> {
        let scatter = &self.config.scatter;
        let n = scatter.points;
        let angles: Vec<f64> = (0..n).map(|_| self.rng.gen_angle()).collect();
        let radii = self
            .rng
            .sample_uniform(n, scatter.min_radius, scatter.max_radius);

        angles
            .iter()
            .zip(&radii)
            .map(|(&theta, &r)| (r * theta.cos(), r * theta.sin()))
            .collect()
    }
}

impl Default for RayleighEngine {
    fn default() -> Self {
        Self::from_config(RayleighConfig::embedded())
    }
}

impl DemoEngine for RayleighEngine {
    type Config = RayleighConfig;
    type State = RayleighState;
    type StepResult = Option<FrameOutcome>;

    fn from_yaml(yaml: &str) -> RayleighResult<Self> {
        let config = RayleighConfig::from_yaml(yaml)?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: Self::Config) -> Self {
        let rng = config.seed.map_or_else(SimRng::from_entropy, SimRng::new);
        Self::with_rng(config, rng)
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn reset(&mut self) {
        self.reset_with_seed(self.seed);
    }

    fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SimRng::new(seed);
        self.seed = seed;
        self.scene = Self::fresh_scene(&self.config);
        self.next_frame = 0;
        self.step_count = 0;
    }

    fn step(&mut self) -> Self::StepResult {
        self.deliver(self.next_frame)
    }

    fn is_complete(&self) -> bool {
        self.next_frame >= self.total_frames()
    }

    fn state(&self) -> Self::State {
        RayleighState {
            next_frame: self.next_frame,
            step_count: self.step_count,
            scene: self.scene.clone(),
            rng: self.rng.clone(),
        }
    }

    fn restore(&mut self, state: &Self::State) {
        self.next_frame = state.next_frame;
        self.step_count = state.step_count;
        self.scene.clone_from(&state.scene);
        self.rng.clone_from(&state.rng);
        self.seed = state.rng.master_seed();
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn meta(&self) -> &DemoMeta {
        &self.demo_meta
    }
}

impl DeterministicReplay for RayleighEngine {
    fn state_checksum(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.next_frame.hash(&mut hasher);
        self.step_count.hash(&mut hasher);
        for (x, y) in &self.scene.cloud.points {
            x.to_bits().hash(&mut hasher);
            y.to_bits().hash(&mut hasher);
        }
        if let Some([a, b]) = self.scene.beam.endpoints {
            for v in [a.0, a.1, b.0, b.1] {
                v.to_bits().hash(&mut hasher);
            }
        }
        self.scene.indicator.fill_width.to_bits().hash(&mut hasher);
        self.scene.label.text.hash(&mut hasher);
        hasher.finish()
    }
}
