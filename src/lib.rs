//! # rayleigh
//!
//! A frame-indexed animation of Rayleigh scattering: a laser beam reaches a
//! particle, then scatters into a cloud of light while a wavelength readout
//! and indicator bar sweep from 400 nm toward 700 nm.
//!
//! - Frame rendering is a pure function of the frame index, except for the
//!   scatter cloud, which draws from an injected seedable RNG.
//! - Animation state lives in an explicit [`AnimationSession`]; one run at a
//!   time, started only by an explicit trigger.
//! - Output goes through the [`DrawSink`](renderers::DrawSink) trait, so the
//!   TUI and headless runs see the same frames.
//!
//! ## Example
//!
//! ```rust
//! use rayleigh::prelude::*;
//!
//! let config = RayleighConfig::builder().seed(42).build().unwrap();
//! let mut session = AnimationSession::new(config);
//! let frames = session.run_to_completion();
//! assert_eq!(frames.len(), 100);
//! assert_eq!(session.regenerations().len(), 24);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,
    clippy::imprecise_flops,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,
)]

pub mod cli;
pub mod colormap;
pub mod config;
pub mod demos;
pub mod engine;
pub mod error;
pub mod renderers;
pub mod scene;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::colormap::{colormap, Palette, Rgba};
    pub use crate::config::{RayleighConfig, RayleighConfigBuilder};
    pub use crate::demos::{
        DemoEngine, DeterministicReplay, FrameOutcome, Phase, RayleighEngine, RayleighState,
    };
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::{AnimationClock, AnimationSession};
    pub use crate::error::{RayleighError, RayleighResult};
    pub use crate::renderers::{DrawCommand, DrawSink, RecordingSink};
    pub use crate::scene::Scene;
}

/// Re-export for public API
pub use engine::AnimationSession;
pub use error::{RayleighError, RayleighResult};
