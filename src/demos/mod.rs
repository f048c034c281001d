//! Demo engines.
//!
//! [`engine`] holds the `DemoEngine` contract shared by YAML-driven demos;
//! [`rayleigh`] is the scattering animation built on it.

pub mod engine;
pub mod rayleigh;

pub use engine::{DemoEngine, DemoMeta, DeterministicReplay};
pub use rayleigh::{FrameOutcome, Phase, RayleighEngine, RayleighState};
