//! Animation runtime.
//!
//! - [`rng`]: seedable PCG stream for the scatter cloud
//! - [`clock`]: fixed-interval frame clock with a single active run
//! - [`session`]: engine and clock bound together behind one start trigger

pub mod clock;
pub mod rng;
pub mod session;

pub use clock::{AnimationClock, ClockState};
pub use rng::SimRng;
pub use session::AnimationSession;
