//! TUI module for rayleigh.
//!
//! Holds the reusable TUI application state so it can be tested without a
//! terminal. Terminal I/O remains in `bin/rayleigh_tui.rs`.

#[cfg(feature = "tui")]
pub mod rayleigh_app;

#[cfg(feature = "tui")]
pub use rayleigh_app::RayleighApp;

#[cfg(test)]
#[cfg(feature = "tui")]
mod tests;
