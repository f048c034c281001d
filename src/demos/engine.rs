//! Unified Demo Engine Trait
//!
//! Every animation implements `DemoEngine`. The trait guarantees:
//! - YAML-first configuration (single source of truth)
//! - Deterministic replay (same seed → same output)
//! - Renderer independence (TUI and headless runs produce identical state sequences)

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::RayleighResult;

/// Demo metadata from YAML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoMeta {
    /// Unique identifier (e.g., "RAYLEIGH-001").
    pub id: String,

    /// Semantic version.
    pub version: String,

    /// Demo type (e.g., "rayleigh").
    pub demo_type: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Author.
    #[serde(default)]
    pub author: String,

    /// Creation date.
    #[serde(default)]
    pub created: String,
}

impl DemoMeta {
    /// One-line identification, e.g. `RAYLEIGH-001 v1.0.0 by PAIML (2026-10-17)`.
    ///
    /// Author and date are omitted when empty.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = format!("{} v{}", self.id, self.version);
        if !self.author.is_empty() {
            label.push_str(" by ");
            label.push_str(&self.author);
        }
        if !self.created.is_empty() {
            label.push_str(&format!(" ({})", self.created));
        }
        label
    }
}

/// Lifecycle shared by all demos.
///
/// # Example
///
/// ```ignore
/// impl DemoEngine for RayleighEngine {
///     type Config = RayleighConfig;
///     type State = RayleighState;
///     type StepResult = FrameOutcome;
///
///     fn from_yaml(yaml: &str) -> RayleighResult<Self> {
///         Ok(Self::from_config(RayleighConfig::from_yaml(yaml)?))
///     }
///     // ... other methods
/// }
/// ```
pub trait DemoEngine: Sized + Clone {
    /// Configuration type loaded from YAML.
    type Config: DeserializeOwned + Debug;

    /// State snapshot for replay/audit.
    type State: Clone + Serialize + DeserializeOwned + PartialEq + Debug;

    /// Result of a single step.
    type StepResult: Debug;

    // === Lifecycle ===

    /// Create engine from YAML configuration string.
    ///
    /// # Errors
    ///
    /// Returns `RayleighError::YamlParse` if YAML is invalid.
    /// Returns `RayleighError::Validation` if config fails validation.
    fn from_yaml(yaml: &str) -> RayleighResult<Self>;

    /// Create engine from config struct.
    fn from_config(config: Self::Config) -> Self;

    /// Get the current configuration.
    fn config(&self) -> &Self::Config;

    /// Reset to initial state (same seed = same result).
    fn reset(&mut self);

    /// Reset with a new seed.
    fn reset_with_seed(&mut self, seed: u64);

    // === Execution ===

    /// Execute one step (deterministic given state + seed).
    fn step(&mut self) -> Self::StepResult;

    /// Execute N steps.
    fn run(&mut self, n: usize) -> Vec<Self::StepResult> {
        (0..n).map(|_| self.step()).collect()
    }

    /// Check if the run is complete.
    fn is_complete(&self) -> bool;

    // === State Access ===

    /// Get current state snapshot (for replay verification).
    fn state(&self) -> Self::State;

    /// Restore from a state snapshot.
    fn restore(&mut self, state: &Self::State);

    /// Get current step number.
    fn step_count(&self) -> u64;

    /// Get seed for reproducibility.
    fn seed(&self) -> u64;

    /// Get demo metadata.
    fn meta(&self) -> &DemoMeta;
}

/// Helper trait for demos that support deterministic replay.
///
/// Given identical configuration and seed, two independent runs must
/// produce bit-identical state sequences.
pub trait DeterministicReplay: DemoEngine {
    /// Verify that two runs with same config produce identical results.
    fn verify_determinism(&self, other: &Self) -> bool {
        self.state() == other.state()
    }

    /// Get a checksum of the current state for quick comparison.
    fn state_checksum(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RayleighConfig;

    #[test]
    fn test_embedded_meta_label() {
        let meta = RayleighConfig::embedded().meta;
        assert_eq!(meta.demo_type, "rayleigh");
        assert_eq!(meta.label(), "RAYLEIGH-001 v1.0.0 by PAIML (2026-10-17)");
        assert_eq!(meta.description, "Laser beam scattering off a small particle");
    }

    #[test]
    fn test_builder_meta_label_omits_blank_fields() {
        let meta = RayleighConfig::builder().build().expect("config").meta;
        assert!(meta.author.is_empty());
        assert_eq!(meta.label(), "RAYLEIGH-001 v1.0.0");
    }

    #[test]
    fn test_meta_label_without_author() {
        let meta = DemoMeta {
            id: "RAYLEIGH-002".to_string(),
            version: "0.2.0".to_string(),
            created: "2026-01-01".to_string(),
            ..DemoMeta::default()
        };
        assert_eq!(meta.label(), "RAYLEIGH-002 v0.2.0 (2026-01-01)");
    }
}
