//! Configuration system with YAML schema and validation.
//!
//! Implements Poka-Yoke (mistake-proofing) through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation
//!
//! Every default equals the constant of the reference animation, so an
//! empty YAML document (`{}`) describes the canonical 100-frame run.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use validator::Validate;

use crate::colormap::Palette;
use crate::demos::engine::DemoMeta;
use crate::error::{RayleighError, RayleighResult};

/// Embedded default configuration.
pub const DEFAULT_RAYLEIGH_YAML: &str = include_str!("../../experiments/rayleigh_default.yaml");

/// Top-level animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RayleighConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Demo metadata.
    #[serde(default = "default_meta")]
    pub meta: DemoMeta,

    /// Master seed for scatter clouds; `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Frame timing.
    #[validate(nested)]
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Scatter cloud generation.
    #[validate(nested)]
    #[serde(default)]
    pub scatter: ScatterConfig,

    /// Wavelength ramp.
    #[validate(nested)]
    #[serde(default)]
    pub wavelength: WavelengthConfig,

    /// Wavelength indicator geometry.
    #[validate(nested)]
    #[serde(default)]
    pub indicator: IndicatorConfig,

    /// Colour gradient driven by phase-2 progress.
    #[serde(default)]
    pub palette: Palette,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_meta() -> DemoMeta {
    DemoMeta {
        id: "RAYLEIGH-001".to_string(),
        version: "1.0.0".to_string(),
        demo_type: "rayleigh".to_string(),
        description: "Laser beam scattering off a small particle".to_string(),
        author: String::new(),
        created: String::new(),
    }
}

impl RayleighConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> RayleighResult<Self> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> RayleighResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Poka-Yoke: validate all constraints
        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// The embedded default configuration.
    ///
    /// Falls back to [`RayleighConfig::default`] if the embedded file fails
    /// to parse, which the test suite rules out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_yaml(DEFAULT_RAYLEIGH_YAML).unwrap_or_else(|e| {
            log::warn!("embedded configuration rejected ({e}); using built-in defaults");
            Self::default()
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> RayleighResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> RayleighConfigBuilder {
        RayleighConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> RayleighResult<()> {
        let anim = &self.animation;
        if anim.approach_frames >= anim.total_frames {
            return Err(RayleighError::config(format!(
                "approach_frames ({}) must be less than total_frames ({})",
                anim.approach_frames, anim.total_frames
            )));
        }

        if self.scatter.min_radius > self.scatter.max_radius {
            return Err(RayleighError::config(format!(
                "scatter.min_radius ({}) exceeds scatter.max_radius ({})",
                self.scatter.min_radius, self.scatter.max_radius
            )));
        }

        Ok(())
    }

    /// Tick interval as a [`Duration`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.animation.interval_ms)
    }

    /// Number of frames in the scattering phase.
    #[must_use]
    pub const fn scatter_frames(&self) -> u32 {
        self.animation
            .total_frames
            .saturating_sub(self.animation.approach_frames)
    }
}

impl Default for RayleighConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            meta: default_meta(),
            seed: None,
            animation: AnimationConfig::default(),
            scatter: ScatterConfig::default(),
            wavelength: WavelengthConfig::default(),
            indicator: IndicatorConfig::default(),
            palette: Palette::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct RayleighConfigBuilder {
    seed: Option<u64>,
    palette: Option<Palette>,
    interval_ms: Option<u64>,
    total_frames: Option<u32>,
    approach_frames: Option<u32>,
}

impl RayleighConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the colour palette.
    #[must_use]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Set the tick interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(mut self, ms: u64) -> Self {
        self.interval_ms = Some(ms);
        self
    }

    /// Set the number of frames per run.
    #[must_use]
    pub const fn total_frames(mut self, n: u32) -> Self {
        self.total_frames = Some(n);
        self
    }

    /// Set the length of the approach phase.
    #[must_use]
    pub const fn approach_frames(mut self, n: u32) -> Self {
        self.approach_frames = Some(n);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the combined settings fail validation.
    pub fn build(self) -> RayleighResult<RayleighConfig> {
        let mut config = RayleighConfig {
            seed: self.seed,
            ..RayleighConfig::default()
        };

        if let Some(palette) = self.palette {
            config.palette = palette;
        }
        if let Some(ms) = self.interval_ms {
            config.animation.interval_ms = ms;
        }
        if let Some(n) = self.total_frames {
            config.animation.total_frames = n;
        }
        if let Some(n) = self.approach_frames {
            config.animation.approach_frames = n;
        }

        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }
}

/// Frame timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Milliseconds between frames.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Frames per run.
    #[validate(range(min = 2, max = 100_000))]
    #[serde(default = "default_total_frames")]
    pub total_frames: u32,
    /// Frames spent on the beam approach before scattering starts.
    #[validate(range(min = 1))]
    #[serde(default = "default_approach_frames")]
    pub approach_frames: u32,
}

const fn default_interval_ms() -> u64 {
    50
}

const fn default_total_frames() -> u32 {
    100
}

const fn default_approach_frames() -> u32 {
    30
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            total_frames: default_total_frames(),
            approach_frames: default_approach_frames(),
        }
    }
}

/// Scatter cloud generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScatterConfig {
    /// Regenerate the cloud on frames divisible by this.
    #[validate(range(min = 1))]
    #[serde(default = "default_every")]
    pub every: u32,
    /// Points per regeneration.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_points")]
    pub points: usize,
    /// Inner radius of the scatter annulus.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    /// Outer radius of the scatter annulus.
    #[validate(range(min = 0.0, max = 2.0))]
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    /// Cloud opacity.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Marker area in points².
    #[validate(range(min = 0.0))]
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
}

const fn default_every() -> u32 {
    3
}

const fn default_points() -> usize {
    15
}

const fn default_min_radius() -> f64 {
    0.3
}

const fn default_max_radius() -> f64 {
    1.2
}

const fn default_opacity() -> f64 {
    0.6
}

const fn default_marker_size() -> f64 {
    40.0
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            every: default_every(),
            points: default_points(),
            min_radius: default_min_radius(),
            max_radius: default_max_radius(),
            opacity: default_opacity(),
            marker_size: default_marker_size(),
        }
    }
}

/// Wavelength ramp, in nanometres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WavelengthConfig {
    /// Wavelength at the first scattering frame.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_start_nm")]
    pub start_nm: f64,
    /// Span covered over the scattering phase.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_span_nm")]
    pub span_nm: f64,
}

const fn default_start_nm() -> f64 {
    400.0
}

const fn default_span_nm() -> f64 {
    300.0
}

impl Default for WavelengthConfig {
    fn default() -> Self {
        Self {
            start_nm: default_start_nm(),
            span_nm: default_span_nm(),
        }
    }
}

/// Wavelength indicator geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Width of the track (and of a full fill).
    #[validate(range(exclusive_min = 0.0, max = 4.0))]
    #[serde(default = "default_max_width")]
    pub max_width: f64,
}

const fn default_max_width() -> f64 {
    3.0
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_yaml_parses() {
        let config = RayleighConfig::from_yaml(DEFAULT_RAYLEIGH_YAML).expect("embedded yaml");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.meta.demo_type, "rayleigh");
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.scatter, ScatterConfig::default());
        assert_eq!(config.palette, Palette::Rainbow);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RayleighConfig::from_yaml("{}").expect("empty yaml");
        assert_eq!(config, RayleighConfig::default());
        assert_eq!(config.animation.total_frames, 100);
        assert_eq!(config.animation.approach_frames, 30);
        assert_eq!(config.scatter.points, 15);
        assert!((config.scatter.opacity - 0.6).abs() < f64::EPSILON);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_interval_and_scatter_frames() {
        let config = RayleighConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(50));
        assert_eq!(config.scatter_frames(), 70);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RayleighConfig::from_yaml("sede: 42\n");
        assert!(matches!(result, Err(RayleighError::YamlParse(_))));
    }

    #[test]
    fn test_unknown_nested_field_rejected() {
        let result = RayleighConfig::from_yaml("animation:\n  fps: 20\n");
        assert!(matches!(result, Err(RayleighError::YamlParse(_))));
    }

    #[test]
    fn test_opacity_out_of_range() {
        let result = RayleighConfig::from_yaml("scatter:\n  opacity: 1.5\n");
        assert!(matches!(result, Err(RayleighError::Validation(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = RayleighConfig::from_yaml("animation:\n  interval_ms: 0\n");
        assert!(matches!(result, Err(RayleighError::Validation(_))));
    }

    #[test]
    fn test_approach_must_precede_end() {
        let yaml = "animation:\n  total_frames: 30\n  approach_frames: 30\n";
        let err = RayleighConfig::from_yaml(yaml).expect_err("must reject");
        assert!(matches!(err, RayleighError::Config { .. }));
        assert!(err.to_string().contains("approach_frames"));
    }

    #[test]
    fn test_radius_order_enforced() {
        let yaml = "scatter:\n  min_radius: 1.5\n  max_radius: 1.0\n";
        let err = RayleighConfig::from_yaml(yaml).expect_err("must reject");
        assert!(err.to_string().contains("min_radius"));
    }

    #[test]
    fn test_palette_from_yaml() {
        let config = RayleighConfig::from_yaml("palette: turbo\n").expect("parse");
        assert_eq!(config.palette, Palette::Turbo);
    }

    #[test]
    fn test_builder() {
        let config = RayleighConfig::builder()
            .seed(7)
            .palette(Palette::Viridis)
            .interval_ms(20)
            .build()
            .expect("valid");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.palette, Palette::Viridis);
        assert_eq!(config.animation.interval_ms, 20);
        assert_eq!(config.animation.total_frames, 100);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        let result = RayleighConfig::builder()
            .total_frames(10)
            .approach_frames(10)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RayleighConfig::builder().seed(3).build().expect("valid");
        let yaml = config.to_yaml().expect("serialize");
        let restored = RayleighConfig::from_yaml(&yaml).expect("parse");
        assert_eq!(config, restored);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RayleighConfig::load("/nonexistent/rayleigh.yaml");
        assert!(matches!(result, Err(RayleighError::Io(_))));
    }

    #[test]
    fn test_embedded_matches_from_yaml() {
        assert_eq!(
            RayleighConfig::embedded(),
            RayleighConfig::from_yaml(DEFAULT_RAYLEIGH_YAML).expect("parse")
        );
    }
}
