//! Continuous colormaps for the scattering animation.
//!
//! `colormap(t)` maps a scalar in [0, 1] to a display colour. The default
//! [`Palette::Rainbow`] runs violet → blue → green → yellow → red, which is the
//! ordering the animation uses to sweep the wavelength ramp. Other palettes
//! are sampled from `colorous` gradients.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// An RGBA colour with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque blue, the indicator fill before the first scattering frame.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque red, the label colour.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Gold (`#FFD700`), the particle fill.
    pub const GOLD: Self = Self::rgb(1.0, 215.0 / 255.0, 0.0);

    /// Opaque colour from channels in [0, 1].
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque colour from 8-bit channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Same colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Quantise to 8-bit RGB (alpha dropped).
    #[must_use]
    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// Hex string `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Named colour gradients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Classic rainbow: violet at 0, red at 1.
    #[default]
    Rainbow,
    /// Google's Turbo gradient.
    Turbo,
    /// `ColorBrewer` Spectral, reversed so 0 is violet-blue and 1 is red.
    Spectral,
    /// Sinebow (cyclic).
    Sinebow,
    /// Viridis (perceptually uniform, not spectral).
    Viridis,
}

impl Palette {
    /// All palettes, in display order.
    pub const ALL: [Self; 5] = [
        Self::Rainbow,
        Self::Turbo,
        Self::Spectral,
        Self::Sinebow,
        Self::Viridis,
    ];

    /// Lower-case palette name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Turbo => "turbo",
            Self::Spectral => "spectral",
            Self::Sinebow => "sinebow",
            Self::Viridis => "viridis",
        }
    }

    /// Evaluate the palette at `t`.
    ///
    /// `t` is clamped to [0, 1]; NaN is treated as 0.
    #[must_use]
    pub fn eval(self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Rainbow => rainbow(t),
            Self::Turbo => gradient(colorous::TURBO, t),
            Self::Spectral => gradient(colorous::SPECTRAL, 1.0 - t),
            Self::Sinebow => gradient(colorous::SINEBOW, t),
            Self::Viridis => gradient(colorous::VIRIDIS, t),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default colormap used by the renderer.
#[must_use]
pub fn colormap(t: f64) -> Rgba {
    Palette::Rainbow.eval(t)
}

fn rainbow(t: f64) -> Rgba {
    Rgba::rgb(
        (2.0 * t - 0.5).abs().clamp(0.0, 1.0),
        (PI * t).sin().clamp(0.0, 1.0),
        (PI * t / 2.0).cos().clamp(0.0, 1.0),
    )
}

fn gradient(g: colorous::Gradient, t: f64) -> Rgba {
    let c = g.eval_continuous(t);
    Rgba::from_u8(c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_endpoints() {
        let start = colormap(0.0);
        assert!((start.r - 0.5).abs() < 1e-12);
        assert!(start.g.abs() < 1e-12);
        assert!((start.b - 1.0).abs() < 1e-12);

        let end = colormap(1.0);
        assert!((end.r - 1.0).abs() < 1e-12);
        assert!(end.g.abs() < 1e-9);
        assert!(end.b.abs() < 1e-9);
    }

    #[test]
    fn test_rainbow_midpoint_is_green_dominant() {
        let mid = colormap(0.5);
        assert!(mid.g > mid.b);
        assert!((mid.g - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_violet_to_red_ordering() {
        // Red grows and blue fades across the upper half of the ramp.
        let a = colormap(0.3);
        let b = colormap(0.9);
        assert!(b.r > a.r);
        assert!(b.b < a.b);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(colormap(-1.0), colormap(0.0));
        assert_eq!(colormap(2.0), colormap(1.0));
        assert_eq!(colormap(f64::NAN), colormap(0.0));
    }

    #[test]
    fn test_all_palettes_in_unit_cube() {
        for palette in Palette::ALL {
            for i in 0..=20 {
                let c = palette.eval(f64::from(i) / 20.0);
                for ch in [c.r, c.g, c.b, c.a] {
                    assert!((0.0..=1.0).contains(&ch), "{palette} out of range");
                }
            }
        }
    }

    #[test]
    fn test_palette_serde_lowercase() {
        let yaml = serde_yaml::to_string(&Palette::Spectral).expect("serialize");
        assert!(yaml.contains("spectral"));
        let parsed: Palette = serde_yaml::from_str("turbo").expect("deserialize");
        assert_eq!(parsed, Palette::Turbo);
    }

    #[test]
    fn test_rgba_hex() {
        assert_eq!(Rgba::GOLD.to_hex(), "#ffd700");
        assert_eq!(Rgba::BLACK.to_string(), "#000000");
        assert_eq!(Rgba::from_u8(255, 0, 128).to_u8(), (255, 0, 128));
    }

    #[test]
    fn test_with_alpha() {
        let c = Rgba::RED.with_alpha(0.6);
        assert!((c.a - 0.6).abs() < f64::EPSILON);
        assert!((c.r - 1.0).abs() < f64::EPSILON);
    }
}
