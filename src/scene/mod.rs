//! Drawable entities of the scattering scene.
//!
//! All entities are plain data owned by one [`Scene`]. The renderer mutates
//! them in place each frame; hosts read them (or receive them through a
//! [`DrawSink`](crate::renderers::DrawSink)) to paint.

use serde::{Deserialize, Serialize};

use crate::colormap::Rgba;
use crate::renderers::DrawSink;

/// A point in logical scene coordinates.
pub type Point = (f64, f64);

/// Logical bounds of the drawing surface on both axes.
pub const SCENE_BOUNDS: [f64; 2] = [-2.0, 2.0];

/// The laser beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Segment endpoints; `None` after a reset.
    pub endpoints: Option<[Point; 2]>,
    /// Stroke colour.
    pub color: Rgba,
    /// Stroke width in points.
    pub width: f64,
}

impl Default for Beam {
    fn default() -> Self {
        Self {
            endpoints: None,
            color: Rgba::BLUE,
            width: 2.0,
        }
    }
}

/// The scattering particle. Decorative and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Disc centre.
    pub center: Point,
    /// Disc radius.
    pub radius: f64,
    /// Fill colour.
    pub fill: Rgba,
    /// Outline colour.
    pub edge: Rgba,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            center: (0.0, 0.0),
            radius: 0.2,
            fill: Rgba::GOLD,
            edge: Rgba::BLACK,
        }
    }
}

/// The cloud of scattered light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterCloud {
    /// Current point set (replaced wholesale on regeneration).
    pub points: Vec<Point>,
    /// Shared point colour.
    pub color: Rgba,
    /// Shared point opacity.
    pub opacity: f64,
    /// Marker area in points².
    pub marker_size: f64,
    /// Regenerations since the last reset.
    pub generation: u32,
}

impl ScatterCloud {
    /// Empty cloud with the given marker size.
    #[must_use]
    pub fn new(opacity: f64, marker_size: f64) -> Self {
        Self {
            points: Vec::new(),
            color: Rgba::BLUE,
            opacity,
            marker_size,
            generation: 0,
        }
    }

    /// Replace the point set.
    pub fn replace(&mut self, points: Vec<Point>, color: Rgba, opacity: f64) {
        self.points = points;
        self.color = color;
        self.opacity = opacity;
        self.generation += 1;
    }

    /// Drop all points.
    pub fn clear(&mut self) {
        self.points.clear();
        self.generation = 0;
    }

    /// Whether the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The wavelength bar: a fixed outline track plus a growing fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavelengthIndicator {
    /// Lower-left corner shared by track and fill.
    pub origin: Point,
    /// Track width (maximum fill width).
    pub track_width: f64,
    /// Bar height.
    pub height: f64,
    /// Current fill width in `[0, track_width]`.
    pub fill_width: f64,
    /// Fill colour.
    pub fill_color: Rgba,
    /// Fill alpha.
    pub fill_alpha: f64,
    /// Track outline colour.
    pub edge: Rgba,
}

impl WavelengthIndicator {
    /// Empty indicator with the given track width.
    #[must_use]
    pub fn new(track_width: f64) -> Self {
        Self {
            origin: (-1.5, -1.8),
            track_width,
            height: 0.3,
            fill_width: 0.0,
            fill_color: Rgba::BLUE,
            fill_alpha: 0.8,
            edge: Rgba::BLACK,
        }
    }

    /// Fill as a fraction of the track.
    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        if self.track_width > 0.0 {
            (self.fill_width / self.track_width).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for WavelengthIndicator {
    fn default() -> Self {
        Self::new(3.0)
    }
}

/// The caption above the particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Text content; empty outside the scattering phase.
    pub text: String,
    /// Centre anchor.
    pub anchor: Point,
    /// Text colour.
    pub color: Rgba,
    /// Bold weight.
    pub bold: bool,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            anchor: (0.0, 1.5),
            color: Rgba::RED,
            bold: true,
        }
    }
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Laser beam.
    pub beam: Beam,
    /// Scattering particle.
    pub particle: Particle,
    /// Scattered light.
    pub cloud: ScatterCloud,
    /// Wavelength bar.
    pub indicator: WavelengthIndicator,
    /// Caption.
    pub label: Label,
}

impl Default for ScatterCloud {
    fn default() -> Self {
        Self::new(0.6, 40.0)
    }
}

impl Scene {
    /// Fresh scene with the given indicator track width.
    #[must_use]
    pub fn new(track_width: f64, opacity: f64, marker_size: f64) -> Self {
        Self {
            beam: Beam::default(),
            particle: Particle::default(),
            cloud: ScatterCloud::new(opacity, marker_size),
            indicator: WavelengthIndicator::new(track_width),
            label: Label::default(),
        }
    }

    /// Clear every animated entity to its empty baseline.
    ///
    /// Colours are kept; only geometry and text are cleared.
    pub fn clear(&mut self) {
        self.beam.endpoints = None;
        self.cloud.clear();
        self.indicator.fill_width = 0.0;
        self.label.text.clear();
    }

    /// Whether every animated entity is at its empty baseline.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_blank(&self) -> bool {
        self.beam.endpoints.is_none()
            && self.cloud.is_empty()
            && self.indicator.fill_width == 0.0
            && self.label.text.is_empty()
    }

    /// Push the four animated elements to a sink, in draw order.
    pub fn present(&self, sink: &mut dyn DrawSink) {
        sink.set_line(self.beam.endpoints, self.beam.color);
        sink.set_points(&self.cloud.points, self.cloud.color, self.cloud.opacity);
        sink.set_rect_fill(self.indicator.fill_width, self.indicator.fill_color);
        sink.set_text(&self.label.text);
    }
}
