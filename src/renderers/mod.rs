//! Renderer-agnostic output for the scattering scene.
//!
//! The animation core never talks to a display directly. Each frame it hands
//! the four animated elements to a [`DrawSink`]:
//!
//! ```text
//! RayleighEngine ──render(frame)──► Scene ──present()──► DrawSink
//!                                                         ├─ TUI canvas
//!                                                         └─ RecordingSink (headless / tests)
//! ```

use serde::{Deserialize, Serialize};

use crate::colormap::Rgba;
use crate::scene::Point;

/// Opaque display surface accepting per-frame element updates.
pub trait DrawSink {
    /// Set the beam endpoints (or clear them) and its colour.
    fn set_line(&mut self, endpoints: Option<[Point; 2]>, color: Rgba);

    /// Set the scatter point set, its colour and its opacity.
    fn set_points(&mut self, points: &[Point], color: Rgba, opacity: f64);

    /// Set the indicator fill width and colour.
    fn set_rect_fill(&mut self, width: f64, color: Rgba);

    /// Set the caption text.
    fn set_text(&mut self, text: &str);
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// `set_line`.
    Line {
        /// Endpoints, if any.
        endpoints: Option<[Point; 2]>,
        /// Stroke colour.
        color: Rgba,
    },
    /// `set_points`.
    Points {
        /// Point set.
        points: Vec<Point>,
        /// Shared colour.
        color: Rgba,
        /// Shared opacity.
        opacity: f64,
    },
    /// `set_rect_fill`.
    RectFill {
        /// Fill width.
        width: f64,
        /// Fill colour.
        color: Rgba,
    },
    /// `set_text`.
    Text(String),
}

/// Sink that records every call, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Recorded calls, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Most recent caption set on this sink.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Text(t) => Some(t.as_str()),
            _ => None,
        })
    }
}

impl DrawSink for RecordingSink {
    fn set_line(&mut self, endpoints: Option<[Point; 2]>, color: Rgba) {
        self.commands.push(DrawCommand::Line { endpoints, color });
    }

    fn set_points(&mut self, points: &[Point], color: Rgba, opacity: f64) {
        self.commands.push(DrawCommand::Points {
            points: points.to_vec(),
            color,
            opacity,
        });
    }

    fn set_rect_fill(&mut self, width: f64, color: Rgba) {
        self.commands.push(DrawCommand::RectFill { width, color });
    }

    fn set_text(&mut self, text: &str) {
        self.commands.push(DrawCommand::Text(text.to_string()));
    }
}
