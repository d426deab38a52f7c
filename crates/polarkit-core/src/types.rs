//! Shared value types for the point-generation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single Cartesian waypoint on the densified toolpath.
///
/// Waypoints are emitted in strict traversal order; the order defines the
/// physical path and must never be reordered or deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Absolute X coordinate (length units)
    pub x: f64,
    /// Absolute Y coordinate (length units)
    pub y: f64,
}

impl Waypoint {
    /// Create a new waypoint
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Pen position on the plotter carriage.
///
/// `C10` raises the pen and `C11` lowers it; the polarity follows the host
/// driver, which raises the pen before every file run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenState {
    /// Pen lifted off the drawing surface
    Up,
    /// Pen touching the drawing surface
    Down,
}

impl Default for PenState {
    fn default() -> Self {
        Self::Up
    }
}

impl fmt::Display for PenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoint_display_matches_points_file_format() {
        assert_eq!(Waypoint::new(0.0, 0.0).to_string(), "(0,0)");
        assert_eq!(Waypoint::new(10.0, -0.5).to_string(), "(10,-0.5)");
        assert_eq!(Waypoint::new(1.25, 3.5).to_string(), "(1.25,3.5)");
    }

    #[test]
    fn pen_starts_up() {
        assert_eq!(PenState::default(), PenState::Up);
    }
}
