//! Arc pre-calculation.
//!
//! Given a chord displacement and a center offset (both relative to the
//! current position), derives everything the circular interpolators need:
//! radius, normalized start angle, per-step angle, and step count.

use super::geometry::{distance, normalize_angle, DEGENERATE_EPSILON, TWO_PI};

/// Arc sweep direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// Clockwise interpolation (traversed as decreasing angle)
    Clockwise,
    /// Counter-clockwise interpolation (traversed as increasing angle)
    CounterClockwise,
}

/// Derived arc traversal parameters, computed once per arc command.
///
/// A `step_count` of zero marks a degenerate arc: the caller emits no
/// intermediate waypoints and jumps directly to the target. This also means
/// a full-circle command (zero chord, nonzero radius) is not representable
/// and degrades to a direct jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Distance from the arc center to both endpoints
    pub radius: f64,
    /// Angle of the start point around the center, in [0, 2π)
    pub start_angle: f64,
    /// Angular advance per interpolation step
    pub step_angle: f64,
    /// Number of intermediate steps to traverse
    pub step_count: usize,
}

impl ArcGeometry {
    /// Pre-calculate traversal parameters for one arc command.
    ///
    /// `(dx, dy)` is the chord displacement from the current position to the
    /// target; `(i, j)` is the offset from the current position to the arc
    /// center (not from the target).
    pub fn precalc(direction: ArcDirection, step_distance: f64, dx: f64, dy: f64, i: f64, j: f64) -> Self {
        // Radius is measured center-to-target in the current-position frame.
        let radius = distance(dx, dy, i, j);

        // Degenerate guard: zero radius, or zero-length chord (start == end).
        let zero_chord = dx.abs() < DEGENERATE_EPSILON && dy.abs() < DEGENERATE_EPSILON;
        if radius < DEGENERATE_EPSILON || zero_chord {
            return Self {
                radius,
                start_angle: 0.0,
                step_angle: 0.0,
                step_count: 0,
            };
        }

        // Express start (0,0) and end (dx,dy) in a frame centered on (i,j).
        let start_x = -i;
        let start_y = -j;
        let end_x = dx - i;
        let end_y = dy - j;

        let start_angle = normalize_angle(start_y.atan2(start_x));
        let end_angle = normalize_angle(end_y.atan2(end_x));

        // Sweep in radians, compensated when the arc passes through zero.
        // Clockwise is traversed as decreasing angle, so its raw sweep is
        // measured start-minus-end.
        let mut arc_length = match direction {
            ArcDirection::Clockwise => start_angle - end_angle,
            ArcDirection::CounterClockwise => end_angle - start_angle,
        };
        if arc_length < 0.0 {
            arc_length += TWO_PI;
        }

        let circumference = TWO_PI * radius;
        let step_angle = (step_distance / circumference) * TWO_PI;
        // Truncation applied uniformly to both directions.
        let step_count = (arc_length / step_angle) as usize;

        Self {
            radius,
            start_angle,
            step_angle,
            step_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::geometry::INTERPOLATION_DISTANCE;

    #[test]
    fn quarter_arc_ccw_across_the_seam() {
        // From (0,0) to (10,10) around center (0,10): start angle 3π/2,
        // end angle 0, a quarter turn that crosses the 0/2π seam.
        let geo = ArcGeometry::precalc(
            ArcDirection::CounterClockwise,
            INTERPOLATION_DISTANCE,
            10.0,
            10.0,
            0.0,
            10.0,
        );
        assert!((geo.radius - 10.0).abs() < 1e-9);
        assert!((geo.start_angle - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-7);
        // Quarter circumference ≈ 15.7 units at 0.1 spacing.
        assert_eq!(geo.step_count, 157);
    }

    #[test]
    fn cw_and_ccw_step_counts_agree_for_mirrored_arcs() {
        // The same quarter sweep traversed clockwise (mirrored through the
        // X axis) must produce the same step count: truncation is uniform.
        let ccw = ArcGeometry::precalc(
            ArcDirection::CounterClockwise,
            INTERPOLATION_DISTANCE,
            10.0,
            10.0,
            0.0,
            10.0,
        );
        let cw = ArcGeometry::precalc(
            ArcDirection::Clockwise,
            INTERPOLATION_DISTANCE,
            10.0,
            -10.0,
            0.0,
            -10.0,
        );
        assert_eq!(ccw.step_count, cw.step_count);
        assert!((ccw.step_angle - cw.step_angle).abs() < 1e-12);
    }

    #[test]
    fn half_arc_step_angle_covers_sweep() {
        // Half circle of radius 5: (0,0) -> (10,0) around center (5,0).
        let geo = ArcGeometry::precalc(
            ArcDirection::CounterClockwise,
            INTERPOLATION_DISTANCE,
            10.0,
            0.0,
            5.0,
            0.0,
        );
        assert!((geo.radius - 5.0).abs() < 1e-9);
        // step_count * step_angle never overshoots the sweep.
        let sweep = geo.step_count as f64 * geo.step_angle;
        assert!(sweep <= std::f64::consts::PI + 1e-7);
        assert!(sweep > std::f64::consts::PI - geo.step_angle - 1e-7);
    }

    #[test]
    fn zero_chord_is_degenerate() {
        // Start == end with a real center offset: would be a full circle,
        // degrades to zero steps.
        let geo = ArcGeometry::precalc(
            ArcDirection::Clockwise,
            INTERPOLATION_DISTANCE,
            0.0,
            0.0,
            5.0,
            5.0,
        );
        assert_eq!(geo.step_count, 0);

        let geo = ArcGeometry::precalc(
            ArcDirection::CounterClockwise,
            INTERPOLATION_DISTANCE,
            0.0,
            0.0,
            5.0,
            5.0,
        );
        assert_eq!(geo.step_count, 0);
    }

    #[test]
    fn zero_radius_is_degenerate() {
        // Center coincides with the target.
        let geo = ArcGeometry::precalc(
            ArcDirection::Clockwise,
            INTERPOLATION_DISTANCE,
            0.0,
            0.0,
            0.0,
            0.0,
        );
        assert_eq!(geo.step_count, 0);
    }
}
