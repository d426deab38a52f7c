//! Motion interpolators.
//!
//! Each generator consumes the current motion state and a command target,
//! streams waypoints into the sink, and commits the target on completion.
//! Moves whose resolved target fails the work-envelope check return `None`:
//! no waypoints, no state change.

use polarkit_core::{MachineConfig, Result, Waypoint};

use super::arc::{ArcDirection, ArcGeometry};
use super::geometry::{distance, INTERPOLATION_DISTANCE, TWO_PI};
use super::state::MotionState;
use crate::output::PointSink;

/// Linear interpolation to the target.
///
/// Emits intermediate waypoints every [`INTERPOLATION_DISTANCE`] along the
/// displacement vector, then one final waypoint exactly at the absolute
/// target so the path lands on it regardless of fractional rounding.
/// Returns the number of waypoints emitted, or `None` when the target was
/// rejected.
pub fn linear<S: PointSink>(
    state: &mut MotionState,
    machine: &MachineConfig,
    sink: &mut S,
    x: f64,
    y: f64,
) -> Result<Option<usize>> {
    let target = state.resolve(x, y);
    if !machine.is_position_valid(target.x, target.y) {
        return Ok(None);
    }

    let travel = distance(0.0, 0.0, target.dx, target.dy);
    let step_count = (travel / INTERPOLATION_DISTANCE) as usize;

    let mut emitted = 0;
    // Skip the last step and move directly to the final position instead.
    for index in 1..step_count {
        let fraction = index as f64 / step_count as f64;
        sink.point(Waypoint::new(
            state.x + target.dx * fraction,
            state.y + target.dy * fraction,
        ))?;
        emitted += 1;
    }

    sink.point(Waypoint::new(target.x, target.y))?;
    emitted += 1;

    state.commit(target.x, target.y);
    sink.end_path()?;
    Ok(Some(emitted))
}

/// Circular interpolation to the target, clockwise or counter-clockwise.
///
/// `(i, j)` is the offset from the current position to the arc center. The
/// running angle wraps across the 0/2π seam at most once per arc; the
/// pre-calculation keeps the sweep below one revolution, so a single
/// latching wrap is sufficient.
#[allow(clippy::too_many_arguments)]
pub fn circular<S: PointSink>(
    direction: ArcDirection,
    state: &mut MotionState,
    machine: &MachineConfig,
    sink: &mut S,
    x: f64,
    y: f64,
    i: f64,
    j: f64,
) -> Result<Option<usize>> {
    let target = state.resolve(x, y);
    if !machine.is_position_valid(target.x, target.y) {
        return Ok(None);
    }

    let geo = ArcGeometry::precalc(direction, INTERPOLATION_DISTANCE, target.dx, target.dy, i, j);

    let mut angle = geo.start_angle;
    let mut past_zero = false;
    let mut emitted = 0;

    for _ in 0..geo.step_count {
        match direction {
            ArcDirection::Clockwise => {
                angle -= geo.step_angle;
                if angle < 0.0 && !past_zero {
                    angle += TWO_PI;
                    past_zero = true;
                }
            }
            ArcDirection::CounterClockwise => {
                angle += geo.step_angle;
                if angle > TWO_PI && !past_zero {
                    angle -= TWO_PI;
                    past_zero = true;
                }
            }
        }

        // Position on the circle, then translated by the absolute center.
        sink.point(Waypoint::new(
            state.x + angle.cos() * geo.radius + i,
            state.y + angle.sin() * geo.radius + j,
        ))?;
        emitted += 1;
    }

    sink.point(Waypoint::new(target.x, target.y))?;
    emitted += 1;

    state.commit(target.x, target.y);
    sink.end_path()?;
    Ok(Some(emitted))
}

/// Uninterpolated repositioning (rapid and direct moves).
///
/// Commits the resolved absolute target and emits it as a single waypoint.
/// No envelope check and no end-of-path marker.
pub fn move_direct<S: PointSink>(
    state: &mut MotionState,
    sink: &mut S,
    x: f64,
    y: f64,
) -> Result<usize> {
    let target = state.resolve(x, y);
    state.commit(target.x, target.y);
    sink.point(Waypoint::new(target.x, target.y))?;
    Ok(1)
}
