//! Trajectory interpolation engine and points-file pipeline for PolarKit.
//!
//! Takes a polargraph command stream (`C00` rapid, `C01` linear, `C02`/`C03`
//! arcs, `C05` direct, plus pen and coordinate-mode commands) and densifies
//! every move into waypoints spaced 0.1 length units apart, in the exact
//! order the motion controller will play them back.
//!
//! The pieces, leaf-first:
//!
//! 1. [`interp::geometry`] — distance, angle normalization, contract constants
//! 2. [`interp::arc`] — per-arc pre-calculation (radius, angles, step count)
//! 3. [`interp::interpolator`] — the linear, circular, and direct generators
//! 4. [`command`] — the decoded command enum and the line parser
//! 5. [`output`] — waypoint sinks (points file, in-memory buffer)
//! 6. [`pipeline`] — dispatch loop, per-line diagnostics, run summary

pub mod command;
pub mod interp;
pub mod output;
pub mod pipeline;
pub mod utils;

pub use command::{parse_line, PlotterCommand};
pub use interp::{ArcDirection, ArcGeometry, MotionState, INTERPOLATION_DISTANCE};
pub use output::{BufferSink, PointSink, PointsFileWriter};
pub use pipeline::{PointsGenerator, RunSummary};
pub use utils::CommandFileReader;
