//! # PolarKit
//!
//! A Rust-based waypoint generator for polargraph pen plotters:
//! - Reads `Cxx` motion command files (rapid, linear, CW/CCW arc, direct,
//!   pen and coordinate-mode commands)
//! - Densifies every move into waypoints at a fixed 0.1-unit spacing,
//!   matching the step playback of the embedded controller
//! - Writes the `points.txt` stream consumed by the plotting front end
//!
//! ## Architecture
//!
//! PolarKit is organized as a workspace with multiple crates:
//!
//! 1. **polarkit-core** - Shared value types, error taxonomy, machine config
//! 2. **polarkit-pointgen** - Interpolation engine, command decoding, pipeline
//! 3. **polarkit** - Main binary that integrates the crates

pub use polarkit_core::{
    CommandError, DeviceError, Error, MachineConfig, PenState, Result, Waypoint,
};

pub use polarkit_pointgen::{
    parse_line, ArcDirection, ArcGeometry, BufferSink, CommandFileReader, MotionState,
    PlotterCommand, PointSink, PointsFileWriter, PointsGenerator, RunSummary,
    INTERPOLATION_DISTANCE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
