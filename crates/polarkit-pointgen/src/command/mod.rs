//! Plotter command types.
//!
//! Commands are decoded from the textual stream exactly once, into a closed
//! enum; everything downstream dispatches by pattern matching rather than
//! re-inspecting command code strings.

pub mod parser;

pub use parser::parse_line;

use serde::{Deserialize, Serialize};

/// One decoded motion or mode command.
///
/// Coordinates are interpreted against the motion state's coordinate mode at
/// execution time, not at parse time. For arcs, `(i, j)` is the offset from
/// the *current position* to the arc center — not from the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlotterCommand {
    /// `C00` — rapid positioning, no interpolation
    Rapid { x: f64, y: f64 },
    /// `C01` — linear interpolation to the target
    Linear { x: f64, y: f64 },
    /// `C02` — clockwise circular interpolation
    ArcCw { x: f64, y: f64, i: f64, j: f64 },
    /// `C03` — counter-clockwise circular interpolation
    ArcCcw { x: f64, y: f64, i: f64, j: f64 },
    /// `C05` — direct move, no interpolation
    Direct { x: f64, y: f64 },
    /// `C10` — raise the pen; forces absolute mode
    PenUp,
    /// `C11` — lower the pen; forces absolute mode
    PenDown,
    /// `C90` — absolute coordinate mode
    Absolute,
    /// `C91` — relative coordinate mode
    Relative,
}

impl PlotterCommand {
    /// The wire code for this command
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rapid { .. } => "C00",
            Self::Linear { .. } => "C01",
            Self::ArcCw { .. } => "C02",
            Self::ArcCcw { .. } => "C03",
            Self::Direct { .. } => "C05",
            Self::PenUp => "C10",
            Self::PenDown => "C11",
            Self::Absolute => "C90",
            Self::Relative => "C91",
        }
    }

    /// Whether this command moves the carriage
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            Self::Rapid { .. }
                | Self::Linear { .. }
                | Self::ArcCw { .. }
                | Self::ArcCcw { .. }
                | Self::Direct { .. }
        )
    }
}
