//! Command dispatch and run orchestration.
//!
//! `PointsGenerator` owns the motion state and the sink, executes decoded
//! commands in input order, and keeps the run summary. Command decoding
//! failures are warned about and skipped; only I/O failures are fatal.

use polarkit_core::{MachineConfig, PenState, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::command::{parse_line, PlotterCommand};
use crate::interp::arc::ArcDirection;
use crate::interp::interpolator;
use crate::interp::state::MotionState;
use crate::output::PointSink;
use crate::utils::file_io::CommandFileReader;

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSummary {
    /// Lines consumed from the command file
    pub lines_read: u64,
    /// Commands decoded and dispatched
    pub commands_executed: u64,
    /// Lines skipped with a diagnostic
    pub lines_skipped: u64,
    /// Moves whose target failed the envelope check
    pub moves_rejected: u64,
    /// Waypoints handed to the sink
    pub waypoints_emitted: u64,
    /// Pen raise/lower commands
    pub pen_moves: u64,
}

/// Drives the interpolation engine over a command stream.
pub struct PointsGenerator<S: PointSink> {
    state: MotionState,
    machine: MachineConfig,
    sink: S,
    summary: RunSummary,
}

impl<S: PointSink> PointsGenerator<S> {
    /// Create a generator at the home position in absolute mode
    pub fn new(machine: MachineConfig, sink: S) -> Self {
        Self {
            state: MotionState::new(),
            machine,
            sink,
            summary: RunSummary::default(),
        }
    }

    /// Current motion state
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Counters accumulated so far
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// The sink waypoints are streamed into
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Execute one decoded command.
    ///
    /// Errors only on sink I/O failure; an envelope rejection aborts the
    /// single move (no waypoints, no state change) and the run continues.
    pub fn execute(&mut self, command: &PlotterCommand) -> Result<()> {
        match *command {
            PlotterCommand::Rapid { x, y } | PlotterCommand::Direct { x, y } => {
                let emitted = interpolator::move_direct(&mut self.state, &mut self.sink, x, y)?;
                self.summary.waypoints_emitted += emitted as u64;
            }
            PlotterCommand::Linear { x, y } => {
                let outcome =
                    interpolator::linear(&mut self.state, &self.machine, &mut self.sink, x, y)?;
                self.record_move(command, outcome);
            }
            PlotterCommand::ArcCw { x, y, i, j } => {
                let outcome = interpolator::circular(
                    ArcDirection::Clockwise,
                    &mut self.state,
                    &self.machine,
                    &mut self.sink,
                    x,
                    y,
                    i,
                    j,
                )?;
                self.record_move(command, outcome);
            }
            PlotterCommand::ArcCcw { x, y, i, j } => {
                let outcome = interpolator::circular(
                    ArcDirection::CounterClockwise,
                    &mut self.state,
                    &self.machine,
                    &mut self.sink,
                    x,
                    y,
                    i,
                    j,
                )?;
                self.record_move(command, outcome);
            }
            PlotterCommand::PenUp => {
                self.state.pen = PenState::Up;
                self.state.set_relative(false);
                self.summary.pen_moves += 1;
                info!("pen up");
            }
            PlotterCommand::PenDown => {
                self.state.pen = PenState::Down;
                self.state.set_relative(false);
                self.summary.pen_moves += 1;
                info!("pen down");
            }
            PlotterCommand::Absolute => {
                self.state.set_relative(false);
                info!("absolute coordinates");
            }
            PlotterCommand::Relative => {
                self.state.set_relative(true);
                info!("relative coordinates");
            }
        }
        self.summary.commands_executed += 1;
        Ok(())
    }

    fn record_move(&mut self, command: &PlotterCommand, outcome: Option<usize>) {
        match outcome {
            Some(emitted) => self.summary.waypoints_emitted += emitted as u64,
            None => {
                debug!(code = command.code(), "move target rejected, command aborted");
                self.summary.moves_rejected += 1;
            }
        }
    }

    /// Decode and execute one line, skipping it with a warning on decode
    /// failure.
    pub fn process_line(&mut self, line: &str, line_number: u64) -> Result<()> {
        self.summary.lines_read += 1;
        match parse_line(line, line_number) {
            Ok(command) => self.execute(&command)?,
            Err(err) => {
                warn!("{err}");
                self.summary.lines_skipped += 1;
            }
        }
        Ok(())
    }

    /// Stream an entire command file through the generator.
    ///
    /// The only fatal errors are failing to open the input and sink I/O;
    /// malformed lines are skipped per [`process_line`](Self::process_line).
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let reader = CommandFileReader::new(path)?;
        info!(path = %reader.path().display(), "generating points");

        let stats = reader.read_lines(|line_number, line| self.process_line(line, line_number))?;
        debug!(
            bytes = stats.bytes_read,
            lines = stats.lines_read,
            elapsed_ms = stats.read_time_ms,
            "command file consumed"
        );
        Ok(())
    }

    /// Flush the sink and hand back the summary and the sink itself
    pub fn finish(mut self) -> Result<(RunSummary, S)> {
        self.sink.finish()?;
        info!(
            commands = self.summary.commands_executed,
            waypoints = self.summary.waypoints_emitted,
            skipped = self.summary.lines_skipped,
            "points generated"
        );
        Ok((self.summary, self.sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferSink;
    use polarkit_core::Waypoint;

    fn generator() -> PointsGenerator<BufferSink> {
        PointsGenerator::new(MachineConfig::default(), BufferSink::new())
    }

    fn run_lines(gen: &mut PointsGenerator<BufferSink>, lines: &[&str]) {
        for (index, line) in lines.iter().enumerate() {
            gen.process_line(line, index as u64 + 1).unwrap();
        }
    }

    #[test]
    fn rapid_then_linear_scenario() {
        // C00,0,0 emits one waypoint; C01,10,0 emits 99 intermediates at
        // x = 10k/100 plus the exact final waypoint.
        let mut gen = generator();
        run_lines(&mut gen, &["C00,0,0,END", "C01,10,0,END"]);

        let summary = gen.summary();
        assert_eq!(summary.commands_executed, 2);
        assert_eq!(summary.waypoints_emitted, 101);

        let points = &gen.sink().points;
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], Waypoint::new(0.0, 0.0));
        for k in 1..=99u32 {
            let expected = 10.0 * f64::from(k) / 100.0;
            assert!((points[k as usize].x - expected).abs() < 1e-12);
        }
        assert_eq!(points[100], Waypoint::new(10.0, 0.0));
        assert_eq!(gen.sink().paths_completed, 1);
    }

    #[test]
    fn mode_toggles_affect_only_later_commands() {
        let mut gen = generator();
        run_lines(
            &mut gen,
            &[
                "C01,1,0,END", // absolute
                "C91,END",     // relative from here on
                "C01,1,0,END",
                "C01,0,1,END",
            ],
        );
        assert_eq!((gen.state().x, gen.state().y), (2.0, 1.0));

        run_lines(&mut gen, &["C90,END", "C01,1,0,END"]);
        assert_eq!((gen.state().x, gen.state().y), (1.0, 0.0));
    }

    #[test]
    fn pen_commands_force_absolute_mode() {
        let mut gen = generator();
        run_lines(&mut gen, &["C91,END"]);
        assert!(gen.state().relative);

        run_lines(&mut gen, &["C11,END"]);
        assert!(!gen.state().relative);
        assert_eq!(gen.state().pen, PenState::Down);

        run_lines(&mut gen, &["C91,END", "C10,END"]);
        assert!(!gen.state().relative);
        assert_eq!(gen.state().pen, PenState::Up);
        assert_eq!(gen.summary().pen_moves, 2);
    }

    #[test]
    fn malformed_lines_are_skipped_without_losing_valid_ones() {
        let mut gen = generator();
        run_lines(
            &mut gen,
            &[
                "C01,1,0,END",
                "C01,abc,2,END", // bad numeric field
                "C07,20,END",    // unknown code
                "C01,2,0,END",
            ],
        );

        let summary = gen.summary();
        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.lines_skipped, 2);
        assert_eq!(summary.commands_executed, 2);
        assert_eq!((gen.state().x, gen.state().y), (2.0, 0.0));
    }

    #[test]
    fn rejected_move_counts_and_preserves_state() {
        let machine = MachineConfig {
            limits_enabled: true,
            ..MachineConfig::default()
        };
        let mut gen = PointsGenerator::new(machine, BufferSink::new());
        run_lines(&mut gen, &["C01,100,-100,END", "C01,9999,0,END"]);

        let summary = gen.summary();
        assert_eq!(summary.moves_rejected, 1);
        assert_eq!((gen.state().x, gen.state().y), (100.0, -100.0));
    }

    #[test]
    fn degenerate_arc_emits_single_jump() {
        let mut gen = generator();
        run_lines(&mut gen, &["C00,2,2,END", "C02,2,2,5,5,END", "C03,2,2,5,5,END"]);

        // One rapid waypoint plus one direct jump per degenerate arc.
        assert_eq!(gen.summary().waypoints_emitted, 3);
        assert_eq!(gen.sink().points.len(), 3);
        for point in &gen.sink().points {
            assert_eq!(*point, Waypoint::new(2.0, 2.0));
        }
    }

    #[test]
    fn finish_returns_summary_and_sink() {
        let mut gen = generator();
        run_lines(&mut gen, &["C00,1,1,END"]);

        let (summary, sink) = gen.finish().unwrap();
        assert_eq!(summary.waypoints_emitted, 1);
        assert_eq!(sink.points.len(), 1);
    }
}
