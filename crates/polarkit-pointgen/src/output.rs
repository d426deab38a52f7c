//! Waypoint sinks.
//!
//! Interpolators stream waypoints into a [`PointSink`] as they are computed,
//! so a long toolpath never has to be materialized in memory.

use polarkit_core::{Result, Waypoint};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receiver for the waypoint stream.
///
/// Waypoints arrive in strict traversal order. `end_path` marks the end of
/// one interpolated command's segment; rapid and direct moves do not produce
/// the marker, so their single waypoint attaches to the following segment —
/// the layout the controller's playback expects.
pub trait PointSink {
    /// Accept the next waypoint
    fn point(&mut self, waypoint: Waypoint) -> Result<()>;

    /// Mark the end of an interpolated path segment
    fn end_path(&mut self) -> Result<()>;

    /// Flush any buffered output once the run is complete
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes the points file consumed by the plotting front end.
///
/// Each waypoint becomes a comma-terminated `(x,y)` pair; a path segment is
/// one line. Creating the writer truncates any previous points file.
pub struct PointsFileWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    points_written: u64,
}

impl PointsFileWriter {
    /// Create (or truncate) the points file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            points_written: 0,
        })
    }

    /// Path of the points file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of waypoints written so far
    pub fn points_written(&self) -> u64 {
        self.points_written
    }
}

impl PointSink for PointsFileWriter {
    fn point(&mut self, waypoint: Waypoint) -> Result<()> {
        write!(self.writer, "{},", waypoint)?;
        self.points_written += 1;
        Ok(())
    }

    fn end_path(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // The file always ends with a line break, even after a trailing
        // uninterpolated move.
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink, used by tests and by callers that post-process paths.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    /// All waypoints in traversal order
    pub points: Vec<Waypoint>,
    /// Number of completed path segments
    pub paths_completed: usize,
}

impl BufferSink {
    /// Create an empty buffer sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointSink for BufferSink {
    fn point(&mut self, waypoint: Waypoint) -> Result<()> {
        self.points.push(waypoint);
        Ok(())
    }

    fn end_path(&mut self) -> Result<()> {
        self.paths_completed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_writer_formats_points_and_segments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");

        let mut writer = PointsFileWriter::create(&path).unwrap();
        writer.point(Waypoint::new(0.0, 0.0)).unwrap();
        writer.point(Waypoint::new(0.1, 0.0)).unwrap();
        writer.end_path().unwrap();
        writer.point(Waypoint::new(2.5, -1.0)).unwrap();
        writer.finish().unwrap();
        assert_eq!(writer.points_written(), 3);
        drop(writer);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "(0,0),(0.1,0),\n(2.5,-1),\n");
    }

    #[test]
    fn create_truncates_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "stale").unwrap();

        let mut writer = PointsFileWriter::create(&path).unwrap();
        writer.finish().unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
    }
}
