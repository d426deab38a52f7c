//! Command-file reading.
//!
//! Streams the command file line by line so arbitrarily long toolpaths never
//! have to be held in memory, and reports read statistics for the run log.

use polarkit_core::{Error, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Buffer size for reading large command files (256 KB)
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Statistics from one pass over the command file.
#[derive(Debug, Clone)]
pub struct FileReadStats {
    /// Total bytes read
    pub bytes_read: u64,
    /// Total lines read
    pub lines_read: u64,
    /// File size in bytes
    pub file_size: u64,
    /// Time taken to read (milliseconds)
    pub read_time_ms: u64,
}

/// Streaming reader for plotter command files.
pub struct CommandFileReader {
    path: PathBuf,
    file_size: u64,
}

impl CommandFileReader {
    /// Create a reader for the command file at `path`.
    ///
    /// Fails when the path does not exist or is not a regular file — the
    /// one error that aborts a whole run.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::other(format!(
                "Command file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(Error::other(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let metadata = fs::metadata(&path)?;
        let file_size = metadata.len();

        Ok(Self { path, file_size })
    }

    /// Get file size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stream the file through a per-line callback.
    ///
    /// The callback receives the 1-based line number and the line content
    /// without its terminator.
    pub fn read_lines<F>(&self, mut callback: F) -> Result<FileReadStats>
    where
        F: FnMut(u64, &str) -> Result<()>,
    {
        let start_time = SystemTime::now();
        let file = File::open(&self.path)?;
        let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

        let mut lines_read = 0u64;
        let mut bytes_read = 0u64;

        for line_result in reader.lines() {
            let line = line_result?;
            bytes_read += line.len() as u64 + 1; // +1 for newline
            lines_read += 1;

            callback(lines_read, &line)?;
        }

        let elapsed = start_time.elapsed().unwrap_or_default().as_millis() as u64;

        Ok(FileReadStats {
            bytes_read,
            lines_read,
            file_size: self.file_size,
            read_time_ms: elapsed,
        })
    }
}
