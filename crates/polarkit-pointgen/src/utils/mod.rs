//! Utility modules for the point-generation pipeline.

pub mod file_io;

pub use file_io::{CommandFileReader, FileReadStats};
