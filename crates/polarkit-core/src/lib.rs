//! Core types, errors, and machine configuration for PolarKit.
//!
//! This crate holds everything the point-generation engine and the binary
//! share: the waypoint and pen-state value types, the error taxonomy, and
//! the machine (work-envelope) configuration.

pub mod error;
pub mod machine;
pub mod types;

pub use error::{CommandError, DeviceError, Error, Result};
pub use machine::MachineConfig;
pub use types::{PenState, Waypoint};
