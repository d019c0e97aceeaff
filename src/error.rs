//! Simulation error types.

use thiserror::Error;

/// Errors that can occur before a simulation starts processing items.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid frame count: {frames} (must be between 1 and {max})")]
    InvalidFrameCount { frames: usize, max: usize },

    #[error("Too many {kind}: {count} given but at most {max} allowed")]
    TooManyItems {
        kind: &'static str,
        count: usize,
        max: usize,
    },

    #[error("Replacer chose slot {slot} but only {capacity} frames exist")]
    InvalidVictim { slot: usize, capacity: usize },

    #[error("Invalid memory size: {0} (must not be negative)")]
    InvalidMemorySize(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;
