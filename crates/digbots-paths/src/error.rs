use digbots_core::{Point, Range};
use log::warn;
use thiserror::Error;

/// Why a query produced no result.
///
/// None of these are fatal: bots poll paths every tick and a wall that is
/// not dug yet is an ordinary, transient reason for a query to fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PathError {
    #[error("{cell} lies outside the grid bounds {bounds}")]
    OutOfBounds { cell: Point, bounds: Range },
    #[error("{cell} must be an empty cell")]
    PreconditionViolation { cell: Point },
    #[error("no path from {from} to {to}")]
    Unreachable { from: Point, to: Point },
    #[error("patrol stuck at {at} with {remaining} cells uncovered")]
    DeadEnd { at: Point, remaining: usize },
    #[error("patrol gave up after {steps} steps with {remaining} cells uncovered")]
    StepLimitExceeded { steps: usize, remaining: usize },
}

/// Collapse a failed query into an empty result, logging why.
pub(crate) fn fail_soft<T: Default>(op: &str, result: Result<T, PathError>) -> T {
    result.unwrap_or_else(|e| {
        warn!("{op}: {e}");
        T::default()
    })
}
