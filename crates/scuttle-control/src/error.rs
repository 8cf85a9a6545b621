//! This module defines the error types used by the `scuttle-control` crate.

use scuttle_hal::PortError;
use thiserror::Error;

/// Error type for robot control operations.
///
/// Every failure surfaces synchronously to the command caller; there are no
/// retries anywhere in the core. Low battery is deliberately *not* in this
/// enum — a refused command is a normal outcome reported through the `!`
/// status prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The post-initialization status check did not report `(0,0,N)`.
    /// Fatal to the caller's setup sequence.
    #[error("initialization check failed, robot reported {0}")]
    Initialization(String),

    /// The command token is not one of `f`, `l`, `r`. Recoverable; no robot
    /// state was mutated.
    #[error("invalid command token {0:?}")]
    InvalidCommand(char),

    /// A telemetry reading was outside `0..=100`. Sensor contract violation,
    /// propagated rather than clamped.
    #[error("telemetry reading {0} outside the 0..=100 contract")]
    OutOfRangeReading(i32),

    /// The configured room has zero area, so coverage is undefined.
    #[error("room area is zero, coverage is undefined")]
    DivisionByZeroArea,

    /// The digital port failed during an actuator pulse or sensor access.
    /// Motor lines are left de-asserted before this propagates.
    #[error("actuator I/O failure")]
    Actuator(#[from] PortError),
}
