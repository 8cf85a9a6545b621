//! This module defines the error types used by the `scuttle-hal` crate.

use crate::{Pin, PinDirection};
use thiserror::Error;

/// Error type for digital port operations.
///
/// This enum encapsulates all possible errors that can occur when driving or
/// sampling pin lines, such as access to unconfigured pins or accesses that
/// disagree with the configured direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// The pin was read or written before it was configured.
    #[error("pin {0} accessed before configuration")]
    UnconfiguredPin(Pin),

    /// The pin was accessed against its configured direction, e.g. a write
    /// to an input pin.
    #[error("pin {pin} is configured as {configured:?} but was accessed as {requested:?}")]
    DirectionMismatch {
        /// The pin that was accessed.
        pin: Pin,
        /// The direction the pin was configured with.
        configured: PinDirection,
        /// The direction implied by the access.
        requested: PinDirection,
    },

    /// The underlying port hardware failed to complete the access.
    #[error("digital port I/O failure on pin {0}")]
    Io(Pin),
}
