//! Boundary capabilities consumed by the robot control core.
//!
//! The controller never touches hardware registers directly. It is handed an
//! exclusively-owned [`DigitalPort`] (boolean pin lines) and a
//! [`TelemetrySource`] (battery/water/dirt readings) at construction.
//! Deployment wires in real GPIO drivers behind these traits; tests and the
//! development binary use the doubles in [`mock`].

pub mod error;
pub mod mock;

pub use error::PortError;

use serde::{Deserialize, Serialize};

/// Board pin number, as printed on the header.
pub type Pin = u8;

/// Configured direction of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinDirection {
    /// Pin is read by the controller (sensors).
    Input,
    /// Pin is driven by the controller (motors, indicators).
    Output,
}

/// A bank of boolean digital lines, exclusively owned by one controller.
///
/// Implementations must reject access to pins that were never configured and
/// access in the wrong direction; the controller relies on both to catch
/// wiring mistakes at initialization rather than mid-run.
pub trait DigitalPort {
    /// Configure `pin` for the given direction. Must be called before the
    /// first `read` or `write` on that pin.
    fn configure(&mut self, pin: Pin, direction: PinDirection) -> Result<(), PortError>;

    /// Drive an output pin high (`true`) or low (`false`).
    fn write(&mut self, pin: Pin, high: bool) -> Result<(), PortError>;

    /// Sample an input pin.
    fn read(&mut self, pin: Pin) -> Result<bool, PortError>;
}

/// Battery, water and dirt sensor readings.
///
/// Readings are returned raw; `None` means the sensor did not answer. Range
/// validation is deliberately left to the caller — a value outside `0..=100`
/// is a sensor contract violation the control layer surfaces as an error
/// instead of clamping.
pub trait TelemetrySource {
    /// Remaining battery charge in percent, `None` if unavailable.
    fn battery_percent(&mut self) -> Option<i32>;

    /// Clean-water tank level in percent, `None` if unavailable.
    fn water_level(&mut self) -> Option<i32>;

    /// Whether the waste-water sensor reports dirty water.
    fn dirt_level(&mut self) -> bool;
}
