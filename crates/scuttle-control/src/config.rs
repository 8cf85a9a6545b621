//! Controller configuration.

use serde::Deserialize;
use std::time::Duration;

/// Tunable parameters of the robot controller.
///
/// The room extent is only the coverage denominator; it never clamps
/// movement. `motor_hold_ms` is the actuator hold per pulse — non-zero on
/// physical hardware, zero everywhere else so commands return immediately.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Nominal room length in cells.
    pub room_length: u32,
    /// Nominal room width in cells.
    pub room_width: u32,
    /// Actuator hold per motor pulse, in milliseconds.
    pub motor_hold_ms: u64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        ControlConfig {
            room_length: 10,
            room_width: 10,
            motor_hold_ms: 0,
        }
    }
}

impl ControlConfig {
    /// The actuator hold as a `Duration`.
    pub fn motor_hold(&self) -> Duration {
        Duration::from_millis(self.motor_hold_ms)
    }
}
