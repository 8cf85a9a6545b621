//! Battery-gated power profile and auxiliary tank checks.

use crate::error::ControlError;
use crate::pins;
use scuttle_hal::{DigitalPort, TelemetrySource};
use tracing::{debug, warn};

/// Battery percentage at or below which the robot refuses to act and asks
/// for a recharge.
pub const LOW_BATTERY_THRESHOLD: i32 = 10;

/// Cleaning system / recharge indicator state.
///
/// After any successful [`PowerManager::update_power_profile`] call exactly
/// one of the two flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerFlags {
    /// Vacuum and brush are powered.
    pub cleaning_system_on: bool,
    /// Recharge LED is lit; the robot will not accept movement commands.
    pub recharge_indicator_on: bool,
}

/// Owns the battery-driven enable/disable of the cleaning system and the
/// recharge indicator, plus the water side-channel queries.
#[derive(Debug, Default)]
pub struct PowerManager {
    flags: PowerFlags,
}

impl PowerManager {
    /// Create a manager with both outputs off.
    pub fn new() -> Self {
        Self::default()
    }

    /// The flags as of the last profile update.
    pub fn flags(&self) -> PowerFlags {
        self.flags
    }

    /// Re-read the battery and drive the cleaning-system and recharge-LED
    /// outputs accordingly.
    ///
    /// Runs on every command, never cached, so low/high transitions are
    /// observable per command. An unavailable reading counts as 0%.
    ///
    /// # Errors
    ///
    /// * `ControlError::OutOfRangeReading` if the sensor reports a value
    ///   outside `0..=100` — a contract violation, not clamped.
    /// * `ControlError::Actuator` if an output pin write fails.
    pub fn update_power_profile<P, T>(
        &mut self,
        port: &mut P,
        telemetry: &mut T,
    ) -> Result<PowerFlags, ControlError>
    where
        P: DigitalPort,
        T: TelemetrySource,
    {
        let charge = telemetry.battery_percent().unwrap_or(0);
        if !(0..=100).contains(&charge) {
            return Err(ControlError::OutOfRangeReading(charge));
        }

        if charge > LOW_BATTERY_THRESHOLD {
            port.write(pins::CLEANING_SYSTEM, true)?;
            port.write(pins::RECHARGE_LED, false)?;
            self.flags = PowerFlags {
                cleaning_system_on: true,
                recharge_indicator_on: false,
            };
            debug!(charge, "cleaning system enabled");
        } else {
            port.write(pins::RECHARGE_LED, true)?;
            port.write(pins::CLEANING_SYSTEM, false)?;
            self.flags = PowerFlags {
                cleaning_system_on: false,
                recharge_indicator_on: true,
            };
            warn!(charge, "battery low, recharge indicator on");
        }
        Ok(self.flags)
    }

    /// Clean-water tank level in percent. An unavailable reading counts
    /// as 0%.
    ///
    /// Independent side-channel query; not part of the movement gate.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::OutOfRangeReading` for values outside
    /// `0..=100`.
    pub fn check_water_level<T: TelemetrySource>(
        &self,
        telemetry: &mut T,
    ) -> Result<i32, ControlError> {
        let level = telemetry.water_level().unwrap_or(0);
        if !(0..=100).contains(&level) {
            return Err(ControlError::OutOfRangeReading(level));
        }
        Ok(level)
    }

    /// Whether the waste-water sensor reports dirty water.
    pub fn check_dirty_water<T: TelemetrySource>(&self, telemetry: &mut T) -> bool {
        telemetry.dirt_level()
    }
}
