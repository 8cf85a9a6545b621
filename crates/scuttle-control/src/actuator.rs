//! Motor pulse driver.
//!
//! Both motors follow the same pulse shape: assert the winding-select lines,
//! assert the speed and standby lines, hold, then de-assert everything back
//! to the stopped state. The hold is a real-time delay on hardware and zero
//! everywhere else, so tests never sleep.

use crate::error::ControlError;
use crate::pins;
use scuttle_hal::{DigitalPort, Pin};
use std::thread;
use std::time::Duration;

/// Turn direction for the rotation motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Counter-clockwise, 90° left.
    Left,
    /// Clockwise, 90° right.
    Right,
}

/// Pulse driver for the wheel and rotation motors.
#[derive(Debug, Clone)]
pub struct Actuators {
    hold: Duration,
}

impl Actuators {
    /// Create a pulse driver with the given hold duration.
    ///
    /// # Arguments
    ///
    /// * `hold`: How long to keep the motor lines asserted per pulse. Use
    ///   `Duration::ZERO` off-hardware.
    pub fn new(hold: Duration) -> Self {
        Actuators { hold }
    }

    /// Drive the wheel motor for one forward step.
    ///
    /// The wheel motor only ever runs clockwise; there is no reverse.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::Actuator` if the port fails mid-pulse. The
    /// motor lines are de-asserted (best effort) before the error propagates.
    pub fn pulse_wheel<P: DigitalPort>(&self, port: &mut P) -> Result<(), ControlError> {
        const LINES: [Pin; 4] = [
            pins::WHEEL_IN1,
            pins::WHEEL_IN2,
            pins::WHEEL_PWM,
            pins::STANDBY,
        ];
        // Clockwise: IN1 high, IN2 low
        self.pulse(
            port,
            &[
                (pins::WHEEL_IN1, true),
                (pins::WHEEL_IN2, false),
                (pins::WHEEL_PWM, true),
                (pins::STANDBY, true),
            ],
            &LINES,
        )
    }

    /// Drive the rotation motor for one 90° turn.
    ///
    /// # Arguments
    ///
    /// * `port`: The digital port the motor lines live on.
    /// * `rotation`: Which winding to energize.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::Actuator` if the port fails mid-pulse, with
    /// the motor lines de-asserted.
    pub fn pulse_rotation<P: DigitalPort>(
        &self,
        port: &mut P,
        rotation: Rotation,
    ) -> Result<(), ControlError> {
        const LINES: [Pin; 4] = [
            pins::ROTATION_IN1,
            pins::ROTATION_IN2,
            pins::ROTATION_PWM,
            pins::STANDBY,
        ];
        let (in1, in2) = match rotation {
            Rotation::Left => (true, false),
            Rotation::Right => (false, true),
        };
        self.pulse(
            port,
            &[
                (pins::ROTATION_IN1, in1),
                (pins::ROTATION_IN2, in2),
                (pins::ROTATION_PWM, true),
                (pins::STANDBY, true),
            ],
            &LINES,
        )
    }

    fn pulse<P: DigitalPort>(
        &self,
        port: &mut P,
        asserts: &[(Pin, bool)],
        lines: &[Pin],
    ) -> Result<(), ControlError> {
        for &(pin, high) in asserts {
            if let Err(e) = port.write(pin, high) {
                Self::safe_off(port, lines);
                return Err(e.into());
            }
        }

        if !self.hold.is_zero() {
            // Wait for the motor to actually move
            thread::sleep(self.hold);
        }

        for &pin in lines {
            if let Err(e) = port.write(pin, false) {
                Self::safe_off(port, lines);
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// De-assert every motor line, ignoring secondary failures. The safe
    /// state is all-low regardless of how far the pulse got.
    fn safe_off<P: DigitalPort>(port: &mut P, lines: &[Pin]) {
        for &pin in lines {
            let _ = port.write(pin, false);
        }
    }
}
