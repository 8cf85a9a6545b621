//! Fixed pin assignments of the robot's control board.
//!
//! Numbers are board pin positions, matching the silkscreen on the driver
//! carrier. The wheel and rotation motors share one TB6612-style dual driver,
//! hence the `IN1`/`IN2`/`PWM` triples and the common standby line.

use scuttle_hal::Pin;

/// Recharge indicator LED.
pub const RECHARGE_LED: Pin = 12;
/// Cleaning system (vacuum + brush) enable.
pub const CLEANING_SYSTEM: Pin = 13;
/// Infrared obstacle sensor (input).
pub const INFRARED: Pin = 15;

/// Wheel motor speed line (PWMA).
pub const WHEEL_PWM: Pin = 16;
/// Wheel motor winding input 2 (AIN2).
pub const WHEEL_IN2: Pin = 18;
/// Wheel motor winding input 1 (AIN1).
pub const WHEEL_IN1: Pin = 22;

/// Rotation motor winding input 1 (BIN1).
pub const ROTATION_IN1: Pin = 29;
/// Rotation motor winding input 2 (BIN2).
pub const ROTATION_IN2: Pin = 31;
/// Rotation motor speed line (PWMB).
pub const ROTATION_PWM: Pin = 32;
/// Motor driver standby (shared by both motors).
pub const STANDBY: Pin = 33;

/// Every pin the controller drives, in configuration order.
pub const OUTPUTS: [Pin; 9] = [
    RECHARGE_LED,
    CLEANING_SYSTEM,
    WHEEL_PWM,
    WHEEL_IN2,
    WHEEL_IN1,
    ROTATION_IN1,
    ROTATION_IN2,
    ROTATION_PWM,
    STANDBY,
];
