//! Robot control core for a grid-cell cleaning robot.
//!
//! The controller is a deterministic, single-threaded state machine: discrete
//! commands (`f`/`l`/`r`) become pose updates, actuator pulses and
//! battery-gated side effects, while a coverage tracker accumulates visited
//! cells. Hardware is reached only through the injected `scuttle-hal` traits,
//! so the whole core runs against in-memory doubles.

pub mod actuator;
pub mod config;
pub mod controller;
pub mod coverage;
pub mod error;
pub mod pins;
pub mod power;

pub use actuator::{Actuators, Rotation};
pub use config::ControlConfig;
pub use controller::{Command, RobotController};
pub use coverage::CoverageTracker;
pub use error::ControlError;
pub use power::{PowerFlags, PowerManager, LOW_BATTERY_THRESHOLD};
