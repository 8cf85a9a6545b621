//! In-memory doubles for the boundary traits.
//!
//! [`MockPort`] keeps pin state in a map and journals every write, so tests
//! can assert exact actuator pulse sequences. [`MockTelemetry`] returns
//! scripted readings, including out-of-range and unavailable ones.

use crate::{DigitalPort, Pin, PinDirection, PortError, TelemetrySource};
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct PinState {
    direction: PinDirection,
    level: bool,
}

/// Map-backed [`DigitalPort`] double.
#[derive(Debug, Default)]
pub struct MockPort {
    pins: HashMap<Pin, PinState>,
    journal: Vec<(Pin, bool)>,
    fail_write_to: Option<Pin>,
}

impl MockPort {
    /// Create an empty port with no pins configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the level an input pin will report. Configures the pin as an
    /// input if it was not configured yet.
    pub fn drive_input(&mut self, pin: Pin, high: bool) {
        self.pins.insert(
            pin,
            PinState {
                direction: PinDirection::Input,
                level: high,
            },
        );
    }

    /// Arm the port to fail the next write to `pin` with [`PortError::Io`].
    /// The failure fires once; later writes succeed again.
    pub fn fail_next_write_to(&mut self, pin: Pin) {
        self.fail_write_to = Some(pin);
    }

    /// Current level of a pin, `None` if never configured.
    pub fn level(&self, pin: Pin) -> Option<bool> {
        self.pins.get(&pin).map(|state| state.level)
    }

    /// Every `(pin, level)` write in order, including safe-off writes.
    pub fn journal(&self) -> &[(Pin, bool)] {
        &self.journal
    }

    /// The write journal filtered to a single pin.
    pub fn writes_to(&self, pin: Pin) -> Vec<bool> {
        self.journal
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|(_, level)| *level)
            .collect()
    }

    /// Drop the journal contents, keeping pin state.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }
}

impl DigitalPort for MockPort {
    fn configure(&mut self, pin: Pin, direction: PinDirection) -> Result<(), PortError> {
        trace!(pin, ?direction, "configure");
        self.pins.insert(
            pin,
            PinState {
                direction,
                level: false,
            },
        );
        Ok(())
    }

    fn write(&mut self, pin: Pin, high: bool) -> Result<(), PortError> {
        if self.fail_write_to == Some(pin) {
            self.fail_write_to = None;
            return Err(PortError::Io(pin));
        }
        let state = self
            .pins
            .get_mut(&pin)
            .ok_or(PortError::UnconfiguredPin(pin))?;
        if state.direction != PinDirection::Output {
            return Err(PortError::DirectionMismatch {
                pin,
                configured: state.direction,
                requested: PinDirection::Output,
            });
        }
        trace!(pin, high, "write");
        state.level = high;
        self.journal.push((pin, high));
        Ok(())
    }

    fn read(&mut self, pin: Pin) -> Result<bool, PortError> {
        let state = self.pins.get(&pin).ok_or(PortError::UnconfiguredPin(pin))?;
        if state.direction != PinDirection::Input {
            return Err(PortError::DirectionMismatch {
                pin,
                configured: state.direction,
                requested: PinDirection::Input,
            });
        }
        Ok(state.level)
    }
}

/// Scriptable [`TelemetrySource`] double.
#[derive(Debug, Clone)]
pub struct MockTelemetry {
    battery: Option<i32>,
    water: Option<i32>,
    dirty: bool,
}

impl MockTelemetry {
    /// A telemetry source with a healthy battery (97%), a full tank and
    /// clean waste water.
    pub fn new() -> Self {
        Self {
            battery: Some(97),
            water: Some(100),
            dirty: false,
        }
    }

    /// Script the battery reading (`None` = sensor unavailable).
    pub fn set_battery(&mut self, percent: Option<i32>) {
        self.battery = percent;
    }

    /// Script the water-level reading.
    pub fn set_water(&mut self, percent: Option<i32>) {
        self.water = percent;
    }

    /// Script the dirty-water flag.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

impl Default for MockTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySource for MockTelemetry {
    fn battery_percent(&mut self) -> Option<i32> {
        self.battery
    }

    fn water_level(&mut self) -> Option<i32> {
        self.water
    }

    fn dirt_level(&mut self) -> bool {
        self.dirty
    }
}
