//! The robot controller: command interpretation over injected hardware.

use crate::actuator::{Actuators, Rotation};
use crate::config::ControlConfig;
use crate::coverage::CoverageTracker;
use crate::error::ControlError;
use crate::pins;
use crate::power::PowerManager;
use scuttle_hal::{DigitalPort, PinDirection, TelemetrySource};
use scuttle_pose::Pose;
use tracing::{debug, info, warn};

/// A movement command, parsed from its single-character token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one cell ahead (`f`).
    Forward,
    /// Rotate 90° counter-clockwise in place (`l`).
    TurnLeft,
    /// Rotate 90° clockwise in place (`r`).
    TurnRight,
}

impl TryFrom<char> for Command {
    type Error = ControlError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token {
            'f' => Ok(Command::Forward),
            'l' => Ok(Command::TurnLeft),
            'r' => Ok(Command::TurnRight),
            other => Err(ControlError::InvalidCommand(other)),
        }
    }
}

/// Deterministic control core of the cleaning robot.
///
/// Owns its digital port and telemetry source exclusively; all processing is
/// synchronous and one command runs to completion before the next. A command
/// either completes, is refused (low battery / obstacle, both without
/// mutation), or fails with a [`ControlError`] before mutating the pose.
pub struct RobotController<P, T> {
    port: P,
    telemetry: T,
    pose: Pose,
    power: PowerManager,
    actuators: Actuators,
    coverage: CoverageTracker,
}

impl<P, T> RobotController<P, T>
where
    P: DigitalPort,
    T: TelemetrySource,
{
    /// Build a controller over the injected capabilities.
    ///
    /// The controller is not ready until [`RobotController::initialize`]
    /// has run.
    pub fn new(port: P, telemetry: T, config: &ControlConfig) -> Self {
        RobotController {
            port,
            telemetry,
            pose: Pose::origin(),
            power: PowerManager::new(),
            actuators: Actuators::new(config.motor_hold()),
            coverage: CoverageTracker::new(config.room_length, config.room_width),
        }
    }

    /// Configure all pins and reset the robot to the origin pose.
    ///
    /// The visited-cell set is reset to exactly the origin cell.
    ///
    /// # Errors
    ///
    /// * `ControlError::Initialization` if the post-init status is not
    ///   `(0,0,N)` — fatal to the caller's setup sequence.
    /// * `ControlError::Actuator` if pin configuration fails.
    pub fn initialize(&mut self) -> Result<(), ControlError> {
        self.port.configure(pins::INFRARED, PinDirection::Input)?;
        for pin in pins::OUTPUTS {
            self.port.configure(pin, PinDirection::Output)?;
        }

        self.pose = Pose::origin();
        self.coverage.reset();
        self.coverage.record_visit(self.pose.position);

        let status = self.status();
        if status != "(0,0,N)" {
            return Err(ControlError::Initialization(status));
        }
        info!("robot initialized at origin");
        Ok(())
    }

    /// The textual pose status, exactly `"(x,y,h)"`.
    pub fn status(&self) -> String {
        self.pose.to_string()
    }

    /// Execute a single command token (`f`, `l` or `r`).
    ///
    /// Every call re-reads the battery and updates the cleaning-system /
    /// recharge-indicator outputs first. With the battery at or below
    /// [`crate::LOW_BATTERY_THRESHOLD`] the command is refused and the
    /// status comes back prefixed with `!`, with no pose change and no
    /// actuator pulse. A forward command blocked by an obstacle is the one
    /// "no mutation but no error" outcome: the returned string carries the
    /// current pose followed by the cell that would have been reached.
    ///
    /// # Errors
    ///
    /// * `ControlError::InvalidCommand` for an unrecognized token (no state
    ///   mutation).
    /// * `ControlError::OutOfRangeReading` from the battery check.
    /// * `ControlError::Actuator` if the port fails.
    pub fn execute(&mut self, token: char) -> Result<String, ControlError> {
        let flags = self
            .power
            .update_power_profile(&mut self.port, &mut self.telemetry)?;
        if flags.recharge_indicator_on {
            warn!(token = %token, status = %self.pose, "low battery, command refused");
            return Ok(format!("!{}", self.status()));
        }

        let command = Command::try_from(token)?;
        match command {
            Command::Forward => {
                if self.obstacle_present()? {
                    let blocked = self.pose.position.translated(self.pose.heading);
                    warn!(status = %self.pose, target = %blocked, "obstacle ahead, forward refused");
                    // Historical composite format: current pose tuple
                    // followed by the blocked target cell tuple.
                    return Ok(format!("{}{}", self.pose, blocked));
                }
                self.actuators.pulse_wheel(&mut self.port)?;
                self.pose = self.pose.advanced();
            }
            Command::TurnLeft => {
                self.actuators
                    .pulse_rotation(&mut self.port, Rotation::Left)?;
                self.pose = self.pose.turned_left();
            }
            Command::TurnRight => {
                self.actuators
                    .pulse_rotation(&mut self.port, Rotation::Right)?;
                self.pose = self.pose.turned_right();
            }
        }

        self.coverage.record_visit(self.pose.position);
        debug!(?command, status = %self.pose, "command executed");
        Ok(self.status())
    }

    /// Sample the infrared obstacle sensor.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::Actuator` if the port read fails.
    pub fn obstacle_present(&mut self) -> Result<bool, ControlError> {
        Ok(self.port.read(pins::INFRARED)?)
    }

    /// Coverage as a percentage of the nominal room area.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::DivisionByZeroArea` for a zero-area room.
    pub fn coverage_percent(&self) -> Result<f64, ControlError> {
        self.coverage.percent()
    }

    /// Clean-water tank level; see [`PowerManager::check_water_level`].
    pub fn check_water_level(&mut self) -> Result<i32, ControlError> {
        self.power.check_water_level(&mut self.telemetry)
    }

    /// Waste-water dirt flag; see [`PowerManager::check_dirty_water`].
    pub fn check_dirty_water(&mut self) -> bool {
        self.power.check_dirty_water(&mut self.telemetry)
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Whether the cleaning system was on after the last profile update.
    pub fn cleaning_system_on(&self) -> bool {
        self.power.flags().cleaning_system_on
    }

    /// Whether the recharge indicator was on after the last profile update.
    pub fn recharge_indicator_on(&self) -> bool {
        self.power.flags().recharge_indicator_on
    }

    /// Number of distinct cells visited since initialization.
    pub fn visited_count(&self) -> usize {
        self.coverage.visited_count()
    }

    /// Shared access to the underlying port (telemetry scripting, tests).
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Exclusive access to the underlying port.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Exclusive access to the underlying telemetry source.
    pub fn telemetry_mut(&mut self) -> &mut T {
        &mut self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scuttle_hal::mock::{MockPort, MockTelemetry};
    use scuttle_pose::{Heading, Position};

    fn robot() -> RobotController<MockPort, MockTelemetry> {
        robot_with_battery(Some(97))
    }

    fn robot_with_battery(battery: Option<i32>) -> RobotController<MockPort, MockTelemetry> {
        let port = MockPort::new();
        let mut telemetry = MockTelemetry::new();
        telemetry.set_battery(battery);
        let mut controller =
            RobotController::new(port, telemetry, &ControlConfig::default());
        controller.initialize().unwrap();
        controller
    }

    #[test]
    fn test_initialize_reports_origin() {
        let robot = robot();
        assert_eq!(robot.status(), "(0,0,N)");
        // Only the origin cell is visited after initialization
        assert_eq!(robot.visited_count(), 1);
    }

    #[test]
    fn test_forward_advances_one_cell_and_pulses_wheel_once() {
        let mut robot = robot();
        robot.port_mut().clear_journal();

        let status = robot.execute('f').unwrap();
        assert_eq!(status, "(0,1,N)");
        // Exactly one wheel pulse: speed line went high once, then low
        assert_eq!(robot.port().writes_to(pins::WHEEL_PWM), vec![true, false]);
    }

    #[test]
    fn test_turns_update_heading_only() {
        let mut robot = robot();
        assert_eq!(robot.execute('r').unwrap(), "(0,0,E)");
        assert_eq!(robot.execute('r').unwrap(), "(0,0,S)");
        assert_eq!(robot.execute('l').unwrap(), "(0,0,E)");
        assert_eq!(robot.pose().position, Position::new(0, 0));
        // Rotation pulses drove the rotation speed line, never the wheel's
        assert!(robot.port().writes_to(pins::WHEEL_PWM).is_empty());
        assert_eq!(robot.port().writes_to(pins::ROTATION_PWM).len(), 6);
    }

    #[test]
    fn test_blocked_forward_reports_both_tuples_without_moving() {
        let mut robot = robot();
        robot.port_mut().drive_input(pins::INFRARED, true);
        robot.port_mut().clear_journal();

        let status = robot.execute('f').unwrap();
        assert_eq!(status, "(0,0,N)(0,1)");
        assert_eq!(robot.status(), "(0,0,N)");
        assert_eq!(robot.visited_count(), 1);
        // No wheel pulse; only the power-profile indicator writes happened
        assert!(robot.port().writes_to(pins::WHEEL_PWM).is_empty());
        assert!(robot.port().writes_to(pins::STANDBY).is_empty());
    }

    #[test]
    fn test_blocked_forward_uses_current_heading_delta() {
        let mut robot = robot();
        robot.execute('r').unwrap(); // (0,0,E)
        robot.port_mut().drive_input(pins::INFRARED, true);

        let status = robot.execute('f').unwrap();
        assert_eq!(status, "(0,0,E)(1,0)");
    }

    #[test]
    fn test_low_battery_refuses_every_command() {
        for token in ['f', 'l', 'r'] {
            let mut robot = robot_with_battery(Some(10));
            robot.port_mut().clear_journal();

            let status = robot.execute(token).unwrap();
            assert_eq!(status, "!(0,0,N)");
            assert_eq!(robot.status(), "(0,0,N)");
            assert!(robot.recharge_indicator_on());
            assert!(!robot.cleaning_system_on());
            // No motor line was touched
            assert!(robot.port().writes_to(pins::STANDBY).is_empty());
            assert_eq!(robot.port().level(pins::RECHARGE_LED), Some(true));
            assert_eq!(robot.port().level(pins::CLEANING_SYSTEM), Some(false));
        }
    }

    #[test]
    fn test_unavailable_battery_counts_as_empty() {
        let mut robot = robot_with_battery(None);
        assert_eq!(robot.execute('f').unwrap(), "!(0,0,N)");
    }

    #[test]
    fn test_battery_11_allows_commands() {
        let mut robot = robot_with_battery(Some(11));
        assert_eq!(robot.execute('f').unwrap(), "(0,1,N)");
        assert!(robot.cleaning_system_on());
        assert!(!robot.recharge_indicator_on());
    }

    #[test]
    fn test_out_of_range_battery_propagates() {
        for bad in [101, -1] {
            let mut robot = robot();
            robot.telemetry_mut().set_battery(Some(bad));
            let result = robot.execute('f');
            assert_eq!(result, Err(ControlError::OutOfRangeReading(bad)));
            // Pose untouched by the failed command
            assert_eq!(robot.status(), "(0,0,N)");
        }
    }

    #[test]
    fn test_invalid_token_leaves_status_unchanged() {
        let mut robot = robot();
        let result = robot.execute('x');
        assert_eq!(result, Err(ControlError::InvalidCommand('x')));
        assert_eq!(robot.status(), "(0,0,N)");
        assert_eq!(robot.visited_count(), 1);
    }

    #[test]
    fn test_command_sequence_ffrfff() {
        let mut robot = robot();
        let mut status = String::new();
        for token in ['f', 'f', 'r', 'f', 'f', 'f'] {
            status = robot.execute(token).unwrap();
        }
        // (0,0,N) →f (0,1) →f (0,2) →r E →f (1,2) →f (2,2) →f (3,2)
        assert_eq!(status, "(3,2,E)");
    }

    #[test]
    fn test_square_walk_returns_to_origin() {
        let mut robot = robot();
        let mut status = String::new();
        for _ in 0..4 {
            robot.execute('f').unwrap();
            status = robot.execute('r').unwrap();
        }
        assert_eq!(status, "(0,0,N)");
        // Four distinct cells on the unit square
        assert_eq!(robot.visited_count(), 4);
    }

    #[test]
    fn test_coverage_accumulates_over_commands() {
        // 10x10 room (default config): 3 distinct cells after f,f = 3%
        let mut robot = robot();
        robot.execute('f').unwrap();
        robot.execute('f').unwrap();
        robot.execute('l').unwrap(); // turn revisits (0,2)
        let percent = robot.coverage_percent().unwrap();
        assert!((percent - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_area_room_coverage_error() {
        let config = ControlConfig {
            room_length: 0,
            room_width: 0,
            motor_hold_ms: 0,
        };
        let mut robot =
            RobotController::new(MockPort::new(), MockTelemetry::new(), &config);
        robot.initialize().unwrap();
        assert_eq!(
            robot.coverage_percent(),
            Err(ControlError::DivisionByZeroArea)
        );
    }

    #[test]
    fn test_obstacle_sensor_passthrough() {
        let mut robot = robot();
        assert_eq!(robot.obstacle_present(), Ok(false));
        robot.port_mut().drive_input(pins::INFRARED, true);
        assert_eq!(robot.obstacle_present(), Ok(true));
    }

    #[test]
    fn test_turning_is_not_blocked_by_obstacle() {
        let mut robot = robot();
        robot.port_mut().drive_input(pins::INFRARED, true);
        assert_eq!(robot.execute('l').unwrap(), "(0,0,W)");
    }

    #[test]
    fn test_actuator_failure_surfaces_and_pose_is_unchanged() {
        let mut robot = robot();
        robot.port_mut().fail_next_write_to(pins::WHEEL_PWM);
        let result = robot.execute('f');
        assert!(matches!(result, Err(ControlError::Actuator(_))));
        assert_eq!(robot.status(), "(0,0,N)");
        // Motor lines parked low by the safe-off path
        for pin in [pins::WHEEL_IN1, pins::WHEEL_IN2, pins::WHEEL_PWM, pins::STANDBY] {
            assert_eq!(robot.port().level(pin), Some(false));
        }
    }

    #[test]
    fn test_water_queries_do_not_gate_movement() {
        let mut robot = robot();
        robot.telemetry_mut().set_water(Some(0));
        robot.telemetry_mut().set_dirty(true);
        assert_eq!(robot.check_water_level(), Ok(0));
        assert!(robot.check_dirty_water());
        // Empty tank and dirty water never block a command
        assert_eq!(robot.execute('f').unwrap(), "(0,1,N)");
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::try_from('f'), Ok(Command::Forward));
        assert_eq!(Command::try_from('l'), Ok(Command::TurnLeft));
        assert_eq!(Command::try_from('r'), Ok(Command::TurnRight));
        assert_eq!(
            Command::try_from('F'),
            Err(ControlError::InvalidCommand('F'))
        );
    }

    #[test]
    fn test_reinitialize_resets_pose_and_coverage() {
        let mut robot = robot();
        robot.execute('f').unwrap();
        robot.execute('r').unwrap();
        assert_eq!(robot.status(), "(0,1,E)");

        robot.initialize().unwrap();
        assert_eq!(robot.status(), "(0,0,N)");
        assert_eq!(robot.visited_count(), 1);
        assert_eq!(robot.pose().heading, Heading::North);
    }
}
