//! Development shell for the robot control core.
//!
//! Wires the controller to the in-memory hardware doubles and exposes a tiny
//! stdin REPL. Real deployments replace the doubles with GPIO-backed
//! `DigitalPort`/`TelemetrySource` implementations; nothing in the core
//! changes.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use config::{Config, File, FileFormat};
use scuttle_control::{pins, ControlConfig, ControlError, RobotController};
use scuttle_hal::mock::{MockPort, MockTelemetry};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn load_config() -> Result<ControlConfig, config::ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);
    Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .build()?
        .try_deserialize()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config().context("failed to load configuration")?;
    info!(?config, "configuration loaded");

    let mut robot = RobotController::new(MockPort::new(), MockTelemetry::new(), &config);
    robot.initialize().context("robot initialization failed")?;

    println!("scuttle ready at {}", robot.status());
    println!("commands: f/l/r move, s status, c coverage, w water, o toggle obstacle, q quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(token) = line.trim().chars().next() else {
            continue;
        };

        match token {
            'q' => break,
            's' => println!("{}", robot.status()),
            'c' => match robot.coverage_percent() {
                Ok(percent) => println!("coverage: {percent:.2}%"),
                Err(e) => println!("error: {e}"),
            },
            'w' => match robot.check_water_level() {
                Ok(level) => {
                    let dirty = robot.check_dirty_water();
                    println!("water: {level}% (dirty: {dirty})");
                }
                Err(e) => println!("error: {e}"),
            },
            'o' => {
                let present = robot.obstacle_present()?;
                robot.port_mut().drive_input(pins::INFRARED, !present);
                println!("obstacle: {}", !present);
            }
            _ => match robot.execute(token) {
                Ok(status) => println!("{status}"),
                Err(e @ ControlError::InvalidCommand(_)) => {
                    warn!(token = %token, "rejected input");
                    println!("error: {e}");
                }
                Err(e) => return Err(e).context("command execution failed"),
            },
        }
    }

    Ok(())
}
