//! Runtime configuration stored as config.json in the working directory.
//!
//! A missing, partial, or malformed file degrades to defaults with a
//! warning; the file is (re)written on exit.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tracing::{debug, warn};

use crate::constants::{DEFAULT_BAUD_RATE, JOINT_COUNT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub serial: SerialConfig,
    pub robot_arm: RobotArmConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub port: String,
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: String::new(),
            baudrate: DEFAULT_BAUD_RATE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotArmConfig {
    /// Startup pose, applied to both arms independently.
    pub initial_angles: [f32; JOINT_COUNT],
}

impl Default for RobotArmConfig {
    fn default() -> Self {
        Self {
            initial_angles: [0.0; JOINT_COUNT],
        }
    }
}

/// Window geometry, saved on exit and restored on launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub w: Option<f32>,
    pub h: Option<f32>,
}

impl Config {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(config) => {
                    debug!(path = %path.display(), "Config loaded");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    warn!(error = %e, "Failed to save config");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_without_a_file() {
        let config = Config::default();
        assert_eq!(config.serial.baudrate, 9600);
        assert!(config.serial.port.is_empty());
        assert_eq!(config.robot_arm.initial_angles, [0.0; JOINT_COUNT]);
        assert!(config.window.x.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let json = r#"{ "serial": { "port": "/dev/ttyUSB0" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.serial.port, "/dev/ttyUSB0");
        assert_eq!(config.serial.baudrate, 9600);
        assert_eq!(config.robot_arm.initial_angles, [0.0; JOINT_COUNT]);
    }

    #[test]
    fn full_file_round_trips() {
        let json = r#"{
            "serial": { "port": "COM3", "baudrate": 115200 },
            "robot_arm": { "initial_angles": [10.0, -20.0, 30.0, -40.0, 50.0] },
            "window": { "x": 100.0, "y": 50.0, "w": 1200.0, "h": 900.0 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.serial.baudrate, 115_200);
        assert_eq!(config.robot_arm.initial_angles[3], -40.0);
        assert_eq!(config.window.w, Some(1200.0));

        let back: Config = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(back.serial.port, "COM3");
        assert_eq!(back.robot_arm.initial_angles, config.robot_arm.initial_angles);
    }
}
