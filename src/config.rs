//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::b1248::protocol::{DEFAULT_MODE, DEFAULT_SPEED, SPEED_MAX};
use crate::error::{BadgeLinkError, Result};
use crate::serial::{BADGE_BAUD_RATE, DEFAULT_DEVICE_PATH};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub serial: SerialConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Serial port configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SerialConfig {
    #[serde(default = "default_serial_port")]
    pub port: String,

    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
}

/// Display defaults applied when the command line does not override them
#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_speed")]
    pub speed: u8,

    #[serde(default = "default_mode")]
    pub mode: char,
}

// Default value functions
fn default_serial_port() -> String { DEFAULT_DEVICE_PATH.to_string() }
fn default_baud_rate() -> u32 { BADGE_BAUD_RATE }

fn default_speed() -> u8 { DEFAULT_SPEED }
fn default_mode() -> char { DEFAULT_MODE }

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: default_serial_port(),
            baud_rate: default_baud_rate(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            mode: default_mode(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        if self.serial.port.is_empty() {
            return Err(BadgeLinkError::Config(
                toml::de::Error::custom("serial port cannot be empty")
            ));
        }

        if self.serial.baud_rate == 0 {
            return Err(BadgeLinkError::Config(
                toml::de::Error::custom("baud_rate must be greater than 0")
            ));
        }

        if self.display.speed > SPEED_MAX {
            return Err(BadgeLinkError::Config(
                toml::de::Error::custom("display speed must be between 0 and 9")
            ));
        }

        if !self.display.mode.is_ascii_uppercase() {
            return Err(BadgeLinkError::Config(
                toml::de::Error::custom("display mode must be an uppercase ASCII letter")
            ));
        }

        Ok(())
    }
}
