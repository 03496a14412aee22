use crate::error::ConfigError;
use crate::telemetry::{BATTERY_MAX, DroneTelemetry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_STEP_DEGREES: f64 = 0.00005;
pub const DEFAULT_TICK_PERIOD_MS: u64 = 2000;
pub const DEFAULT_BATTERY_DRAIN: f64 = 0.01;

/// Random-walk parameters. These are demo constants, so they are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Half-width of the uniform per-axis offset, in degrees.
    pub step_degrees: f64,
    pub tick_period_ms: u64,
    /// Battery percentage lost per tick.
    pub battery_drain: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            step_degrees: DEFAULT_STEP_DEGREES,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            battery_drain: DEFAULT_BATTERY_DRAIN,
        }
    }
}

impl SimulatorConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_degrees.is_finite() || self.step_degrees < 0.0 {
            return Err(ConfigError::invalid(
                "simulator.step_degrees",
                format!("expected a finite non-negative number, got {}", self.step_degrees),
            ));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::invalid(
                "simulator.tick_period_ms",
                "must be greater than zero",
            ));
        }
        if !self.battery_drain.is_finite() || self.battery_drain < 0.0 {
            return Err(ConfigError::invalid(
                "simulator.battery_drain",
                format!("expected a finite non-negative number, got {}", self.battery_drain),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulator: SimulatorConfig,
    pub initial: DroneTelemetry,
    /// Seed for the random walk; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulator.validate()?;
        validate_telemetry(&self.initial)
    }
}

fn validate_telemetry(telemetry: &DroneTelemetry) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&telemetry.latitude) {
        return Err(ConfigError::invalid(
            "initial.latitude",
            format!("{} is outside [-90, 90]", telemetry.latitude),
        ));
    }
    if !(-180.0..=180.0).contains(&telemetry.longitude) {
        return Err(ConfigError::invalid(
            "initial.longitude",
            format!("{} is outside [-180, 180]", telemetry.longitude),
        ));
    }
    if !(0.0..360.0).contains(&telemetry.heading) {
        return Err(ConfigError::invalid(
            "initial.heading",
            format!("{} is outside [0, 360)", telemetry.heading),
        ));
    }
    if !(0.0..=BATTERY_MAX).contains(&telemetry.battery) {
        return Err(ConfigError::invalid(
            "initial.battery",
            format!("{} is outside [0, 100]", telemetry.battery),
        ));
    }
    if !telemetry.altitude.is_finite() || !telemetry.speed.is_finite() {
        return Err(ConfigError::invalid(
            "initial",
            "altitude and speed must be finite",
        ));
    }
    Ok(())
}
