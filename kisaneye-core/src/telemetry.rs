use crate::field::GeoPoint;
use serde::{Deserialize, Serialize};

pub const BATTERY_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneTelemetry {
    pub latitude: f64,
    pub longitude: f64,
    pub heading: f64,  // degrees, 0 is north, 90 is east
    pub altitude: f64, // meters
    pub speed: f64,    // m/s
    pub battery: f64,  // percentage
}

impl DroneTelemetry {
    pub fn new(
        latitude: f64,
        longitude: f64,
        heading: f64,
        altitude: f64,
        speed: f64,
        battery: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            heading,
            altitude,
            speed,
            battery,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Battery rounded to a whole percent, as shown on the readout.
    pub fn battery_display(&self) -> u8 {
        self.battery.clamp(0.0, BATTERY_MAX).round() as u8
    }
}

impl Default for DroneTelemetry {
    /// Starting point over the stock field.
    fn default() -> Self {
        Self::new(25.2058074, 68.2530513, 45.0, 25.0, 5.0, 75.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub tick: u64,
    pub telemetry: DroneTelemetry,
}

impl TelemetrySnapshot {
    pub fn new(tick: u64, telemetry: DroneTelemetry) -> Self {
        Self { tick, telemetry }
    }
}
