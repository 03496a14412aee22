use crate::config::SimulatorConfig;
use crate::telemetry::DroneTelemetry;
use crate::walk::{DeltaSource, RandomWalk, heading_from_offset};

/// Applies the random-walk model to drone telemetry, one tick at a time.
pub struct Simulator {
    config: SimulatorConfig,
    source: Box<dyn DeltaSource>,
}

impl Simulator {
    pub fn new(config: SimulatorConfig, source: Box<dyn DeltaSource>) -> Self {
        Self { config, source }
    }

    pub fn with_seed(config: SimulatorConfig, seed: Option<u64>) -> Self {
        let walk = match seed {
            Some(seed) => RandomWalk::with_seed(seed),
            None => RandomWalk::new(),
        };
        Self::new(config, Box::new(walk))
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn tick(&mut self, current: DroneTelemetry) -> DroneTelemetry {
        let (d_lat, d_lon) = self.source.next_delta(self.config.step_degrees);
        advance(current, d_lat, d_lon, self.config.battery_drain)
    }
}

/// Next telemetry value for a given movement offset.
pub fn advance(current: DroneTelemetry, d_lat: f64, d_lon: f64, drain: f64) -> DroneTelemetry {
    DroneTelemetry {
        latitude: current.latitude + d_lat,
        longitude: current.longitude + d_lon,
        heading: heading_from_offset(d_lat, d_lon),
        battery: (current.battery - drain).max(0.0),
        ..current
    }
}
