pub mod battery;
pub mod config;
pub mod error;
pub mod feed;
pub mod field;
pub mod map;
pub mod simulator;
pub mod status;
pub mod telemetry;
pub mod walk;

pub use battery::{BatteryBand, is_battery_alert};
pub use config::{AppConfig, SimulatorConfig};
pub use error::{ConfigError, FeedError, UnknownLayer};
pub use feed::{FeedHandle, TelemetryFeed};
pub use field::{FarmLocation, FieldBoundary, GeoPoint, farm_locations, nearest_location};
pub use map::{MapLayer, MapRegion, MapViewState, ZoomLevel, ZoomLimits};
pub use simulator::Simulator;
pub use status::{FieldCoverage, FieldHealthReport, HealthReading, Indicator, Rating};
pub use telemetry::{DroneTelemetry, TelemetrySnapshot};
pub use walk::{DeltaSource, FixedDelta, RandomWalk, heading_from_offset};
