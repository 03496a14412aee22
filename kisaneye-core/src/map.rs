use crate::error::UnknownLayer;
use crate::field::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const REGION_SPAN_DEGREES: f64 = 0.005;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapLayer {
    #[default]
    Ndvi,
    Farm,
}

impl MapLayer {
    pub const ALL: [MapLayer; 2] = [MapLayer::Ndvi, MapLayer::Farm];

    pub fn label(self) -> &'static str {
        match self {
            MapLayer::Ndvi => "NDVI Map",
            MapLayer::Farm => "Regular Farm View",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MapLayer::Ndvi => "Shows crop health levels",
            MapLayer::Farm => "Normal farm image",
        }
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MapLayer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ndvi" => Ok(MapLayer::Ndvi),
            "farm" => Ok(MapLayer::Farm),
            _ => Err(UnknownLayer(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ZoomLimits {
    pub const HOME: ZoomLimits = ZoomLimits {
        min: 0.5,
        max: 3.0,
        step: 0.5,
    };
    pub const FIELD_MAP: ZoomLimits = ZoomLimits {
        min: 0.5,
        max: 2.0,
        step: 0.5,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLevel {
    value: f64,
    limits: ZoomLimits,
}

impl ZoomLevel {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            value: 1.0_f64.clamp(limits.min, limits.max),
            limits,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn zoom_in(&mut self) -> f64 {
        if self.value < self.limits.max {
            self.value = (self.value + self.limits.step).min(self.limits.max);
        }
        self.value
    }

    pub fn zoom_out(&mut self) -> f64 {
        if self.value > self.limits.min {
            self.value = (self.value - self.limits.step).max(self.limits.min);
        }
        self.value
    }
}

/// Visible map window, as used when centering on the drone or the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn around(center: GeoPoint) -> Self {
        Self {
            center,
            latitude_delta: REGION_SPAN_DEGREES,
            longitude_delta: REGION_SPAN_DEGREES,
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (point.latitude - self.center.latitude).abs() <= self.latitude_delta / 2.0
            && (point.longitude - self.center.longitude).abs() <= self.longitude_delta / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewState {
    pub layer: MapLayer,
    pub zoom: ZoomLevel,
    pub satellite: bool,
    pub show_boundary: bool,
}

impl MapViewState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            layer: MapLayer::default(),
            zoom: ZoomLevel::new(limits),
            satellite: true,
            show_boundary: true,
        }
    }

    pub fn select_layer(&mut self, layer: MapLayer) {
        self.layer = layer;
    }

    pub fn toggle_satellite(&mut self) -> bool {
        self.satellite = !self.satellite;
        self.satellite
    }

    pub fn toggle_boundary(&mut self) -> bool {
        self.show_boundary = !self.show_boundary;
        self.show_boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_stays_within_home_limits() {
        let mut zoom = ZoomLevel::new(ZoomLimits::HOME);
        assert_eq!(zoom.value(), 1.0);
        for _ in 0..10 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.value(), 3.0);
        for _ in 0..10 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.value(), 0.5);
    }

    #[test]
    fn field_map_caps_at_two() {
        let mut zoom = ZoomLevel::new(ZoomLimits::FIELD_MAP);
        assert_eq!(zoom.zoom_in(), 1.5);
        assert_eq!(zoom.zoom_in(), 2.0);
        assert_eq!(zoom.zoom_in(), 2.0);
        assert_eq!(zoom.zoom_out(), 1.5);
    }

    #[test]
    fn uneven_step_is_clamped() {
        let limits = ZoomLimits {
            min: 0.5,
            max: 1.2,
            step: 0.5,
        };
        let mut zoom = ZoomLevel::new(limits);
        assert_eq!(zoom.zoom_in(), 1.2);
        assert!((zoom.zoom_out() - 0.7).abs() < 1e-12);
        assert_eq!(zoom.zoom_out(), 0.5);
    }

    #[test]
    fn parses_layers() {
        assert_eq!("NDVI".parse::<MapLayer>().unwrap(), MapLayer::Ndvi);
        assert_eq!(" farm ".parse::<MapLayer>().unwrap(), MapLayer::Farm);
        assert_eq!(
            "satellite".parse::<MapLayer>(),
            Err(UnknownLayer("satellite".to_string()))
        );
        assert_eq!(
            UnknownLayer("x".to_string()).to_string(),
            "unknown map layer `x` (expected `ndvi` or `farm`)"
        );
        assert_eq!(MapLayer::default(), MapLayer::Ndvi);
    }

    #[test]
    fn region_spans_half_delta_each_way() {
        let region = MapRegion::around(GeoPoint::new(25.0, 68.0));
        assert!(region.contains(GeoPoint::new(25.002, 68.002)));
        assert!(!region.contains(GeoPoint::new(25.003, 68.0)));
    }

    #[test]
    fn view_toggles_flip_state() {
        let mut view = MapViewState::new(ZoomLimits::HOME);
        assert!(view.satellite && view.show_boundary);
        assert!(!view.toggle_satellite());
        assert!(!view.toggle_boundary());
        assert!(view.toggle_boundary());
        view.select_layer(MapLayer::Farm);
        assert_eq!(view.layer, MapLayer::Farm);
    }
}
