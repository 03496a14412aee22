use crate::map::MapLayer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar distance in degrees; fine for comparing points within one farm.
    pub fn degree_distance(&self, other: GeoPoint) -> f64 {
        (self.latitude - other.latitude).hypot(self.longitude - other.longitude)
    }
}

const STOCK_BOUNDARY: [GeoPoint; 5] = [
    GeoPoint::new(25.2052074, 68.2523513),
    GeoPoint::new(25.2052074, 68.2538513),
    GeoPoint::new(25.2064074, 68.2538513),
    GeoPoint::new(25.2064074, 68.2523513),
    GeoPoint::new(25.2052074, 68.2523513),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBoundary {
    vertices: Vec<GeoPoint>,
}

impl FieldBoundary {
    /// Builds a closed polygon, appending the first vertex if it is not repeated.
    pub fn new(mut vertices: Vec<GeoPoint>) -> Self {
        if let Some(&first) = vertices.first() {
            if vertices.last() != Some(&first) {
                vertices.push(first);
            }
        }
        Self { vertices }
    }

    pub fn stock() -> Self {
        Self::new(STOCK_BOUNDARY.to_vec())
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Even-odd ray cast along the longitude axis.
    pub fn contains(&self, point: GeoPoint) -> bool {
        if self.vertices.len() < 4 {
            return false;
        }
        let mut inside = false;
        for edge in self.vertices.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            if (a.latitude > point.latitude) != (b.latitude > point.latitude) {
                let crossing = a.longitude
                    + (point.latitude - a.latitude) / (b.latitude - a.latitude)
                        * (b.longitude - a.longitude);
                if point.longitude < crossing {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmLocation {
    pub id: u32,
    pub title: String,
    pub coordinates: GeoPoint,
    pub imagery: MapLayer,
    pub description: String,
}

impl FarmLocation {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        coordinates: GeoPoint,
        imagery: MapLayer,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            coordinates,
            imagery,
            description: description.into(),
        }
    }
}

pub fn farm_locations() -> Vec<FarmLocation> {
    vec![
        FarmLocation::new(
            1,
            "Northern Field",
            GeoPoint::new(25.2054074, 68.2526513),
            MapLayer::Ndvi,
            "Crop health image",
        ),
        FarmLocation::new(
            3,
            "Northern Field",
            GeoPoint::new(24.9198032, 67.3012061),
            MapLayer::Ndvi,
            "Crop health image",
        ),
        FarmLocation::new(
            2,
            "Southern Field",
            GeoPoint::new(25.2061443, 68.2535854),
            MapLayer::Farm,
            "Pest affected area",
        ),
        FarmLocation::new(
            4,
            "Southern Field",
            GeoPoint::new(24.9199121, 67.3010894),
            MapLayer::Farm,
            "Pest affected area",
        ),
    ]
}

pub fn nearest_location(locations: &[FarmLocation], point: GeoPoint) -> Option<&FarmLocation> {
    locations.iter().min_by(|a, b| {
        a.coordinates
            .degree_distance(point)
            .total_cmp(&b.coordinates.degree_distance(point))
    })
}
