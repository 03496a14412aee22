use kisaneye_core::{
    BatteryBand, FarmLocation, FieldBoundary, FieldHealthReport, MapLayer, MapRegion,
    MapViewState, TelemetrySnapshot,
};
use std::fmt::Write;

/// One line per tick, the same fields the map callout shows.
pub fn telemetry_line(snapshot: &TelemetrySnapshot, boundary: &FieldBoundary) -> String {
    let drone = &snapshot.telemetry;
    let band = BatteryBand::from_percentage(drone.battery);
    let place = if boundary.contains(drone.position()) {
        "inside field"
    } else {
        "outside field"
    };
    format!(
        "#{:<4} {:.7},{:.7} heading {:>3.0}° battery {:>3}% ({}) altitude {}m speed {} m/s, {}",
        snapshot.tick,
        drone.latitude,
        drone.longitude,
        drone.heading,
        drone.battery_display(),
        band.label(),
        drone.altitude,
        drone.speed,
        place
    )
}

pub fn region_line(region: &MapRegion) -> String {
    format!(
        "map centered on {:.7},{:.7} (span {}°)",
        region.center.latitude, region.center.longitude, region.latitude_delta
    )
}

pub fn view_line(view: &MapViewState) -> String {
    format!(
        "layer {} ({}), zoom {}x, {} base map, boundary {}",
        view.layer.label(),
        view.layer.description(),
        view.zoom.value(),
        if view.satellite { "satellite" } else { "standard" },
        if view.show_boundary { "shown" } else { "hidden" }
    )
}

pub fn status_text(report: &FieldHealthReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Overall health: {}% ({})",
        report.overall,
        report.overall_rating().label()
    );
    for reading in &report.readings {
        let _ = writeln!(
            out,
            "  {:<16} {:>3}%  {}",
            reading.indicator.label(),
            reading.percent,
            reading.rating.label()
        );
    }
    let coverage = &report.coverage;
    let _ = writeln!(
        out,
        "Map coverage: {}% healthy, {}% moderate, {}% needs attention",
        coverage.healthy, coverage.moderate, coverage.attention
    );
    let verdict = if report.is_healthy() {
        "Your crop is healthy"
    } else {
        "Your crop needs attention"
    };
    let _ = writeln!(out, "{verdict}");
    out
}

pub fn layers_text(locations: &[FarmLocation], only: Option<MapLayer>) -> String {
    let mut out = String::from("Map layers:\n");
    for layer in MapLayer::ALL {
        if only.is_some_and(|wanted| wanted != layer) {
            continue;
        }
        let _ = writeln!(out, "  {:<18} {}", layer.label(), layer.description());
    }
    out.push_str("Farm locations:\n");
    for location in locations
        .iter()
        .filter(|location| only.is_none_or(|wanted| wanted == location.imagery))
    {
        let _ = writeln!(
            out,
            "  [{}] {:<15} {:.7},{:.7} {} ({})",
            location.id,
            location.title,
            location.coordinates.latitude,
            location.coordinates.longitude,
            location.description,
            location.imagery.label()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kisaneye_core::{DroneTelemetry, ZoomLimits, farm_locations};

    #[test]
    fn telemetry_line_shows_rounded_battery_and_place() {
        let mut drone = DroneTelemetry::default();
        drone.battery = 74.6;
        let line = telemetry_line(&TelemetrySnapshot::new(3, drone), &FieldBoundary::stock());
        assert!(line.starts_with("#3"));
        assert!(line.contains("battery  75% (high)"));
        assert!(line.contains("heading  45°"));
        assert!(line.ends_with("inside field"));

        drone.latitude = 0.0;
        let line = telemetry_line(&TelemetrySnapshot::new(4, drone), &FieldBoundary::stock());
        assert!(line.ends_with("outside field"));
    }

    #[test]
    fn status_text_lists_every_reading() {
        let text = status_text(&FieldHealthReport::sample());
        assert!(text.starts_with("Overall health: 84%"));
        assert!(text.contains("Pest risk"));
        assert!(text.contains("low risk"));
        assert!(text.contains("Map coverage: 68% healthy, 23% moderate, 9% needs attention"));
        assert!(text.trim_end().ends_with("Your crop is healthy"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn layers_text_lists_layers_and_locations() {
        let text = layers_text(&farm_locations(), None);
        assert!(text.contains("NDVI Map"));
        assert!(text.contains("Regular Farm View"));
        assert_eq!(text.matches("Northern Field").count(), 2);
    }

    #[test]
    fn layers_text_filters_by_layer() {
        let text = layers_text(&farm_locations(), Some(MapLayer::Farm));
        assert!(text.contains("Regular Farm View"));
        assert!(!text.contains("NDVI Map"));
        assert_eq!(text.matches("Southern Field").count(), 2);
        assert!(!text.contains("Northern Field"));
    }

    #[test]
    fn view_line_reflects_selected_layer_and_toggles() {
        let mut view = MapViewState::new(ZoomLimits::FIELD_MAP);
        view.select_layer(MapLayer::Farm);
        view.zoom.zoom_in();
        view.toggle_satellite();
        let line = view_line(&view);
        assert!(line.starts_with("layer Regular Farm View (Normal farm image)"));
        assert!(line.contains("zoom 1.5x"));
        assert!(line.contains("standard base map"));
        assert!(line.ends_with("boundary shown"));
    }
}
