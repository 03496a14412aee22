use crate::cli::FlyArgs;
use crate::readout::{region_line, telemetry_line, view_line};
use anyhow::{Context, Result};
use kisaneye_core::{
    AppConfig, FieldBoundary, MapRegion, MapViewState, Simulator, TelemetryFeed, ZoomLimits,
    farm_locations, is_battery_alert, nearest_location,
};

pub fn resolve_config(args: &FlyArgs) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(period_ms) = args.period_ms {
        config.simulator.tick_period_ms = period_ms;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

pub async fn run(args: FlyArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let boundary = FieldBoundary::stock();
    let simulator = Simulator::with_seed(config.simulator, config.seed);
    let feed = TelemetryFeed::new(config.initial, simulator);

    let mut view = MapViewState::new(ZoomLimits::FIELD_MAP);
    view.select_layer(args.layer);
    log::info!("{}", view_line(&view));

    let start = feed.latest().position();
    log::info!("{}", region_line(&MapRegion::around(start)));
    let locations = farm_locations();
    if let Some(marker) = nearest_location(&locations, start) {
        log::info!(
            "nearest marker: [{}] {} ({})",
            marker.id,
            marker.title,
            marker.description
        );
    }

    let mut updates = feed.subscribe();
    let mut handle = feed
        .start(config.simulator.tick_period())
        .context("starting telemetry feed")?;

    let mut alerted = is_battery_alert(feed.latest().battery);
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                println!("{}", telemetry_line(&snapshot, &boundary));

                let alert = is_battery_alert(snapshot.telemetry.battery);
                if alert && !alerted {
                    log::warn!(
                        "drone battery low: {}%",
                        snapshot.telemetry.battery_display()
                    );
                }
                alerted = alert;

                if args.ticks != 0 && snapshot.tick >= args.ticks {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted");
                break;
            }
        }
    }

    handle.stop();
    let last = feed.snapshot();
    log::info!(
        "{} ticks, final battery {}%",
        last.tick,
        last.telemetry.battery_display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kisaneye_core::MapLayer;

    fn args() -> FlyArgs {
        FlyArgs {
            config: None,
            seed: None,
            period_ms: None,
            ticks: 10,
            layer: MapLayer::Ndvi,
        }
    }

    #[test]
    fn flags_override_defaults() {
        let mut fly = args();
        fly.seed = Some(5);
        fly.period_ms = Some(100);
        let config = resolve_config(&fly).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.simulator.tick_period_ms, 100);
    }

    #[test]
    fn zero_period_flag_is_rejected() {
        let mut fly = args();
        fly.period_ms = Some(0);
        assert!(resolve_config(&fly).is_err());
    }

    #[test]
    fn missing_config_file_reports_path() {
        let mut fly = args();
        fly.config = Some("/nonexistent/kisaneye.json".into());
        let err = resolve_config(&fly).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/kisaneye.json"));
    }

    #[tokio::test(start_paused = true)]
    async fn runs_requested_ticks_and_stops() {
        let mut fly = args();
        fly.seed = Some(1);
        fly.ticks = 3;
        fly.layer = MapLayer::Farm;
        run(fly).await.unwrap();
    }
}
