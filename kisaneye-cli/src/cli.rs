use clap::{Args, Parser, Subcommand};
use kisaneye_core::MapLayer;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kisaneye", version, about = "Farm health and simulated drone telemetry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the simulated drone feed and print a readout per tick
    Fly(FlyArgs),
    /// Print the field health report
    Status {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List map layers and farm locations
    Layers {
        /// Only list locations with imagery for this layer (`ndvi` or `farm`)
        #[arg(long)]
        layer: Option<MapLayer>,
    },
}

#[derive(Debug, Args)]
pub struct FlyArgs {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the random walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tick period in milliseconds
    #[arg(long)]
    pub period_ms: Option<u64>,

    /// Stop after this many ticks; 0 runs until Ctrl-C
    #[arg(long, default_value_t = 10)]
    pub ticks: u64,

    /// Map layer to show under the drone (`ndvi` or `farm`)
    #[arg(long, default_value = "ndvi")]
    pub layer: MapLayer,
}
