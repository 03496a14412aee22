use anyhow::Result;
use clap::Parser;
use kisaneye_core::{FieldHealthReport, farm_locations};

mod cli;
mod fly;
mod readout;

use crate::cli::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fly(args) => fly::run(args).await?,
        Command::Status { json } => {
            let report = FieldHealthReport::sample();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", readout::status_text(&report));
            }
        }
        Command::Layers { layer } => {
            print!("{}", readout::layers_text(&farm_locations(), layer))
        }
    }
    Ok(())
}
