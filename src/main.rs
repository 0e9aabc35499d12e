use anyhow::Context;
use clap::Parser;
use scrubline::{Config, app_core::Scrubline, config::Args, logging, player::RodioSink};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_path = logging::init()?;

    let config = Config::load(args).inspect_err(|e| error!("{e}"))?;
    info!("Logging to {}", log_path.display());

    let sink = RodioSink::new().context("Could not open the default audio output")?;

    Scrubline::new(config, Box::new(sink)).run()?;
    Ok(())
}
