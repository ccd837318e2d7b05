pub mod collectors;
pub mod config;
pub mod error;
pub mod models;
pub mod runner;

use crate::config::sensors::load_sensors;
use crate::runner::Runner;
use log::info;
use std::io;
use std::path::Path;

pub use crate::config::sensors::Sensor;
pub use crate::error::{ConfigError, PollerError};

/// Load the sensor list at `config_path`, poll each sensor once and print
/// the readings to stdout.
pub async fn run<P: AsRef<Path>>(config_path: P) -> Result<(), PollerError> {
    let sensors = load_sensors(config_path)?;
    let mut stdout = io::stdout();
    let polled = Runner::new().run(&sensors, &mut stdout).await?;
    info!("Polled {} sensors", polled);
    Ok(())
}
