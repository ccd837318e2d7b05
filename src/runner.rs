use crate::collectors::SensorClient;
use crate::config::sensors::Sensor;
use crate::error::PollerError;
use crate::models::Reading;
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Polls every sensor once, in order, and writes one CSV line per sensor.
///
/// The first failure ends the run: lines already written stay, the failing
/// sensor and everything after it produce nothing.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    client: SensorClient,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            client: SensorClient::new(),
        }
    }

    /// Run with the current time as the shared timestamp.
    pub async fn run<W: Write>(&self, sensors: &[Sensor], out: &mut W) -> Result<usize, PollerError> {
        let timestamp = chrono::Utc::now().timestamp();
        self.run_at(sensors, timestamp, out).await
    }

    /// Run with a fixed timestamp stamped on every reading.
    pub async fn run_at<W: Write>(
        &self,
        sensors: &[Sensor],
        timestamp: i64,
        out: &mut W,
    ) -> Result<usize, PollerError> {
        let start = Instant::now();
        info!("Polling {} sensors at {}", sensors.len(), timestamp);

        for sensor in sensors {
            let measurement = self.client.fetch(sensor).await?;
            let reading = Reading::new(timestamp, sensor.room.clone(), measurement);
            writeln!(out, "{}", reading)?;
            out.flush()?;
        }

        debug!("run took: {} ms", start.elapsed().as_millis());
        Ok(sensors.len())
    }
}
