use crate::config::sensors::Sensor;
use crate::error::PollerError;
use crate::models::Measurement;
use log::debug;
use reqwest::Client;
use std::time::Instant;

/// Fetches measurements from sensors over plain HTTP GET.
#[derive(Debug, Clone, Default)]
pub struct SensorClient {
    client: Client,
}

impl SensorClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch(&self, sensor: &Sensor) -> Result<Measurement, PollerError> {
        let start = Instant::now();
        let network_error = |source| PollerError::Network {
            room: sensor.room.clone(),
            source,
        };

        // The status code is not checked; whatever body comes back is decoded.
        let response = self
            .client
            .get(&sensor.url)
            .send()
            .await
            .map_err(network_error)?;
        debug!("{} answered {}", sensor.room, response.status());
        let body = response.bytes().await.map_err(network_error)?;

        let measurement = parse_measurement(&body).map_err(|source| PollerError::Response {
            room: sensor.room.clone(),
            source,
        })?;
        debug!("fetch {} took: {} ms", sensor.room, start.elapsed().as_millis());
        Ok(measurement)
    }
}

pub fn parse_measurement(body: &[u8]) -> Result<Measurement, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_extra_fields() {
        let m = parse_measurement(br#"{"room": "x", "temperature": 19, "humidity": 55.5}"#).unwrap();
        assert_eq!(m.temperature.to_string(), "19");
        assert_eq!(m.humidity.to_string(), "55.5");
    }

    #[test]
    fn test_missing_field() {
        let err = parse_measurement(br#"{"temperature": 19}"#).unwrap_err();
        assert!(err.to_string().contains("humidity"));
    }

    #[test]
    fn test_not_json() {
        assert!(parse_measurement(b"<html>502</html>").is_err());
        assert!(parse_measurement(b"").is_err());
    }

    #[test]
    fn test_non_numeric_value() {
        assert!(parse_measurement(br#"{"temperature": "hot", "humidity": 40}"#).is_err());
        assert!(parse_measurement(br#"{"temperature": null, "humidity": 40}"#).is_err());
    }
}
