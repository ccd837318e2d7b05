use serde::Deserialize;
use serde_json::Number;
use std::fmt;

/// The two values a sensor reports. Other fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    pub temperature: Number,
    pub humidity: Number,
}

/// One output record. Numbers keep the literal form the sensor sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: i64,
    pub room: String,
    pub temperature: Number,
    pub humidity: Number,
}

impl Reading {
    pub fn new(timestamp: i64, room: String, measurement: Measurement) -> Self {
        Self {
            timestamp,
            room,
            temperature: measurement.temperature,
            humidity: measurement.humidity,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.timestamp, self.room, self.temperature, self.humidity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let measurement: Measurement =
            serde_json::from_str(r#"{"temperature": 21.5, "humidity": 40}"#).unwrap();
        let reading = Reading::new(1700000000, "kitchen".to_string(), measurement);
        assert_eq!(reading.to_string(), "1700000000,kitchen,21.5,40");
    }

    #[test]
    fn test_negative_and_integer_values() {
        let measurement: Measurement =
            serde_json::from_str(r#"{"temperature": -3, "humidity": 87.25}"#).unwrap();
        let reading = Reading::new(1, "shed".to_string(), measurement);
        assert_eq!(reading.to_string(), "1,shed,-3,87.25");
    }
}
