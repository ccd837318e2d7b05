pub mod http;

pub use http::SensorClient;
