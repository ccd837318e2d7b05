pub mod reading;

pub use reading::{Measurement, Reading};
