//! Reader for the Modern Device Wind Sensor Rev. P.
//!
//! [`WindSensorRevP`] averages samples from the sensor's `OUT` and `TMP`
//! outputs through any [`AnalogSource`] and turns them into a temperature
//! and a wind speed in miles per hour. [`Mcp3208`] is the source used on a
//! Raspberry Pi.

pub mod sensor;

pub use sensor::{
    AdcError, AnalogSource, Mcp3208, SensorChannel, SensorError, WindReading, WindSensorRevP,
    WindSpeed,
};
