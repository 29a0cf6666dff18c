pub mod error;
pub mod mcp3208;
pub mod rev_p;
pub mod source;

pub use error::SensorError;
pub use mcp3208::{AdcError, Mcp3208};
pub use rev_p::WindSensorRevP;
pub use source::AnalogSource;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct WindSpeed(f64);
impl WindSpeed {
    pub const CALM: WindSpeed = WindSpeed(0.0);

    pub fn from_mph(mph: f64) -> WindSpeed {
        WindSpeed(mph)
    }

    pub fn mph(&self) -> f64 {
        self.0
    }
}

/// One complete measurement: averaged wind voltage, averaged temperature and
/// the wind speed computed from both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindReading {
    pub voltage: f64,
    pub temperature_c: f64,
    pub wind_speed: WindSpeed,
}

//Default wiring of the Rev. P outputs on the ADC
#[derive(Clone, Copy, Debug)]
pub enum SensorChannel {
    OUT = 0,
    TMP = 1,
}
