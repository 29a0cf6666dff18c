//! Driver for the Modern Device Wind Sensor Rev. P.
//!
//! The sensor exposes two analog outputs: `OUT`, a voltage rising with
//! airflow across a heated element, and `TMP`, an ambient temperature
//! voltage. Wind speed is derived from both with an empirical power law.

use std::time::Duration;

use log::{debug, info, warn};

use super::{AnalogSource, SensorError, WindReading, WindSpeed};

/// ADC reference voltage.
pub const REFERENCE_VOLTAGE: f64 = 3.3;
/// Largest 12-bit conversion result.
pub const ADC_MAX: u16 = 4095;
/// Pause after every sample.
pub const SAMPLE_SETTLE: Duration = Duration::from_millis(10);

// TMP output: 400 mV at 0 °C, 19.5 mV per °C
const TMP_OFFSET_VOLTS: f64 = 0.400;
const TMP_VOLTS_PER_DEGREE: f64 = 0.0195;

// Rev. P regression constants
const TEMPERATURE_SCALE: f64 = 3.038517;
const TEMPERATURE_EXPONENT: f64 = 0.115157;
const SPEED_DIVISOR: f64 = 0.087288;
const SPEED_EXPONENT: f64 = 3.009364;

pub struct WindSensorRevP<S> {
    source: S,
    wind_pin: u8,
    temperature_pin: u8,
    zero_wind_voltage: f64,
    sample_count: u16,
}

impl<S: AnalogSource> WindSensorRevP<S> {
    /// Creates the driver. Nothing touches the hardware until [`setup`](Self::setup).
    ///
    /// Fails with [`SensorError::InvalidSampleCount`] when `sample_count` is 0.
    pub fn new(
        source: S,
        wind_pin: u8,
        temperature_pin: u8,
        zero_wind_voltage: f64,
        sample_count: u16,
    ) -> Result<Self, SensorError<S::Error>> {
        if sample_count == 0 {
            return Err(SensorError::InvalidSampleCount);
        }

        Ok(WindSensorRevP {
            source,
            wind_pin,
            temperature_pin,
            zero_wind_voltage,
            sample_count,
        })
    }

    /// Configures both channels as inputs. Call once before reading.
    pub fn setup(&mut self) -> Result<(), SensorError<S::Error>> {
        self.source
            .configure(self.wind_pin)
            .map_err(SensorError::Source)?;
        self.source
            .configure(self.temperature_pin)
            .map_err(SensorError::Source)?;

        info!(
            "wind sensor ready: out={} tmp={} zero_wind={:.4}V samples={}",
            self.wind_pin, self.temperature_pin, self.zero_wind_voltage, self.sample_count
        );
        Ok(())
    }

    /// Mean `OUT` voltage over `sample_count` samples.
    ///
    /// Blocks for `sample_count` × [`SAMPLE_SETTLE`].
    pub fn read_voltage(&mut self) -> Result<f64, SensorError<S::Error>> {
        let voltage = self.average(self.wind_pin, |volts| volts)?;
        debug!("wind voltage {:.4}V", voltage);
        Ok(voltage)
    }

    /// Mean `TMP` temperature in Celsius over `sample_count` samples.
    ///
    /// Blocks for `sample_count` × [`SAMPLE_SETTLE`].
    pub fn read_temperature(&mut self) -> Result<f64, SensorError<S::Error>> {
        let temperature = self.average(self.temperature_pin, volts_to_celsius)?;
        debug!("temperature {:.2}C", temperature);
        Ok(temperature)
    }

    /// Wind speed for an `OUT` voltage at the given ambient temperature.
    ///
    /// A voltage below the zero wind voltage reads as calm. `temperature_c`
    /// must be above 0 °C; below that the power law is undefined and the
    /// result is NaN.
    pub fn calculate_wind_speed(&self, voltage: f64, temperature_c: f64) -> WindSpeed {
        let differential = voltage - self.zero_wind_voltage;
        if differential < 0.0 {
            warn!(
                "voltage {:.4}V below zero wind voltage {:.4}V, reporting calm",
                voltage, self.zero_wind_voltage
            );
            return WindSpeed::CALM;
        }

        let base = differential
            / (TEMPERATURE_SCALE * temperature_c.powf(TEMPERATURE_EXPONENT))
            / SPEED_DIVISOR;
        WindSpeed::from_mph(base.powf(SPEED_EXPONENT))
    }

    /// Reads voltage, then temperature, and combines them.
    pub fn measure(&mut self) -> Result<WindReading, SensorError<S::Error>> {
        let voltage = self.read_voltage()?;
        let temperature_c = self.read_temperature()?;
        let wind_speed = self.calculate_wind_speed(voltage, temperature_c);

        Ok(WindReading {
            voltage,
            temperature_c,
            wind_speed,
        })
    }

    pub fn zero_wind_voltage(&self) -> f64 {
        self.zero_wind_voltage
    }

    pub fn sample_count(&self) -> u16 {
        self.sample_count
    }

    /// Gives the analog source back.
    pub fn release(self) -> S {
        self.source
    }

    fn average(
        &mut self,
        channel: u8,
        convert: impl Fn(f64) -> f64,
    ) -> Result<f64, SensorError<S::Error>> {
        let mut sum = 0.0;
        for _ in 0..self.sample_count {
            let raw = self
                .source
                .read_raw(channel)
                .map_err(SensorError::Source)?;
            if raw > ADC_MAX {
                return Err(SensorError::RawOutOfRange { channel, raw });
            }
            sum += convert(raw_to_volts(raw));
            self.source.wait(SAMPLE_SETTLE);
        }
        Ok(sum / f64::from(self.sample_count))
    }
}

pub fn raw_to_volts(raw: u16) -> f64 {
    f64::from(raw) * REFERENCE_VOLTAGE / f64::from(ADC_MAX)
}

pub fn volts_to_celsius(volts: f64) -> f64 {
    (volts - TMP_OFFSET_VOLTS) / TMP_VOLTS_PER_DEGREE
}
