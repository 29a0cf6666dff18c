use clap::{self, Parser};

use wind_sensor_rev_p::SensorChannel;

#[derive(Debug, Parser)]
#[command(about = "Wind Sensor Rev. P station", long_about = None)]
pub struct Cli {
    /// ADC channel wired to the sensor's OUT pin
    #[arg(short, long, default_value_t = SensorChannel::OUT as u8)]
    pub wind_channel: u8,
    /// ADC channel wired to the sensor's TMP pin
    #[arg(short, long, default_value_t = SensorChannel::TMP as u8)]
    pub temperature_channel: u8,
    /// OUT voltage measured in still air
    #[arg(short, long, default_value_t = 1.3692)]
    pub zero_wind_voltage: f64,
    /// Samples averaged per reading
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub samples: u16,
    /// Seconds between readings
    #[arg(short, long, default_value_t = 1)]
    pub interval: u64,
    #[arg(long, default_value_t = 0)]
    pub spi_bus: u8,
    #[arg(long, default_value_t = 0)]
    pub slave_select: u8,
    #[arg(long, default_value_t = 1_000_000)]
    pub clock_hz: u32,
    /// Take a single reading and exit
    #[arg(short, long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wind_station"]).unwrap();
        assert_eq!(cli.wind_channel, 0);
        assert_eq!(cli.temperature_channel, 1);
        assert_eq!(cli.samples, 10);
        assert_eq!(cli.interval, 1);
        assert!(!cli.once);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "wind_station",
            "-w",
            "3",
            "--zero-wind-voltage",
            "1.25",
            "--samples",
            "4",
            "--once",
        ])
        .unwrap();
        assert_eq!(cli.wind_channel, 3);
        assert_eq!(cli.zero_wind_voltage, 1.25);
        assert_eq!(cli.samples, 4);
        assert!(cli.once);
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(Cli::try_parse_from(["wind_station", "--samples", "0"]).is_err());
    }
}
