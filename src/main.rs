mod cli;

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use log::{error, info};
use rppal::spi::{Bus, SlaveSelect};
use wind_sensor_rev_p::{Mcp3208, WindSensorRevP};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("{:?}", cli);

    let adc = Mcp3208::new(spi_bus(cli.spi_bus)?, slave_select(cli.slave_select)?, cli.clock_hz)
        .context("can't open MCP3208")?;

    let mut sensor = WindSensorRevP::new(
        adc,
        cli.wind_channel,
        cli.temperature_channel,
        cli.zero_wind_voltage,
        cli.samples,
    )?;
    sensor.setup().context("can't set up wind sensor")?;

    let interval = Duration::from_secs(cli.interval);

    loop {
        match sensor.measure() {
            Ok(reading) => println!(
                "wind {:.2} mph  temperature {:.1} C  out {:.4} V",
                reading.wind_speed.mph(),
                reading.temperature_c,
                reading.voltage
            ),
            //a single failed transfer shouldn't stop the station, try again next round
            Err(err) if !cli.once => error!("reading failed: {err}"),
            Err(err) => return Err(err.into()),
        }

        if cli.once {
            return Ok(());
        }

        thread::sleep(interval);
    }
}

fn spi_bus(bus: u8) -> Result<Bus> {
    Ok(match bus {
        0 => Bus::Spi0,
        1 => Bus::Spi1,
        2 => Bus::Spi2,
        _ => bail!("unsupported SPI bus {bus}"),
    })
}

fn slave_select(ss: u8) -> Result<SlaveSelect> {
    Ok(match ss {
        0 => SlaveSelect::Ss0,
        1 => SlaveSelect::Ss1,
        2 => SlaveSelect::Ss2,
        _ => bail!("unsupported slave select {ss}"),
    })
}
