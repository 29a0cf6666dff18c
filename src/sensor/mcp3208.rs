use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use rppal::spi::{self, Bus, Mode, SlaveSelect, Spi};

use super::AnalogSource;

/// MCP3208 has eight single-ended inputs.
pub const CHANNELS: u8 = 8;

#[derive(Debug)]
pub enum AdcError {
    Spi(spi::Error),
    InvalidChannel(u8),
}

impl From<spi::Error> for AdcError {
    fn from(err: spi::Error) -> Self {
        AdcError::Spi(err)
    }
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdcError::Spi(err) => write!(f, "spi transfer failed: {err}"),
            AdcError::InvalidChannel(channel) => {
                write!(f, "channel {channel} does not exist on MCP3208 (0..{CHANNELS})")
            }
        }
    }
}

impl Error for AdcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AdcError::Spi(err) => Some(err),
            AdcError::InvalidChannel(_) => None,
        }
    }
}

/// 12-bit SPI ADC standing in for the analog pins the Raspberry Pi lacks.
pub struct Mcp3208 {
    spi: Spi,
}

impl Mcp3208 {
    pub fn new(bus: Bus, slave_select: SlaveSelect, clock_hz: u32) -> Result<Mcp3208, AdcError> {
        let spi = Spi::new(bus, slave_select, clock_hz, Mode::Mode0)?;
        Ok(Mcp3208 { spi })
    }
}

impl AnalogSource for Mcp3208 {
    type Error = AdcError;

    //inputs are fixed on this chip, only the channel number can be wrong
    fn configure(&mut self, channel: u8) -> Result<(), AdcError> {
        check_channel(channel)
    }

    fn read_raw(&mut self, channel: u8) -> Result<u16, AdcError> {
        check_channel(channel)?;
        let mut rx = [0u8; 3];
        self.spi.transfer(&mut rx, &command_frame(channel))?;
        Ok(decode_frame(&rx))
    }

    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

fn check_channel(channel: u8) -> Result<(), AdcError> {
    if channel < CHANNELS {
        Ok(())
    } else {
        Err(AdcError::InvalidChannel(channel))
    }
}

//start bit, single-ended mode, then the 3-bit channel split over two bytes
fn command_frame(channel: u8) -> [u8; 3] {
    [0x06 | (channel >> 2), (channel & 0x03) << 6, 0x00]
}

//the 12 result bits arrive in the low nibble of byte 1 and all of byte 2
fn decode_frame(rx: &[u8; 3]) -> u16 {
    (u16::from(rx[1] & 0x0F) << 8) | u16::from(rx[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_frame() {
        assert_eq!(command_frame(0), [0x06, 0x00, 0x00]);
        assert_eq!(command_frame(1), [0x06, 0x40, 0x00]);
        assert_eq!(command_frame(5), [0x07, 0x40, 0x00]);
        assert_eq!(command_frame(7), [0x07, 0xC0, 0x00]);
    }

    #[test]
    fn test_decode_ignores_leading_bits() {
        assert_eq!(decode_frame(&[0xFF, 0xFF, 0xFF]), 4095);
        assert_eq!(decode_frame(&[0x00, 0xE8, 0x00]), 2048);
        assert_eq!(decode_frame(&[0x00, 0x00, 0x2A]), 42);
    }

    #[test]
    fn test_channel_bounds() {
        assert!(check_channel(7).is_ok());
        assert!(matches!(check_channel(8), Err(AdcError::InvalidChannel(8))));
    }
}
