use std::time::Duration;

/// Platform analog-input capability used by the sensor driver.
///
/// Implementations wrap whatever actually produces the 12-bit codes: an SPI
/// ADC on a Raspberry Pi, an on-chip converter, or a scripted source in tests.
pub trait AnalogSource {
    type Error;

    /// Prepare `channel` for analog input. Called once per channel by `setup`.
    fn configure(&mut self, channel: u8) -> Result<(), Self::Error>;

    /// Raw conversion result for `channel`, expected in `0..=4095`.
    fn read_raw(&mut self, channel: u8) -> Result<u16, Self::Error>;

    /// Blocking pause between samples.
    fn wait(&mut self, duration: Duration);
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    type Error = T::Error;

    fn configure(&mut self, channel: u8) -> Result<(), Self::Error> {
        (**self).configure(channel)
    }

    fn read_raw(&mut self, channel: u8) -> Result<u16, Self::Error> {
        (**self).read_raw(channel)
    }

    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration)
    }
}
