use std::error::Error;
use std::fmt;

/// Errors reported by [`WindSensorRevP`](super::WindSensorRevP).
///
/// `E` is the error type of the underlying analog source.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorError<E> {
    /// Averaging needs at least one sample.
    InvalidSampleCount,
    /// The source returned a code outside the 12-bit range.
    RawOutOfRange { channel: u8, raw: u16 },
    /// The analog source itself failed.
    Source(E),
}

impl<E: fmt::Display> fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::InvalidSampleCount => write!(f, "sample count must be at least 1"),
            SensorError::RawOutOfRange { channel, raw } => {
                write!(f, "raw reading {raw} on channel {channel} exceeds 12-bit range")
            }
            SensorError::Source(err) => write!(f, "analog source failed: {err}"),
        }
    }
}

impl<E: Error + 'static> Error for SensorError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SensorError::Source(err) => Some(err),
            _ => None,
        }
    }
}
