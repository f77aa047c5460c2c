//! Driver errors
//!
//! None of these are retried by the driver. A failed operation leaves the
//! panel partially drawn; callers decide whether to re-issue.

use core::fmt;

/// Which polled condition never asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeoutStage {
    /// Transmit buffer never emptied
    TxEmpty,
    /// Peripheral stayed busy after the last byte
    NotBusy,
    /// No byte arrived while receiving
    RxReady,
}

/// Rejected device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin remap requested on a bus that has no alternate mapping
    RemapUnsupported,
}

/// Driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A polled bus flag did not assert within the spin budget
    TransportTimeout(TimeoutStage),
    /// The in-flight slot did not return to idle within the spin budget
    BulkBusyTimeout,
    /// Unsupported bus/pin combination at initialization
    Configuration(ConfigError),
    /// Character outside the font table, or font size without a table
    UnsupportedGlyph,
    /// Drawing requested before initialization finished
    NotReady,
    /// Scratch buffer cannot hold one band or one glyph cell
    BufferTooSmall,
    /// Drawing area extends past the panel edge
    OutOfBounds,
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Configuration(e)
    }
}

impl fmt::Display for TimeoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutStage::TxEmpty => f.write_str("transmit-empty"),
            TimeoutStage::NotBusy => f.write_str("not-busy"),
            TimeoutStage::RxReady => f.write_str("receive-ready"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TransportTimeout(stage) => write!(f, "spi {stage} timeout"),
            Error::BulkBusyTimeout => f.write_str("bulk channel busy timeout"),
            Error::Configuration(ConfigError::RemapUnsupported) => {
                f.write_str("pin remap is only available on the primary bus")
            }
            Error::UnsupportedGlyph => f.write_str("glyph not in font table"),
            Error::NotReady => f.write_str("display not initialized"),
            Error::BufferTooSmall => f.write_str("scratch buffer too small"),
            Error::OutOfBounds => f.write_str("area outside the panel"),
        }
    }
}

/// Result alias used throughout the driver
pub type Result<T> = core::result::Result<T, Error>;
