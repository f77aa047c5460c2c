//! SPI peripheral abstractions
//!
//! Unlike a transaction-level bus trait, the display transport polls the
//! peripheral's status flags itself so that every wait can be bounded by an
//! iteration budget. This trait therefore exposes the status/data registers
//! of a single SPI master.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polled SPI master peripheral
pub trait SpiPeripheral {
    /// Apply a configuration and enable the peripheral
    fn configure(&mut self, config: &SpiConfig);

    /// Select the direction of the shared data line (bidirectional mode)
    fn set_direction(&mut self, direction: LineDirection);

    /// Transmit buffer empty (TXE)
    fn is_tx_empty(&self) -> bool;

    /// Receive buffer not empty (RXNE)
    fn is_rx_ready(&self) -> bool;

    /// Peripheral busy (BSY)
    fn is_busy(&self) -> bool;

    /// Write one byte to the data register
    fn write_data(&mut self, byte: u8);

    /// Read one byte from the data register
    fn read_data(&mut self) -> u8;

    /// Enable or disable the TX DMA request
    fn set_tx_dma(&mut self, enabled: bool);
}

/// Direction of the single data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineDirection {
    /// Master drives the line
    Transmit,
    /// Slave drives the line
    Receive,
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiConfig {
    /// Clock polarity and phase
    pub mode: Mode,
    /// Peripheral clock prescaler
    pub divider: ClockDivider,
    /// Chip-select handled in software by the driver
    pub software_cs: bool,
    /// Send the most significant bit first
    pub msb_first: bool,
}

impl Default for SpiConfig {
    /// Mode 0 at half the peripheral clock, software chip-select, MSB first
    fn default() -> Self {
        Self {
            mode: Mode::MODE_0,
            divider: ClockDivider::Div2,
            software_cs: true,
            msb_first: true,
        }
    }
}

/// Clock level between frames (CPOL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    IdleLow,
    IdleHigh,
}

/// Clock edge that samples data (CPHA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    FirstEdge,
    SecondEdge,
}

/// Polarity/phase pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mode {
    pub polarity: Polarity,
    pub phase: Phase,
}

impl Mode {
    pub const MODE_0: Self = Self::new(Polarity::IdleLow, Phase::FirstEdge);
    pub const MODE_1: Self = Self::new(Polarity::IdleLow, Phase::SecondEdge);
    pub const MODE_2: Self = Self::new(Polarity::IdleHigh, Phase::FirstEdge);
    pub const MODE_3: Self = Self::new(Polarity::IdleHigh, Phase::SecondEdge);

    pub const fn new(polarity: Polarity, phase: Phase) -> Self {
        Self { polarity, phase }
    }

    /// CPOL and CPHA as the two low bits of a control register
    /// (`CPOL << 1 | CPHA`), i.e. the conventional mode number
    pub const fn bits(&self) -> u8 {
        let cpol = matches!(self.polarity, Polarity::IdleHigh) as u8;
        let cpha = matches!(self.phase, Phase::SecondEdge) as u8;
        (cpol << 1) | cpha
    }
}

/// Baud rate prescaler applied to the peripheral clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockDivider {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
    Div256,
}

impl ClockDivider {
    /// Division factor
    pub fn factor(&self) -> u16 {
        match self {
            ClockDivider::Div2 => 2,
            ClockDivider::Div4 => 4,
            ClockDivider::Div8 => 8,
            ClockDivider::Div16 => 16,
            ClockDivider::Div32 => 32,
            ClockDivider::Div64 => 64,
            ClockDivider::Div128 => 128,
            ClockDivider::Div256 => 256,
        }
    }

    /// Resulting SCK frequency for a given peripheral clock
    pub fn sck_hz(&self, pclk_hz: u32) -> u32 {
        pclk_hz / self.factor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mode0_div2() {
        let cfg = SpiConfig::default();
        assert_eq!(cfg.mode, Mode::MODE_0);
        assert_eq!(cfg.mode.polarity, Polarity::IdleLow);
        assert_eq!(cfg.mode.phase, Phase::FirstEdge);
        assert_eq!(cfg.divider, ClockDivider::Div2);
        assert!(cfg.software_cs);
        assert!(cfg.msb_first);
    }

    #[test]
    fn test_mode_bits() {
        assert_eq!(Mode::MODE_0.bits(), 0);
        assert_eq!(Mode::MODE_1.bits(), 1);
        assert_eq!(Mode::MODE_2.bits(), 2);
        assert_eq!(Mode::MODE_3.bits(), 3);
    }

    #[test]
    fn test_sck_frequency() {
        // 72 MHz APB2 on the reference board
        assert_eq!(ClockDivider::Div2.sck_hz(72_000_000), 36_000_000);
        assert_eq!(ClockDivider::Div256.sck_hz(72_000_000), 281_250);
    }
}
