//! Device configuration
//!
//! Fixed at construction and owned by the [`Display`](crate::Display)
//! session. Control pins are passed to the session as typed objects, so
//! only bus routing and panel parameters live here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Visible panel width in pixels
pub const PANEL_WIDTH: u16 = 240;

/// Visible panel height in pixels
pub const PANEL_HEIGHT: u16 = 280;

/// Rows of controller memory above the visible area
pub const ROW_OFFSET: u16 = 20;

/// Largest single bulk transfer in bytes (12 KiB)
pub const MAX_BUFFER_BYTES: usize = 0x3000;

/// Iterations spent polling a bus or slot flag before giving up
pub const SPIN_BUDGET: u32 = 0xFFFF;

/// Reset pulse and settle time in milliseconds
pub const RESET_HOLD_MS: u32 = 20;

/// Which SPI peripheral drives the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BusSelect {
    /// SPI1 (APB2)
    #[default]
    Primary,
    /// SPI2 (APB1)
    Secondary,
}

/// GPIO port letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

/// Clock and data pins used by a bus routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPins {
    pub port: Port,
    pub sck: u8,
    pub mosi: u8,
}

impl BusSelect {
    /// Resolve the pin routing for this bus
    ///
    /// Only the primary bus has an alternate (remapped) routing.
    pub fn pins(self, remap: bool) -> Result<BusPins, ConfigError> {
        match (self, remap) {
            (BusSelect::Primary, false) => Ok(BusPins {
                port: Port::A,
                sck: 5,
                mosi: 7,
            }),
            (BusSelect::Primary, true) => Ok(BusPins {
                port: Port::B,
                sck: 3,
                mosi: 5,
            }),
            (BusSelect::Secondary, false) => Ok(BusPins {
                port: Port::B,
                sck: 13,
                mosi: 15,
            }),
            (BusSelect::Secondary, true) => Err(ConfigError::RemapUnsupported),
        }
    }
}

/// Normal-mode frame rate, stored as the FRCTRL2 register value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameRate(u8);

/// Refresh rate in Hz for FRCTRL2 values 0x00..=0x1F
const FRAME_RATE_HZ: [u8; 32] = [
    119, 111, 105, 99, 94, 90, 86, 82, 78, 75, 72, 69, 67, 64, 62, 60, //
    58, 57, 55, 53, 52, 50, 49, 48, 46, 45, 44, 43, 42, 41, 40, 39,
];

impl FrameRate {
    /// Nearest supported rate to `hz`
    pub fn from_hz(hz: u8) -> Self {
        let mut best = 0usize;
        let mut best_diff = u8::MAX;
        for (i, &rate) in FRAME_RATE_HZ.iter().enumerate() {
            let diff = rate.abs_diff(hz);
            if diff < best_diff {
                best = i;
                best_diff = diff;
            }
        }
        Self(best as u8)
    }

    /// Raw register value, masked to the valid range
    pub const fn from_register(value: u8) -> Self {
        Self(value & 0x1F)
    }

    pub const fn register(&self) -> u8 {
        self.0
    }

    pub fn hz(&self) -> u8 {
        FRAME_RATE_HZ[self.0 as usize]
    }
}

impl Default for FrameRate {
    /// 75 Hz (0x09)
    fn default() -> Self {
        Self(0x09)
    }
}

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelGeometry {
    pub width: u16,
    pub height: u16,
    /// Added to every row address
    pub row_offset: u16,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            row_offset: ROW_OFFSET,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// SPI peripheral selection
    pub bus: BusSelect,
    /// Use the alternate pin routing (primary bus only)
    pub remap: bool,
    /// Normal-mode refresh rate
    pub frame_rate: FrameRate,
    /// Panel dimensions and address offset
    pub geometry: PanelGeometry,
}

impl DeviceConfig {
    /// Check the bus/remap combination and return the resolved pins
    pub fn validate(&self) -> Result<BusPins, ConfigError> {
        self.bus.pins(self.remap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = DeviceConfig::default();
        let pins = cfg.validate().unwrap();
        assert_eq!(pins, BusPins { port: Port::A, sck: 5, mosi: 7 });
        assert_eq!(cfg.geometry.width, 240);
        assert_eq!(cfg.geometry.height, 280);
        assert_eq!(cfg.geometry.row_offset, 20);
    }

    #[test]
    fn test_primary_remap_uses_port_b() {
        let pins = BusSelect::Primary.pins(true).unwrap();
        assert_eq!(pins, BusPins { port: Port::B, sck: 3, mosi: 5 });
    }

    #[test]
    fn test_secondary_remap_rejected() {
        let cfg = DeviceConfig {
            bus: BusSelect::Secondary,
            remap: true,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::RemapUnsupported));
        assert!(BusSelect::Secondary.pins(false).is_ok());
    }

    #[test]
    fn test_frame_rate_lookup() {
        assert_eq!(FrameRate::default().register(), 0x09);
        assert_eq!(FrameRate::default().hz(), 75);
        assert_eq!(FrameRate::from_hz(60).register(), 0x0F);
        assert_eq!(FrameRate::from_hz(200).register(), 0x00);
        assert_eq!(FrameRate::from_hz(10).register(), 0x1F);
        assert_eq!(FrameRate::from_register(0xFF).register(), 0x1F);
    }
}
