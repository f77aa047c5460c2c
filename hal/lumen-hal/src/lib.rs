//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the register-level hardware traits the Lumen display
//! driver is written against. Chip-specific firmware (STM32F1 in the
//! reference board) implements them; the driver never touches registers
//! directly, which keeps it testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (board bring-up, interrupts)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-st7789 (driver core)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Control lines (chip-select, D/C, reset, backlight)
//! - [`spi::SpiPeripheral`] - Polled SPI master registers
//! - [`dma::BulkChannel`] - One-shot memory-to-peripheral DMA channel

#![no_std]
#![deny(unsafe_code)]

pub mod dma;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use dma::{BulkChannel, ChannelConfig};
pub use gpio::OutputPin;
pub use spi::{ClockDivider, LineDirection, Mode, SpiConfig, SpiPeripheral};
