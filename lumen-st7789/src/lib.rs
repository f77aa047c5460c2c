//! ST7789 display driver for Lumen
//!
//! Drives a 240×280 ST7789 panel over a 4-wire SPI bus in 18-bit colour.
//! Commands and small arguments go out over polled SPI; pixel payloads go
//! through a DMA channel whose completion is raised from the channel's
//! interrupt.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            │ Display (session)            │
//!            │  fill · show_string · init   │
//!            └──────────────┬───────────────┘
//!                           │
//!            ┌──────────────▼───────────────┐
//!            │ Panel                        │
//!            │  window · ChunkPlan · glyphs │
//!            └───────┬──────────────┬───────┘
//!                    │              │
//!          ┌─────────▼────┐   ┌─────▼─────────┐     DMA IRQ
//!          │ Transport    │◄──┤ BulkEngine    │◄─── on_interrupt
//!          │ (polled SPI) │   │ (DMA channel) │     (Signal)
//!          └──────────────┘   └───────────────┘
//! ```
//!
//! Hardware access goes through the traits in `lumen-hal`; the firmware
//! supplies the chip-specific implementations.
//!
//! # Usage
//!
//! ```ignore
//! static DMA_DONE: CompletionSignal = CompletionSignal::new();
//!
//! let transport = Transport::new(spi, cs, dc);
//! let bulk = BulkEngine::new(dma_channel, &DMA_DONE);
//! let pins = ControlPins { reset, backlight };
//! let mut display = Display::new(DeviceConfig::default(), transport, bulk, pins, scratch);
//!
//! display.initialize(&mut delay).await?;
//! display
//!     .show_string(FontSize::Medium, "Hello", 2, 10, 40, Rgb666::WHITE, Rgb666::BLACK)
//!     .await?;
//!
//! // in the DMA interrupt handler
//! lumen_st7789::bulk::on_interrupt(&mut irq_channel, &DMA_DONE);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod bulk;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod fill;
pub mod font;
pub mod geometry;
pub mod panel;
pub mod session;
pub mod transport;
mod window;

#[cfg(test)]
mod testing;

pub use bulk::{BulkEngine, CompletionSignal, SlotState, Transfer};
pub use color::Rgb666;
pub use command::Command;
pub use config::{BusSelect, DeviceConfig, FrameRate, PanelGeometry, MAX_BUFFER_BYTES};
pub use error::{ConfigError, Error, Result, TimeoutStage};
pub use fill::ChunkPlan;
pub use font::{render_glyph, FontSize};
pub use geometry::Rect;
pub use panel::Panel;
pub use session::{ControlPins, Display, SessionState};
pub use transport::Transport;
