//! Bulk (DMA) channel abstractions
//!
//! A bulk channel moves a contiguous memory buffer into the SPI data
//! register without per-byte CPU work and raises a transfer-complete
//! interrupt when done.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One-shot memory-to-peripheral channel
///
/// The peripheral address is fixed by [`BulkChannel::configure`]; every
/// transfer only programs the memory side.
pub trait BulkChannel {
    /// Apply a static channel configuration. The channel is left disabled.
    fn configure(&mut self, config: &ChannelConfig);

    /// Program the source address and transfer count from `source`
    ///
    /// The channel keeps the address after this call returns. Callers must
    /// keep `source` alive and unmodified until the transfer completes or
    /// the channel is disabled; the borrow of `source` ends when this call
    /// returns, so the type system does not enforce it here.
    fn arm(&mut self, source: &[u8]);

    /// Start the programmed transfer
    fn enable(&mut self);

    /// Stop the channel
    fn disable(&mut self);

    /// Transfer-complete flag (TCIF)
    fn is_transfer_complete(&self) -> bool;

    /// Clear the transfer-complete flag
    fn clear_transfer_complete(&mut self);
}

/// Size of a single DMA beat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransferUnit {
    Byte,
    HalfWord,
    Word,
}

/// Channel arbitration priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priority {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Static channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Beat size on both sides
    pub unit: TransferUnit,
    /// Increment the memory address after each beat
    pub memory_increment: bool,
    /// Increment the peripheral address after each beat
    pub peripheral_increment: bool,
    /// Reload and restart automatically when the count reaches zero
    pub circular: bool,
    /// Arbitration priority
    pub priority: Priority,
    /// Raise an interrupt on transfer complete
    pub complete_interrupt: bool,
}

impl Default for ChannelConfig {
    /// Byte-wide, memory-incrementing, one-shot transfer into a fixed
    /// peripheral data register
    fn default() -> Self {
        Self {
            unit: TransferUnit::Byte,
            memory_increment: true,
            peripheral_increment: false,
            circular: false,
            priority: Priority::Medium,
            complete_interrupt: true,
        }
    }
}
