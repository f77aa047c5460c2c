//! Bulk transfer engine
//!
//! Drives the single DMA channel feeding the SPI data register. One
//! transfer may be in flight at a time; the slot state lives here and is
//! owned by the display session.
//!
//! Completion is split between two contexts:
//!
//! - the DMA interrupt calls [`on_interrupt`], which checks and clears the
//!   transfer-complete flag and raises the [`CompletionSignal`];
//! - the task awaiting [`Transfer::finish`] wakes, disables the channel and
//!   the SPI DMA request, releases chip-select and returns the slot to idle.
//!
//! Dropping an unfinished [`Transfer`] cancels it and performs the same
//! teardown, so the channel is never left armed after an aborted transfer.

use core::marker::PhantomData;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use lumen_hal::{BulkChannel, ChannelConfig, OutputPin, SpiPeripheral};

use crate::config::{MAX_BUFFER_BYTES, SPIN_BUDGET};
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Raised from the DMA interrupt once per finished transfer
pub type CompletionSignal = Signal<CriticalSectionRawMutex, ()>;

/// In-flight slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotState {
    /// Channel free
    Idle,
    /// Channel owns `len` bytes starting at `addr`
    InFlight { addr: usize, len: usize },
}

/// DMA interrupt handler body
///
/// `channel` is the interrupt-side view of the same hardware channel the
/// engine owns. Returns `false` and leaves everything untouched when the
/// transfer-complete flag is not set (spurious or shared interrupt).
pub fn on_interrupt<CH: BulkChannel>(channel: &mut CH, done: &CompletionSignal) -> bool {
    if !channel.is_transfer_complete() {
        return false;
    }
    channel.clear_transfer_complete();
    done.signal(());
    true
}

/// Owner of the bulk channel and its in-flight slot
pub struct BulkEngine<'d, CH> {
    channel: CH,
    done: &'d CompletionSignal,
    state: SlotState,
    budget: u32,
}

impl<'d, CH: BulkChannel> BulkEngine<'d, CH> {
    pub fn new(channel: CH, done: &'d CompletionSignal) -> Self {
        Self::with_budget(channel, done, SPIN_BUDGET)
    }

    /// Same as [`BulkEngine::new`] with a custom busy-wait budget
    pub fn with_budget(channel: CH, done: &'d CompletionSignal, budget: u32) -> Self {
        Self {
            channel,
            done,
            state: SlotState::Idle,
            budget,
        }
    }

    /// Apply the static channel setup and drop any stale completion
    pub fn configure(&mut self, config: &ChannelConfig) {
        self.channel.disable();
        self.channel.configure(config);
        self.channel.clear_transfer_complete();
        self.done.reset();
        self.state = SlotState::Idle;
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SlotState::Idle
    }

    /// Wait for a leftover transfer to be signalled complete
    ///
    /// The countdown is monotonic: a slot that never frees up fails after
    /// `budget` polls.
    fn wait_idle<SPI, CS, DC>(&mut self, transport: &mut Transport<SPI, CS, DC>) -> Result<()>
    where
        SPI: SpiPeripheral,
        CS: OutputPin,
        DC: OutputPin,
    {
        if self.is_idle() {
            return Ok(());
        }
        let mut remaining = self.budget;
        loop {
            if self.done.try_take().is_some() {
                return self.on_complete(transport);
            }
            if remaining == 0 {
                warn!("bulk channel busy timeout");
                return Err(Error::BulkBusyTimeout);
            }
            remaining -= 1;
        }
    }

    /// Arm the channel for `buf` and start it
    ///
    /// The returned [`Transfer`] keeps both the buffer and the transport
    /// borrowed until the hardware is done with them. Other buffers may be
    /// prepared while it is in flight.
    ///
    /// The borrow is the only thing keeping `buf` alive and unmodified while
    /// the channel reads it. Leaking the transfer (`core::mem::forget`,
    /// a reference cycle) ends the borrow without disarming the channel, so
    /// only leak transfers over buffers that outlive the channel, such as
    /// `static` data.
    pub fn begin<'t, 'b, SPI, CS, DC>(
        &'t mut self,
        transport: &'t mut Transport<SPI, CS, DC>,
        buf: &'b [u8],
    ) -> Result<Transfer<'t, 'd, 'b, CH, SPI, CS, DC>>
    where
        SPI: SpiPeripheral,
        CS: OutputPin,
        DC: OutputPin,
    {
        debug_assert!(buf.len() <= MAX_BUFFER_BYTES);
        self.wait_idle(transport)?;

        if buf.is_empty() {
            return Ok(Transfer {
                engine: self,
                transport,
                _buf: PhantomData,
                finished: true,
            });
        }

        trace!("bulk issue {=usize} bytes", buf.len());
        self.state = SlotState::InFlight {
            addr: buf.as_ptr() as usize,
            len: buf.len(),
        };
        self.channel.clear_transfer_complete();
        self.done.reset();
        self.channel.arm(buf);
        transport.open_bulk();
        self.channel.enable();

        Ok(Transfer {
            engine: self,
            transport,
            _buf: PhantomData,
            finished: false,
        })
    }

    /// Send `buf` and wait for the completion interrupt
    pub async fn issue<SPI, CS, DC>(
        &mut self,
        transport: &mut Transport<SPI, CS, DC>,
        buf: &[u8],
    ) -> Result<()>
    where
        SPI: SpiPeripheral,
        CS: OutputPin,
        DC: OutputPin,
    {
        self.begin(transport, buf)?.finish().await
    }

    /// [`BulkEngine::issue`] for callers without an executor
    pub fn issue_blocking<SPI, CS, DC>(
        &mut self,
        transport: &mut Transport<SPI, CS, DC>,
        buf: &[u8],
    ) -> Result<()>
    where
        SPI: SpiPeripheral,
        CS: OutputPin,
        DC: OutputPin,
    {
        embassy_futures::block_on(self.issue(transport, buf))
    }

    /// Tear down a finished transfer
    ///
    /// No-op when the slot is already idle, so a repeated completion is
    /// harmless.
    pub fn on_complete<SPI, CS, DC>(&mut self, transport: &mut Transport<SPI, CS, DC>) -> Result<()>
    where
        SPI: SpiPeripheral,
        CS: OutputPin,
        DC: OutputPin,
    {
        if self.is_idle() {
            return Ok(());
        }
        self.channel.disable();
        let drained = transport.close_bulk();
        self.state = SlotState::Idle;
        trace!("bulk done");
        drained
    }

    /// Abort whatever is in flight
    fn cancel<SPI, CS, DC>(&mut self, transport: &mut Transport<SPI, CS, DC>)
    where
        SPI: SpiPeripheral,
        CS: OutputPin,
        DC: OutputPin,
    {
        if self.is_idle() {
            return;
        }
        warn!("bulk transfer cancelled");
        self.channel.disable();
        self.channel.clear_transfer_complete();
        transport.abort_bulk();
        self.done.reset();
        self.state = SlotState::Idle;
    }

    /// Channel handle, for board-level inspection
    pub fn channel(&self) -> &CH {
        &self.channel
    }

    /// Release the channel
    pub fn release(self) -> CH {
        self.channel
    }
}

/// A transfer owned by the hardware
///
/// Must be driven to completion with [`Transfer::finish`]. Dropping it
/// early cancels the transfer.
#[must_use = "dropping a transfer cancels it"]
pub struct Transfer<'t, 'd, 'b, CH, SPI, CS, DC>
where
    CH: BulkChannel,
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
{
    engine: &'t mut BulkEngine<'d, CH>,
    transport: &'t mut Transport<SPI, CS, DC>,
    _buf: PhantomData<&'b [u8]>,
    finished: bool,
}

impl<'t, 'd, 'b, CH, SPI, CS, DC> Transfer<'t, 'd, 'b, CH, SPI, CS, DC>
where
    CH: BulkChannel,
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Completion has been signalled but not yet collected
    pub fn is_signalled(&self) -> bool {
        self.finished || self.engine.done.signaled()
    }

    /// Wait for the completion interrupt and release the channel
    pub async fn finish(mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.engine.done.wait().await;
        self.finished = true;
        self.engine.on_complete(self.transport)
    }
}

impl<CH, SPI, CS, DC> Drop for Transfer<'_, '_, '_, CH, SPI, CS, DC>
where
    CH: BulkChannel,
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
{
    fn drop(&mut self) {
        if !self.finished {
            self.engine.cancel(self.transport);
        }
    }
}
