//! Polled SPI transport
//!
//! Moves single bytes and blocks over the bus with chip-select bracketing.
//! Every wait on a status flag is bounded by an iteration budget rather
//! than a timer, so elapsed time scales with the CPU clock.
//!
//! The transport also owns the command/data line but does not decide its
//! level for raw sends; [`Transport::command`] and the `data*` helpers do.

use lumen_hal::{LineDirection, OutputPin, SpiConfig, SpiPeripheral};

use crate::command::Command;
use crate::config::SPIN_BUDGET;
use crate::error::{Error, Result, TimeoutStage};

/// Blocking byte transport over a polled SPI peripheral
pub struct Transport<SPI, CS, DC> {
    spi: SPI,
    /// Chip-select, active low
    cs: CS,
    /// Command/data select: low = command, high = data
    dc: DC,
    budget: u32,
}

impl<SPI, CS, DC> Transport<SPI, CS, DC>
where
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Wrap the bus and control lines. No hardware is touched.
    pub fn new(spi: SPI, cs: CS, dc: DC) -> Self {
        Self::with_budget(spi, cs, dc, SPIN_BUDGET)
    }

    /// Same as [`Transport::new`] with a custom spin budget
    pub fn with_budget(spi: SPI, cs: CS, dc: DC, budget: u32) -> Self {
        Self {
            spi,
            cs,
            dc,
            budget,
        }
    }

    /// Configure the peripheral and park the control lines
    pub fn configure(&mut self, config: &SpiConfig) {
        self.cs.set_high();
        self.dc.set_high();
        self.spi.set_tx_dma(false);
        self.spi.configure(config);
    }

    /// Spin until `ready` holds or the budget runs out
    fn spin(&self, stage: TimeoutStage, ready: impl Fn(&SPI) -> bool) -> Result<()> {
        let mut remaining = self.budget;
        while !ready(&self.spi) {
            if remaining == 0 {
                warn!("spi {} timeout", stage);
                return Err(Error::TransportTimeout(stage));
            }
            remaining -= 1;
        }
        Ok(())
    }

    /// Spin with chip-select held; release it on timeout
    fn spin_selected(&mut self, stage: TimeoutStage, ready: impl Fn(&SPI) -> bool) -> Result<()> {
        let result = self.spin(stage, ready);
        if result.is_err() {
            self.cs.set_high();
        }
        result
    }

    /// Send one byte in its own chip-select frame
    pub fn send_byte(&mut self, byte: u8) -> Result<()> {
        self.spi.set_direction(LineDirection::Transmit);
        self.cs.set_low();
        self.spin_selected(TimeoutStage::TxEmpty, |spi| spi.is_tx_empty())?;
        self.spi.write_data(byte);
        self.spin_selected(TimeoutStage::NotBusy, |spi| !spi.is_busy())?;
        self.cs.set_high();
        Ok(())
    }

    /// Send a block with chip-select held for its whole length
    pub fn send_block(&mut self, bytes: &[u8]) -> Result<()> {
        self.spi.set_direction(LineDirection::Transmit);
        self.cs.set_low();
        for &byte in bytes {
            self.spin_selected(TimeoutStage::TxEmpty, |spi| spi.is_tx_empty())?;
            self.spi.write_data(byte);
        }
        self.spin_selected(TimeoutStage::NotBusy, |spi| !spi.is_busy())?;
        self.cs.set_high();
        Ok(())
    }

    /// Turn the data line around and read one byte
    pub fn recv_byte(&mut self) -> Result<u8> {
        self.spi.set_direction(LineDirection::Receive);
        self.cs.set_low();
        self.spin_selected(TimeoutStage::RxReady, |spi| spi.is_rx_ready())?;
        let byte = self.spi.read_data();
        self.cs.set_high();
        Ok(byte)
    }

    /// Send an opcode (D/C low)
    pub fn command(&mut self, cmd: Command) -> Result<()> {
        trace!("cmd {=u8:#x}", cmd.opcode());
        self.dc.set_low();
        self.send_byte(cmd.opcode())
    }

    /// Send one argument/payload byte (D/C high)
    pub fn data(&mut self, byte: u8) -> Result<()> {
        self.dc.set_high();
        self.send_byte(byte)
    }

    /// Send argument/payload bytes in one frame (D/C high)
    pub fn data_block(&mut self, bytes: &[u8]) -> Result<()> {
        self.dc.set_high();
        self.send_block(bytes)
    }

    /// Opcode followed by its arguments
    pub fn command_with_args(&mut self, cmd: Command, args: &[u8]) -> Result<()> {
        self.command(cmd)?;
        if args.is_empty() {
            return Ok(());
        }
        self.data_block(args)
    }

    /// Select the panel and enable the peripheral's DMA request for a bulk
    /// payload transfer
    pub(crate) fn open_bulk(&mut self) {
        self.spi.set_direction(LineDirection::Transmit);
        self.cs.set_low();
        self.dc.set_high();
        self.spi.set_tx_dma(true);
    }

    /// Let the last byte drain, then drop the DMA request and deselect
    pub(crate) fn close_bulk(&mut self) -> Result<()> {
        let drained = self.spin(TimeoutStage::NotBusy, |spi| !spi.is_busy());
        self.abort_bulk();
        drained
    }

    /// Drop the DMA request and deselect without waiting
    pub(crate) fn abort_bulk(&mut self) {
        self.spi.set_tx_dma(false);
        self.cs.set_high();
    }

    /// Bus handle, for board-level inspection
    pub fn spi(&self) -> &SPI {
        &self.spi
    }

    /// Release the bus and control lines
    pub fn release(self) -> (SPI, CS, DC) {
        (self.spi, self.cs, self.dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBus, Op, Stall};

    #[test]
    fn test_send_byte_brackets_chip_select() {
        let bus = MockBus::new();
        let mut t = bus.transport();
        t.send_byte(0xA5).unwrap();

        assert_eq!(
            bus.ops_without_direction(),
            vec![Op::Cs(false), Op::Write(0xA5), Op::Cs(true)]
        );
    }

    #[test]
    fn test_command_and_data_levels() {
        let bus = MockBus::new();
        let mut t = bus.transport();
        t.command_with_args(Command::PixelFormat, &[0x66]).unwrap();

        let frames = bus.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].cmd, 0x3A);
        assert_eq!(frames[0].data, vec![0x66]);
    }

    #[test]
    fn test_block_holds_chip_select() {
        let bus = MockBus::new();
        let mut t = bus.transport();
        t.send_block(&[1, 2, 3]).unwrap();

        assert_eq!(
            bus.ops_without_direction(),
            vec![
                Op::Cs(false),
                Op::Write(1),
                Op::Write(2),
                Op::Write(3),
                Op::Cs(true)
            ]
        );
    }

    #[test]
    fn test_tx_timeout_releases_chip_select() {
        let bus = MockBus::new();
        bus.stall(Stall::TxEmpty);
        let mut t = bus.transport();

        assert_eq!(
            t.send_byte(0x11),
            Err(Error::TransportTimeout(TimeoutStage::TxEmpty))
        );
        assert!(bus.cs_high());
        assert!(bus.written().is_empty());
    }

    #[test]
    fn test_busy_timeout_releases_chip_select() {
        let bus = MockBus::new();
        bus.stall(Stall::Busy);
        let mut t = bus.transport();

        assert_eq!(
            t.send_block(&[1, 2]),
            Err(Error::TransportTimeout(TimeoutStage::NotBusy))
        );
        assert!(bus.cs_high());
        // bytes went out, only the final drain failed
        assert_eq!(bus.written(), vec![1, 2]);
    }

    #[test]
    fn test_recv_byte() {
        let bus = MockBus::new();
        bus.set_rx(0x85);
        let mut t = bus.transport();

        assert_eq!(t.recv_byte(), Ok(0x85));
        assert!(bus.ops().contains(&Op::Direction(LineDirection::Receive)));
    }

    #[test]
    fn test_recv_timeout() {
        let bus = MockBus::new();
        bus.stall(Stall::RxReady);
        let mut t = bus.transport();

        assert_eq!(
            t.recv_byte(),
            Err(Error::TransportTimeout(TimeoutStage::RxReady))
        );
        assert!(bus.cs_high());
    }

    #[test]
    fn test_budget_is_exact() {
        let bus = MockBus::new();
        // flag asserts on the 11th poll; a budget of 10 still succeeds
        bus.delay_tx_empty(10);
        let mut t = bus.transport_with_budget(10);
        assert!(t.send_byte(0).is_ok());

        bus.delay_tx_empty(12);
        let mut t = bus.transport_with_budget(10);
        assert!(t.send_byte(0).is_err());
    }
}
