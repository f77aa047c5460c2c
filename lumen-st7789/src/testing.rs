//! Host-side mocks
//!
//! Every mock shares one event log so tests can assert on the exact order
//! of pin, bus and channel activity.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

use embedded_hal::delay::DelayNs;
use lumen_hal::{BulkChannel, ChannelConfig, LineDirection, OutputPin, SpiConfig, SpiPeripheral};

use crate::bulk::{on_interrupt, BulkEngine, CompletionSignal};
use crate::config::{DeviceConfig, MAX_BUFFER_BYTES};
use crate::panel::Panel;
use crate::session::{ControlPins, Display};
use crate::transport::Transport;

/// One observable hardware event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Cs(bool),
    Dc(bool),
    Reset(bool),
    Backlight(bool),
    Write(u8),
    Read,
    Direction(LineDirection),
    SpiConfigure(SpiConfig),
    TxDma(bool),
    DmaConfigure,
    DmaArm(usize),
    DmaEnable,
    DmaDisable,
    DmaClearFlag,
    /// Milliseconds
    Delay(u32),
}

/// A status flag that never asserts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stall {
    TxEmpty,
    Busy,
    RxReady,
}

/// Command opcode with the data bytes that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cmd: u8,
    pub data: Vec<u8>,
}

#[derive(Default)]
struct BusState {
    ops: Vec<Op>,
    payloads: Vec<Vec<u8>>,
    /// Address and length of the buffer the channel is reading
    armed: Option<(usize, usize)>,
    completed: Vec<Vec<u8>>,
    cs_high: bool,
    backlight: bool,
    stall_tx: bool,
    stall_busy: bool,
    stall_rx: bool,
    tx_delay: u32,
    rx: u8,
    transfer_complete: bool,
}

type Shared = Rc<RefCell<BusState>>;

/// Factory for mocks wired to one shared log
pub struct MockBus {
    state: Shared,
    done: &'static CompletionSignal,
}

impl MockBus {
    pub fn new() -> Self {
        let state = BusState {
            cs_high: true,
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            done: Box::leak(Box::new(CompletionSignal::new())),
        }
    }

    fn pin(&self, role: PinRole) -> MockPin {
        MockPin {
            state: self.state.clone(),
            role,
            high: true,
        }
    }

    fn channel(&self, auto: bool) -> MockChannel {
        MockChannel {
            state: self.state.clone(),
            done: self.done,
            auto,
        }
    }

    pub fn transport(&self) -> Transport<MockSpi, MockPin, MockPin> {
        Transport::new(
            MockSpi {
                state: self.state.clone(),
            },
            self.pin(PinRole::Cs),
            self.pin(PinRole::Dc),
        )
    }

    pub fn transport_with_budget(&self, budget: u32) -> Transport<MockSpi, MockPin, MockPin> {
        Transport::with_budget(
            MockSpi {
                state: self.state.clone(),
            },
            self.pin(PinRole::Cs),
            self.pin(PinRole::Dc),
            budget,
        )
    }

    /// Engine whose channel raises completion as soon as it is enabled
    pub fn engine(&self) -> BulkEngine<'static, MockChannel> {
        BulkEngine::new(self.channel(true), self.done)
    }

    /// Engine whose completion must be raised through [`MockBus::irq_channel`]
    pub fn engine_manual(&self) -> BulkEngine<'static, MockChannel> {
        BulkEngine::new(self.channel(false), self.done)
    }

    pub fn engine_manual_with_budget(&self, budget: u32) -> BulkEngine<'static, MockChannel> {
        BulkEngine::with_budget(self.channel(false), self.done, budget)
    }

    /// Interrupt-side view of the channel
    pub fn irq_channel(&self) -> MockChannel {
        self.channel(false)
    }

    pub fn signal(&self) -> &'static CompletionSignal {
        self.done
    }

    pub fn panel(&self) -> Panel<'static, MockSpi, MockPin, MockPin, MockChannel> {
        Panel::new(self.transport(), self.engine(), Default::default())
    }

    pub fn scratch(&self) -> &'static mut [u8; MAX_BUFFER_BYTES] {
        Box::leak(Box::new([0u8; MAX_BUFFER_BYTES]))
    }

    pub fn display(&self, config: DeviceConfig) -> MockDisplay {
        Display::new(
            config,
            self.transport(),
            self.engine(),
            ControlPins {
                reset: self.pin(PinRole::Reset),
                backlight: self.pin(PinRole::Backlight),
            },
            self.scratch(),
        )
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            state: self.state.clone(),
        }
    }

    pub fn stall(&self, stall: Stall) {
        let mut s = self.state.borrow_mut();
        match stall {
            Stall::TxEmpty => s.stall_tx = true,
            Stall::Busy => s.stall_busy = true,
            Stall::RxReady => s.stall_rx = true,
        }
    }

    /// Report the transmit buffer full for the next `polls` polls
    pub fn delay_tx_empty(&self, polls: u32) {
        self.state.borrow_mut().tx_delay = polls;
    }

    pub fn set_rx(&self, byte: u8) {
        self.state.borrow_mut().rx = byte;
    }

    pub fn clear(&self) {
        let mut s = self.state.borrow_mut();
        s.ops.clear();
        s.payloads.clear();
        s.completed.clear();
    }

    /// Finish the armed transfer from the interrupt side
    ///
    /// Copies the armed buffer as it reads at this moment, then runs the
    /// interrupt handler. Only for transfers whose [`Transfer`] is still
    /// alive.
    ///
    /// [`Transfer`]: crate::bulk::Transfer
    #[allow(unsafe_code)]
    pub fn complete(&self) -> bool {
        let armed = self.state.borrow_mut().armed.take();
        if let Some((addr, len)) = armed {
            // SAFETY: the live transfer keeps `len` bytes at `addr` borrowed
            // and unmodified until it finishes.
            let bytes = unsafe { std::slice::from_raw_parts(addr as *const u8, len) }.to_vec();
            self.state.borrow_mut().completed.push(bytes);
        }
        on_interrupt(&mut self.irq_channel(), self.done)
    }

    pub fn ops(&self) -> Vec<Op> {
        self.state.borrow().ops.clone()
    }

    pub fn ops_without_direction(&self) -> Vec<Op> {
        self.ops()
            .into_iter()
            .filter(|op| !matches!(op, Op::Direction(_)))
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.state.borrow().ops.iter().filter(|op| pred(op)).count()
    }

    pub fn cs_high(&self) -> bool {
        self.state.borrow().cs_high
    }

    pub fn backlight_on(&self) -> bool {
        self.state.borrow().backlight
    }

    /// Bytes written through the polled data register
    pub fn written(&self) -> Vec<u8> {
        self.state
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Write(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Buffers handed to the bulk channel, in order
    pub fn dma_payloads(&self) -> Vec<Vec<u8>> {
        self.state.borrow().payloads.clone()
    }

    /// Buffers as they read when [`MockBus::complete`] ran, in order
    pub fn completed_payloads(&self) -> Vec<Vec<u8>> {
        self.state.borrow().completed.clone()
    }

    /// Group the traffic into command frames
    ///
    /// Bytes written with D/C low start a frame; polled data bytes and
    /// started bulk payloads extend the current one.
    pub fn frames(&self) -> Vec<Frame> {
        let s = self.state.borrow();
        let mut frames: Vec<Frame> = Vec::new();
        let mut dc = true;
        let mut armed: Option<usize> = None;
        let mut arms = 0;
        for op in &s.ops {
            match *op {
                Op::Dc(level) => dc = level,
                Op::Write(b) if !dc => frames.push(Frame {
                    cmd: b,
                    data: Vec::new(),
                }),
                Op::Write(b) => {
                    if let Some(f) = frames.last_mut() {
                        f.data.push(b);
                    }
                }
                Op::DmaArm(_) => {
                    armed = Some(arms);
                    arms += 1;
                }
                Op::DmaEnable => {
                    if let (Some(i), Some(f)) = (armed.take(), frames.last_mut()) {
                        f.data.extend_from_slice(&s.payloads[i]);
                    }
                }
                _ => {}
            }
        }
        frames
    }

    /// Frames for one opcode
    pub fn frames_for(&self, cmd: u8) -> Vec<Frame> {
        self.frames().into_iter().filter(|f| f.cmd == cmd).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PinRole {
    Cs,
    Dc,
    Reset,
    Backlight,
}

pub struct MockPin {
    state: Shared,
    role: PinRole,
    high: bool,
}

impl MockPin {
    fn record(&mut self, high: bool) {
        self.high = high;
        let mut s = self.state.borrow_mut();
        let op = match self.role {
            PinRole::Cs => {
                s.cs_high = high;
                Op::Cs(high)
            }
            PinRole::Dc => Op::Dc(high),
            PinRole::Reset => Op::Reset(high),
            PinRole::Backlight => {
                s.backlight = high;
                Op::Backlight(high)
            }
        };
        s.ops.push(op);
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockSpi {
    state: Shared,
}

impl SpiPeripheral for MockSpi {
    fn configure(&mut self, config: &SpiConfig) {
        self.state.borrow_mut().ops.push(Op::SpiConfigure(*config));
    }

    fn set_direction(&mut self, direction: LineDirection) {
        self.state.borrow_mut().ops.push(Op::Direction(direction));
    }

    fn is_tx_empty(&self) -> bool {
        let mut s = self.state.borrow_mut();
        if s.stall_tx {
            return false;
        }
        if s.tx_delay > 0 {
            s.tx_delay -= 1;
            return false;
        }
        true
    }

    fn is_rx_ready(&self) -> bool {
        !self.state.borrow().stall_rx
    }

    fn is_busy(&self) -> bool {
        self.state.borrow().stall_busy
    }

    fn write_data(&mut self, byte: u8) {
        self.state.borrow_mut().ops.push(Op::Write(byte));
    }

    fn read_data(&mut self) -> u8 {
        let mut s = self.state.borrow_mut();
        s.ops.push(Op::Read);
        s.rx
    }

    fn set_tx_dma(&mut self, enabled: bool) {
        self.state.borrow_mut().ops.push(Op::TxDma(enabled));
    }
}

pub struct MockChannel {
    state: Shared,
    done: &'static CompletionSignal,
    /// Raise completion from `enable`
    auto: bool,
}

impl BulkChannel for MockChannel {
    fn configure(&mut self, _config: &ChannelConfig) {
        self.state.borrow_mut().ops.push(Op::DmaConfigure);
    }

    fn arm(&mut self, source: &[u8]) {
        let mut s = self.state.borrow_mut();
        s.ops.push(Op::DmaArm(source.len()));
        s.payloads.push(source.to_vec());
        s.armed = Some((source.as_ptr() as usize, source.len()));
    }

    fn enable(&mut self) {
        self.state.borrow_mut().ops.push(Op::DmaEnable);
        if self.auto {
            self.done.signal(());
        } else {
            self.state.borrow_mut().transfer_complete = true;
        }
    }

    fn disable(&mut self) {
        let mut s = self.state.borrow_mut();
        s.ops.push(Op::DmaDisable);
        s.armed = None;
    }

    fn is_transfer_complete(&self) -> bool {
        self.state.borrow().transfer_complete
    }

    fn clear_transfer_complete(&mut self) {
        let mut s = self.state.borrow_mut();
        s.ops.push(Op::DmaClearFlag);
        s.transfer_complete = false;
    }
}

pub struct MockDelay {
    state: Shared,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.state
            .borrow_mut()
            .ops
            .push(Op::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().ops.push(Op::Delay(ms));
    }
}

pub type MockDisplay =
    Display<'static, MockSpi, MockPin, MockPin, MockChannel, MockPin, MockPin>;

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

/// Poll a future once without an executor
pub fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    fut.poll(&mut cx)
}
