//! Device session
//!
//! Owns the panel, the reset and backlight lines, the fill scratch buffer
//! and the configuration. Drawing is refused until [`Display::initialize`]
//! has completed.
//!
//! ```text
//! Uninitialized ──initialize──► Configuring ──(sequence ok)──► Ready
//!       ▲                            │
//!       └──── bad bus/remap ─────────┘
//! ```

use embedded_hal::delay::DelayNs;
use lumen_hal::{BulkChannel, ChannelConfig, OutputPin, SpiConfig, SpiPeripheral};

use crate::bulk::BulkEngine;
use crate::color::Rgb666;
use crate::command::{Command, MADCTL_DEFAULT, PIXEL_FORMAT_18BIT};
use crate::config::{DeviceConfig, MAX_BUFFER_BYTES, RESET_HOLD_MS};
use crate::error::{Error, Result};
use crate::font::FontSize;
use crate::geometry::Rect;
use crate::panel::Panel;
use crate::transport::Transport;

/// Settle time after leaving sleep
const WAKE_SETTLE_MS: u32 = 20;

/// Settle time after entering sleep
const SLEEP_SETTLE_MS: u32 = 120;

/// Settle time after display-on
const DISPLAY_ON_SETTLE_MS: u32 = 10;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    Uninitialized,
    Configuring,
    Ready,
}

/// Lines the session drives directly
pub struct ControlPins<RST, BL> {
    /// Hardware reset, active low
    pub reset: RST,
    /// Backlight enable, active high
    pub backlight: BL,
}

/// An ST7789 panel session
pub struct Display<'d, SPI, CS, DC, CH, RST, BL> {
    panel: Panel<'d, SPI, CS, DC, CH>,
    reset: RST,
    backlight: BL,
    scratch: &'d mut [u8; MAX_BUFFER_BYTES],
    config: DeviceConfig,
    state: SessionState,
}

impl<'d, SPI, CS, DC, CH, RST, BL> Display<'d, SPI, CS, DC, CH, RST, BL>
where
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
    CH: BulkChannel,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Assemble a session. No hardware is touched.
    ///
    /// `scratch` backs every fill and string; a `static_cell::StaticCell`
    /// works well on targets.
    pub fn new(
        config: DeviceConfig,
        transport: Transport<SPI, CS, DC>,
        bulk: BulkEngine<'d, CH>,
        pins: ControlPins<RST, BL>,
        scratch: &'d mut [u8; MAX_BUFFER_BYTES],
    ) -> Self {
        Self {
            panel: Panel::new(transport, bulk, config.geometry),
            reset: pins.reset,
            backlight: pins.backlight,
            scratch,
            config,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Bring the panel up and clear it to black
    ///
    /// An unsupported bus routing is rejected before any line is driven.
    /// Failures after that leave the session in
    /// [`SessionState::Configuring`].
    pub async fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.state = SessionState::Configuring;
        if let Err(e) = self.config.validate() {
            warn!("rejected bus configuration: {}", e);
            self.state = SessionState::Uninitialized;
            return Err(e.into());
        }

        debug!("configuring bus and bulk channel");
        self.panel.transport.configure(&SpiConfig::default());
        self.panel.bulk.configure(&ChannelConfig::default());
        self.reset.set_high();
        self.backlight.set_low();

        self.reset_pulse(delay);

        let t = &mut self.panel.transport;
        t.command(Command::SleepOut)?;
        delay.delay_ms(WAKE_SETTLE_MS);
        t.command_with_args(Command::PixelFormat, &[PIXEL_FORMAT_18BIT])?;
        t.command_with_args(Command::MemoryAccessControl, &[MADCTL_DEFAULT])?;

        let bounds = self.panel.bounds();
        self.panel.set_window_rect(&bounds)?;
        self.panel.transport.command_with_args(
            Command::FrameRateControl2,
            &[self.config.frame_rate.register()],
        )?;

        debug!("clearing panel");
        self.panel
            .fill(&mut self.scratch[..], bounds, Rgb666::BLACK)
            .await?;

        self.backlight.set_high();
        self.panel.transport.command(Command::DisplayOn)?;
        delay.delay_ms(DISPLAY_ON_SETTLE_MS);

        self.state = SessionState::Ready;
        info!("display ready ({=u8} Hz)", self.config.frame_rate.hz());
        Ok(())
    }

    fn reset_pulse<D: DelayNs>(&mut self, delay: &mut D) {
        self.reset.set_low();
        delay.delay_ms(RESET_HOLD_MS);
        self.reset.set_high();
        delay.delay_ms(RESET_HOLD_MS);
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    /// Pulse the reset line
    ///
    /// The controller returns to its power-on defaults, so the session must
    /// be initialized again.
    pub fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.reset_pulse(delay);
        self.state = SessionState::Uninitialized;
    }

    /// Software reset (SWRESET)
    ///
    /// Like [`Display::hard_reset`], leaves the session uninitialized.
    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.panel.transport.command(Command::SoftwareReset)?;
        delay.delay_ms(RESET_HOLD_MS);
        self.state = SessionState::Uninitialized;
        Ok(())
    }

    pub fn set_backlight(&mut self, on: bool) {
        self.backlight.set_state(on);
    }

    pub fn backlight_on(&mut self) {
        self.set_backlight(true);
    }

    pub fn backlight_off(&mut self) {
        self.set_backlight(false);
    }

    pub fn is_backlight_on(&self) -> bool {
        self.backlight.is_set_high()
    }

    /// Write the display brightness register
    pub fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.ensure_ready()?;
        self.panel
            .transport
            .command_with_args(Command::WriteBrightness, &[level])
    }

    pub fn set_display_on(&mut self, on: bool) -> Result<()> {
        self.ensure_ready()?;
        let cmd = if on {
            Command::DisplayOn
        } else {
            Command::DisplayOff
        };
        self.panel.transport.command(cmd)
    }

    /// Colour inversion
    pub fn set_inverted(&mut self, inverted: bool) -> Result<()> {
        self.ensure_ready()?;
        let cmd = if inverted {
            Command::InversionOn
        } else {
            Command::InversionOff
        };
        self.panel.transport.command(cmd)
    }

    /// Enter sleep. Frame memory is kept.
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.ensure_ready()?;
        self.panel.transport.command(Command::SleepIn)?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.ensure_ready()?;
        self.panel.transport.command(Command::SleepOut)?;
        delay.delay_ms(WAKE_SETTLE_MS);
        Ok(())
    }

    /// Send a read command and return the first byte of the reply
    pub fn read_register(&mut self, cmd: Command) -> Result<u8> {
        self.ensure_ready()?;
        let t = &mut self.panel.transport;
        t.command(cmd)?;
        t.recv_byte()
    }

    /// Set the drawing window in panel coordinates (inclusive)
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<()> {
        self.ensure_ready()?;
        self.panel.set_window(x0, y0, x1, y1)
    }

    /// Fill `rect` through the bulk channel
    pub async fn fill(&mut self, rect: Rect, color: Rgb666) -> Result<()> {
        self.ensure_ready()?;
        self.panel.fill(&mut self.scratch[..], rect, color).await
    }

    /// Fill `rect` with polled writes only
    pub fn fill_polled(&mut self, rect: Rect, color: Rgb666) -> Result<()> {
        self.ensure_ready()?;
        self.panel.fill_polled(rect, color)
    }

    /// Fill the whole panel with black
    pub async fn clear(&mut self) -> Result<()> {
        let bounds = self.panel.bounds();
        self.fill(bounds, Rgb666::BLACK).await
    }

    /// Draw one character cell
    pub async fn show_glyph(
        &mut self,
        size: FontSize,
        code: u8,
        x: u16,
        y: u16,
        fg: Rgb666,
        bg: Rgb666,
    ) -> Result<()> {
        self.ensure_ready()?;
        self.panel
            .show_glyph(&mut self.scratch[..], size, code, x, y, fg, bg)
            .await
    }

    /// Draw a line of text, advancing by cell width plus `spacing`
    #[allow(clippy::too_many_arguments)]
    pub async fn show_string(
        &mut self,
        size: FontSize,
        text: &str,
        spacing: i16,
        x: i32,
        y: u16,
        fg: Rgb666,
        bg: Rgb666,
    ) -> Result<()> {
        self.ensure_ready()?;
        self.panel
            .show_string(&mut self.scratch[..], size, text, spacing, x, y, fg, bg)
            .await
    }

    /// Tear the session down
    pub fn release(self) -> (Panel<'d, SPI, CS, DC, CH>, ControlPins<RST, BL>) {
        (
            self.panel,
            ControlPins {
                reset: self.reset,
                backlight: self.backlight,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusSelect;
    use crate::error::ConfigError;
    use crate::testing::{MockBus, MockDisplay, Op, Stall};
    use embassy_futures::block_on;
    use lumen_hal::Mode;

    fn ready(bus: &MockBus) -> MockDisplay {
        let mut display = bus.display(DeviceConfig::default());
        block_on(display.initialize(&mut bus.delay())).unwrap();
        bus.clear();
        display
    }

    #[test]
    fn test_secondary_remap_touches_nothing() {
        let bus = MockBus::new();
        let config = DeviceConfig {
            bus: BusSelect::Secondary,
            remap: true,
            ..Default::default()
        };
        let mut display = bus.display(config);

        let result = block_on(display.initialize(&mut bus.delay()));
        assert_eq!(
            result,
            Err(Error::Configuration(ConfigError::RemapUnsupported))
        );
        assert_eq!(display.state(), SessionState::Uninitialized);
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_init_command_sequence() {
        let bus = MockBus::new();
        let mut display = bus.display(DeviceConfig::default());
        block_on(display.initialize(&mut bus.delay())).unwrap();
        assert_eq!(display.state(), SessionState::Ready);

        let frames = bus.frames();
        let head: Vec<(u8, Vec<u8>)> = frames[..6]
            .iter()
            .map(|f| (f.cmd, f.data.clone()))
            .collect();
        assert_eq!(
            head,
            vec![
                (0x11, vec![]),
                (0x3A, vec![0x66]),
                (0x36, vec![0x00]),
                (0x2A, vec![0x00, 0x00, 0x00, 0xEF]),
                (0x2B, vec![0x00, 0x14, 0x01, 0x2B]),
                (0xC6, vec![0x09]),
            ]
        );
        // clear: 17 bands of window + memory write
        assert_eq!(frames.len(), 6 + 17 * 3 + 1);
        assert_eq!(frames.last().map(|f| f.cmd), Some(0x29));
        assert_eq!(bus.dma_payloads().len(), 17);
    }

    #[test]
    fn test_init_configures_bus_mode0_before_traffic() {
        let bus = MockBus::new();
        let mut display = bus.display(DeviceConfig::default());
        block_on(display.initialize(&mut bus.delay())).unwrap();

        let ops = bus.ops();
        let configured: Vec<SpiConfig> = ops
            .iter()
            .filter_map(|op| match op {
                Op::SpiConfigure(config) => Some(*config),
                _ => None,
            })
            .collect();
        assert_eq!(configured.len(), 1);
        assert_eq!(configured[0].mode, Mode::MODE_0);
        assert_eq!(configured[0].mode.bits(), 0);
        assert!(configured[0].msb_first);

        let first_write = ops.iter().position(|op| matches!(op, Op::Write(_))).unwrap();
        let spi_setup = ops.iter().position(|op| matches!(op, Op::SpiConfigure(_))).unwrap();
        assert!(spi_setup < first_write);
    }

    #[test]
    fn test_init_reset_pulse_and_backlight() {
        let bus = MockBus::new();
        let mut display = bus.display(DeviceConfig::default());
        block_on(display.initialize(&mut bus.delay())).unwrap();

        let ops = bus.ops();
        let first_write = ops.iter().position(|op| matches!(op, Op::Write(_))).unwrap();
        let pulse = ops
            .windows(4)
            .position(|w| {
                w == [
                    Op::Reset(false),
                    Op::Delay(20),
                    Op::Reset(true),
                    Op::Delay(20),
                ]
            })
            .unwrap();
        assert!(pulse < first_write);

        let backlight = ops.iter().position(|op| *op == Op::Backlight(true)).unwrap();
        let last_dma = ops.iter().rposition(|op| *op == Op::DmaDisable).unwrap();
        let display_on = ops.iter().position(|op| *op == Op::Write(0x29)).unwrap();
        assert!(last_dma < backlight && backlight < display_on);
        assert_eq!(ops.last(), Some(&Op::Delay(10)));
        assert!(bus.backlight_on());
    }

    #[test]
    fn test_frame_rate_from_config() {
        let bus = MockBus::new();
        let config = DeviceConfig {
            frame_rate: crate::FrameRate::from_hz(60),
            ..Default::default()
        };
        let mut display = bus.display(config);
        block_on(display.initialize(&mut bus.delay())).unwrap();
        assert_eq!(bus.frames_for(0xC6)[0].data, vec![0x0F]);
    }

    #[test]
    fn test_drawing_refused_before_init() {
        let bus = MockBus::new();
        let mut display = bus.display(DeviceConfig::default());

        assert_eq!(
            block_on(display.fill(Rect::new(0, 0, 10, 10), Rgb666::RED)),
            Err(Error::NotReady)
        );
        assert_eq!(
            block_on(display.show_string(FontSize::Medium, "hi", 0, 0, 0, Rgb666::WHITE, Rgb666::BLACK)),
            Err(Error::NotReady)
        );
        assert_eq!(display.set_brightness(0x80), Err(Error::NotReady));
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_failed_init_stays_configuring() {
        let bus = MockBus::new();
        bus.stall(Stall::TxEmpty);
        let mut display = bus.display(DeviceConfig::default());

        assert!(matches!(
            block_on(display.initialize(&mut bus.delay())),
            Err(Error::TransportTimeout(_))
        ));
        assert_eq!(display.state(), SessionState::Configuring);
        assert_eq!(
            block_on(display.clear()),
            Err(Error::NotReady)
        );
        assert!(bus.cs_high());
    }

    #[test]
    fn test_reference_fill_scenario() {
        let bus = MockBus::new();
        let mut display = ready(&bus);
        block_on(display.fill(Rect::new(0, 0, 240, 280), Rgb666::new(63, 30, 10))).unwrap();

        let payloads = bus.dma_payloads();
        assert_eq!(payloads.len(), 17);
        assert_eq!(&payloads[0][..6], &[0, 132, 212, 0, 132, 212]);
    }

    #[test]
    fn test_control_commands() {
        let bus = MockBus::new();
        let mut display = ready(&bus);

        display.set_brightness(0x7F).unwrap();
        display.set_inverted(true).unwrap();
        display.set_display_on(false).unwrap();
        let cmds: Vec<(u8, Vec<u8>)> = bus
            .frames()
            .into_iter()
            .map(|f| (f.cmd, f.data))
            .collect();
        assert_eq!(
            cmds,
            vec![(0x51, vec![0x7F]), (0x21, vec![]), (0x28, vec![])]
        );

        display.backlight_off();
        assert!(!bus.backlight_on());
        assert!(!display.is_backlight_on());
        display.set_backlight(true);
        assert!(display.is_backlight_on());
    }

    #[test]
    fn test_sleep_and_wake() {
        let bus = MockBus::new();
        let mut display = ready(&bus);
        let mut delay = bus.delay();

        display.sleep(&mut delay).unwrap();
        display.wake(&mut delay).unwrap();
        let ops = bus.ops();
        let sleep_in = ops.iter().position(|op| *op == Op::Write(0x10)).unwrap();
        let sleep_out = ops.iter().position(|op| *op == Op::Write(0x11)).unwrap();
        assert!(sleep_in < sleep_out);
        assert!(ops.contains(&Op::Delay(120)));
        assert_eq!(ops.last(), Some(&Op::Delay(20)));
    }

    #[test]
    fn test_soft_reset_requires_reinit() {
        let bus = MockBus::new();
        let mut display = ready(&bus);

        display.soft_reset(&mut bus.delay()).unwrap();
        assert_eq!(bus.frames()[0].cmd, 0x01);
        assert_eq!(display.state(), SessionState::Uninitialized);
        assert_eq!(display.set_inverted(false), Err(Error::NotReady));

        block_on(display.initialize(&mut bus.delay())).unwrap();
        assert!(display.is_ready());
    }

    #[test]
    fn test_read_register() {
        let bus = MockBus::new();
        let mut display = ready(&bus);
        bus.set_rx(0x9C);

        assert_eq!(display.read_register(Command::ReadPowerMode), Ok(0x9C));
        assert_eq!(bus.frames()[0].cmd, 0x0A);
        assert!(bus.ops().contains(&Op::Read));
    }

    #[test]
    fn test_show_string_after_init() {
        let bus = MockBus::new();
        let mut display = ready(&bus);
        block_on(display.show_string(
            FontSize::Medium,
            "OK",
            2,
            100,
            124,
            Rgb666::WHITE,
            Rgb666::BLACK,
        ))
        .unwrap();
        assert_eq!(bus.dma_payloads().len(), 2);
        assert_eq!(bus.frames_for(0x2A)[1].data, vec![0, 126, 0, 149]);
    }
}
