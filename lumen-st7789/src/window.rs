//! Window addressing
//!
//! The controller's memory is taller than the glass; visible row 0 sits at
//! memory row `row_offset`. Columns are not offset.

use lumen_hal::{BulkChannel, OutputPin, SpiPeripheral};

use crate::command::Command;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::panel::Panel;

impl<SPI, CS, DC, CH> Panel<'_, SPI, CS, DC, CH>
where
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
    CH: BulkChannel,
{
    /// Set the inclusive drawing window in panel coordinates
    ///
    /// Subsequent memory writes fill the window row by row. A reversed or
    /// off-panel window is rejected with [`Error::OutOfBounds`] before
    /// anything is sent.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<()> {
        if x0 > x1 || y0 > y1 || x1 >= self.geometry.width || y1 >= self.geometry.height {
            warn!("window ({=u16},{=u16})..({=u16},{=u16}) off panel", x0, y0, x1, y1);
            return Err(Error::OutOfBounds);
        }

        trace!("window ({=u16},{=u16})..({=u16},{=u16})", x0, y0, x1, y1);
        let offset = self.geometry.row_offset;
        let [xs_hi, xs_lo] = x0.to_be_bytes();
        let [xe_hi, xe_lo] = x1.to_be_bytes();
        let [ys_hi, ys_lo] = (y0 + offset).to_be_bytes();
        let [ye_hi, ye_lo] = (y1 + offset).to_be_bytes();

        self.transport
            .command_with_args(Command::ColumnAddressSet, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        self.transport
            .command_with_args(Command::RowAddressSet, &[ys_hi, ys_lo, ye_hi, ye_lo])
    }

    /// [`Panel::set_window`] covering a non-empty rectangle
    pub fn set_window_rect(&mut self, rect: &Rect) -> Result<()> {
        self.check_bounds(rect)?;
        let (x0, y0, x1, y1) = rect.corners();
        self.set_window(x0, y0, x1, y1)
    }

    /// Reject empty rectangles and any part lying past the panel edge
    pub(crate) fn check_bounds(&self, rect: &Rect) -> Result<()> {
        if rect.is_empty() || !rect.fits(self.geometry.width, self.geometry.height) {
            return Err(Error::OutOfBounds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::geometry::Rect;
    use crate::testing::MockBus;

    #[test]
    fn test_row_offset_applied() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        panel.set_window(10, 0, 33, 31).unwrap();

        let frames = bus.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].cmd, 0x2A);
        assert_eq!(frames[0].data, vec![0x00, 10, 0x00, 33]);
        assert_eq!(frames[1].cmd, 0x2B);
        assert_eq!(frames[1].data, vec![0x00, 20, 0x00, 51]);
    }

    #[test]
    fn test_last_row_crosses_byte_boundary() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        panel.set_window(0, 0, 239, 279).unwrap();

        let frames = bus.frames();
        assert_eq!(frames[0].data, vec![0x00, 0x00, 0x00, 0xEF]);
        // 279 + 20 = 299 = 0x012B
        assert_eq!(frames[1].data, vec![0x00, 0x14, 0x01, 0x2B]);
    }

    #[test]
    fn test_columns_unchanged() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        panel.set_window(200, 100, 239, 100).unwrap();
        assert_eq!(bus.frames()[0].data, vec![0x00, 200, 0x00, 239]);
        assert_eq!(bus.frames()[1].data, vec![0x00, 120, 0x00, 120]);
    }

    #[test]
    fn test_off_panel_window_rejected() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        assert_eq!(panel.set_window(0, 0, 240, 10), Err(Error::OutOfBounds));
        assert_eq!(panel.set_window(0, 0, 10, 280), Err(Error::OutOfBounds));
        assert_eq!(panel.set_window(20, 0, 10, 10), Err(Error::OutOfBounds));
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_rect_near_u16_max_rejected() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let rect = Rect::new(u16::MAX - 2, 0, 24, 32);
        assert_eq!(panel.set_window_rect(&rect), Err(Error::OutOfBounds));
        assert_eq!(
            panel.set_window_rect(&Rect::new(0, 0, 0, 5)),
            Err(Error::OutOfBounds)
        );
        assert!(bus.ops().is_empty());
    }
}
