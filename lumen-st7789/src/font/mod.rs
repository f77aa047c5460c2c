//! Bitmap text
//!
//! Glyphs are 1 bit per pixel, packed row-major with the most significant
//! bit leftmost. Rendering expands them into wire triplets that go out as a
//! single bulk transfer per glyph.

mod table;

use lumen_hal::{BulkChannel, OutputPin, SpiPeripheral};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{Rgb666, BYTES_PER_PIXEL};
use crate::command::Command;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::panel::Panel;

pub use table::GLYPH_BYTES;

/// First code in every font table
pub const FIRST_PRINTABLE: u8 = 32;

/// Last code in every font table
pub const LAST_PRINTABLE: u8 = 126;

/// Character cell sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontSize {
    /// 10×16, no table
    Small,
    /// 24×32
    #[default]
    Medium,
    /// 48×64, no table
    Large,
}

impl FontSize {
    pub const fn cell_width(self) -> u16 {
        match self {
            FontSize::Small => 10,
            FontSize::Medium => 24,
            FontSize::Large => 48,
        }
    }

    pub const fn cell_height(self) -> u16 {
        match self {
            FontSize::Small => 16,
            FontSize::Medium => 32,
            FontSize::Large => 64,
        }
    }

    /// Wire bytes of one rendered cell
    pub const fn cell_bytes(self) -> usize {
        self.cell_width() as usize * self.cell_height() as usize * BYTES_PER_PIXEL
    }

    /// Packed bitmap for `code`, if this size has a table and the code is
    /// printable
    pub fn glyph(self, code: u8) -> Option<&'static [u8]> {
        if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&code) {
            return None;
        }
        match self {
            FontSize::Medium => {
                let start = (code - FIRST_PRINTABLE) as usize * GLYPH_BYTES;
                table::FONT_24X32.get(start..start + GLYPH_BYTES)
            }
            FontSize::Small | FontSize::Large => None,
        }
    }
}

/// Expand a packed bitmap into `out`, returning the bytes written
///
/// Each row starts on a byte boundary.
fn rasterize(bitmap: &[u8], width: u16, fg: Rgb666, bg: Rgb666, out: &mut [u8]) -> usize {
    let fg = fg.to_wire();
    let bg = bg.to_wire();
    let row_bytes = (width as usize).div_ceil(8);
    let mut pixels = out.chunks_exact_mut(BYTES_PER_PIXEL);
    let mut written = 0;

    for row in bitmap.chunks_exact(row_bytes) {
        for col in 0..width as usize {
            let set = row[col / 8] & (0x80 >> (col % 8)) != 0;
            if let Some(px) = pixels.next() {
                px.copy_from_slice(if set { &fg } else { &bg });
                written += BYTES_PER_PIXEL;
            }
        }
    }
    written
}

/// Render one character cell into `out`
///
/// `out` must hold [`FontSize::cell_bytes`], otherwise
/// [`Error::BufferTooSmall`] and nothing is written. Returns the number of
/// bytes written.
pub fn render_glyph(
    size: FontSize,
    code: u8,
    fg: Rgb666,
    bg: Rgb666,
    out: &mut [u8],
) -> Result<usize> {
    let bitmap = size.glyph(code).ok_or(Error::UnsupportedGlyph)?;
    if out.len() < size.cell_bytes() {
        return Err(Error::BufferTooSmall);
    }
    Ok(rasterize(bitmap, size.cell_width(), fg, bg, out))
}

fn render_char(size: FontSize, c: char, fg: Rgb666, bg: Rgb666, out: &mut [u8]) -> Result<usize> {
    let code = u8::try_from(c).map_err(|_| Error::UnsupportedGlyph)?;
    render_glyph(size, code, fg, bg, out)
}

impl<SPI, CS, DC, CH> Panel<'_, SPI, CS, DC, CH>
where
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
    CH: BulkChannel,
{
    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// The cell is rendered and bounds-checked before anything is sent.
    #[allow(clippy::too_many_arguments)]
    pub async fn show_glyph(
        &mut self,
        scratch: &mut [u8],
        size: FontSize,
        code: u8,
        x: u16,
        y: u16,
        fg: Rgb666,
        bg: Rgb666,
    ) -> Result<()> {
        let len = render_glyph(size, code, fg, bg, scratch)?;
        let cell = Rect::new(x, y, size.cell_width(), size.cell_height());
        self.set_window_rect(&cell)?;
        self.transport.command(Command::MemoryWrite)?;
        self.bulk.issue(&mut self.transport, &scratch[..len]).await
    }

    /// Draw `text` left to right starting at `(x, y)`
    ///
    /// The cursor advances by the cell width plus `spacing`, which may be
    /// negative. `scratch` is split in two so the next glyph is rendered
    /// while the previous one is on the wire. Stops at the first character
    /// outside the table, or at the first cell that does not fit on the
    /// panel, after the glyph in flight has finished. Each half of
    /// `scratch` must hold one cell.
    #[allow(clippy::too_many_arguments)]
    pub async fn show_string(
        &mut self,
        scratch: &mut [u8],
        size: FontSize,
        text: &str,
        spacing: i16,
        x: i32,
        y: u16,
        fg: Rgb666,
        bg: Rgb666,
    ) -> Result<()> {
        let half = scratch.len() / 2;
        let (mut front, mut back) = scratch.split_at_mut(half);

        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Ok(());
        };
        let mut len = render_char(size, first, fg, bg, front)?;
        let step = size.cell_width() as i32 + spacing as i32;
        let mut x = x;

        loop {
            let Ok(left) = u16::try_from(x) else {
                warn!("string cursor {=i32} left the panel", x);
                return Err(Error::OutOfBounds);
            };
            let cell = Rect::new(left, y, size.cell_width(), size.cell_height());
            self.set_window_rect(&cell)?;
            self.transport.command(Command::MemoryWrite)?;

            let transfer = self.bulk.begin(&mut self.transport, &front[..len])?;
            let next = chars.next().map(|c| render_char(size, c, fg, bg, &mut *back));
            transfer.finish().await?;

            match next {
                None => return Ok(()),
                Some(rendered) => len = rendered?,
            }
            core::mem::swap(&mut front, &mut back);
            x += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{poll_once, MockBus, Op};
    use core::pin::pin;
    use core::task::Poll;
    use embassy_futures::block_on;

    const FG: Rgb666 = Rgb666::new(63, 30, 10);
    const BG: Rgb666 = Rgb666::BLACK;

    #[test]
    fn test_cell_sizes() {
        assert_eq!(FontSize::Medium.cell_bytes(), 24 * 32 * 3);
        assert_eq!(FontSize::Small.cell_width(), 10);
        assert_eq!(FontSize::Large.cell_height(), 64);
    }

    #[test]
    fn test_all_zero_glyph_is_background() {
        let mut out = [0xAAu8; 24 * 32 * 3];
        let n = render_glyph(FontSize::Medium, b' ', FG, BG, &mut out).unwrap();
        assert_eq!(n, out.len());
        assert!(out.chunks_exact(3).all(|px| px == BG.to_wire()));
    }

    #[test]
    fn test_all_one_bitmap_is_foreground() {
        let bitmap = [0xFFu8; GLYPH_BYTES];
        let mut out = [0u8; 24 * 32 * 3];
        let n = rasterize(&bitmap, 24, FG, BG, &mut out);
        assert_eq!(n, 24 * 32 * 3);
        assert!(out.chunks_exact(3).all(|px| px == [0, 132, 212]));
    }

    #[test]
    fn test_msb_is_leftmost() {
        // '!' row 0: columns 9..15 set
        let mut out = [0u8; 24 * 32 * 3];
        render_glyph(FontSize::Medium, b'!', Rgb666::WHITE, Rgb666::BLACK, &mut out).unwrap();
        let row0: Vec<bool> = out[..24 * 3]
            .chunks_exact(3)
            .map(|px| px == Rgb666::WHITE.to_wire())
            .collect();
        let expected: Vec<bool> = (0..24).map(|c| (9..15).contains(&c)).collect();
        assert_eq!(row0, expected);
    }

    #[test]
    fn test_unsupported_codes() {
        let mut out = [0u8; 24 * 32 * 3];
        assert_eq!(
            render_glyph(FontSize::Medium, 31, FG, BG, &mut out),
            Err(Error::UnsupportedGlyph)
        );
        assert_eq!(
            render_glyph(FontSize::Medium, 127, FG, BG, &mut out),
            Err(Error::UnsupportedGlyph)
        );
        assert_eq!(
            render_glyph(FontSize::Small, b'A', FG, BG, &mut out),
            Err(Error::UnsupportedGlyph)
        );
        assert_eq!(
            render_char(FontSize::Medium, 'é', FG, BG, &mut out),
            Err(Error::UnsupportedGlyph)
        );
    }

    #[test]
    fn test_show_glyph_single_transfer() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        block_on(panel.show_glyph(&mut scratch[..], FontSize::Medium, b'A', 10, 20, FG, BG)).unwrap();

        assert_eq!(bus.dma_payloads().len(), 1);
        assert_eq!(bus.dma_payloads()[0].len(), 24 * 32 * 3);
        assert_eq!(bus.frames_for(0x2A)[0].data, vec![0, 10, 0, 33]);
        assert_eq!(bus.frames_for(0x2B)[0].data, vec![0, 40, 0, 71]);
    }

    #[test]
    fn test_string_cursor_progression() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        block_on(panel.show_string(&mut scratch[..], FontSize::Medium, "ABCD", -4, 10, 0, FG, BG))
            .unwrap();

        let starts: Vec<u16> = bus
            .frames_for(0x2A)
            .iter()
            .map(|f| u16::from_be_bytes([f.data[0], f.data[1]]))
            .collect();
        assert_eq!(starts, vec![10, 30, 50, 70]);
        assert_eq!(bus.count(|op| matches!(op, Op::DmaArm(_))), 4);
        assert!(panel.bulk().is_idle());
    }

    #[test]
    fn test_string_glyphs_match_single_renders() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        block_on(panel.show_string(&mut scratch[..], FontSize::Medium, "Hi!", 2, 0, 0, FG, BG)).unwrap();

        let payloads = bus.dma_payloads();
        for (payload, code) in payloads.iter().zip(*b"Hi!") {
            let mut expected = vec![0u8; FontSize::Medium.cell_bytes()];
            render_glyph(FontSize::Medium, code, FG, BG, &mut expected).unwrap();
            assert_eq!(*payload, expected);
        }
    }

    #[test]
    fn test_string_stops_at_unsupported_char() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        let result = block_on(panel.show_string(
            &mut scratch[..],
            FontSize::Medium,
            "ab\ncd",
            0,
            0,
            0,
            FG,
            BG,
        ));

        assert_eq!(result, Err(Error::UnsupportedGlyph));
        assert_eq!(bus.count(|op| matches!(op, Op::DmaArm(_))), 2);
        assert!(panel.bulk().is_idle());
        assert!(bus.cs_high());
    }

    #[test]
    fn test_empty_string() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        block_on(panel.show_string(&mut scratch[..], FontSize::Medium, "", 0, 0, 0, FG, BG)).unwrap();
        assert!(bus.ops().is_empty());
    }

    fn expected_cell(code: u8) -> Vec<u8> {
        let mut out = vec![0u8; FontSize::Medium.cell_bytes()];
        render_glyph(FontSize::Medium, code, FG, BG, &mut out).unwrap();
        out
    }

    fn column_starts(bus: &MockBus) -> Vec<u16> {
        bus.frames_for(0x2A)
            .iter()
            .map(|f| u16::from_be_bytes([f.data[0], f.data[1]]))
            .collect()
    }

    #[test]
    fn test_render_into_short_buffer() {
        let mut out = [0xAAu8; 1000];
        assert_eq!(
            render_glyph(FontSize::Medium, b'A', FG, BG, &mut out),
            Err(Error::BufferTooSmall)
        );
        assert!(out.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_show_glyph_short_scratch_sends_nothing() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let mut scratch = [0u8; 1000];
        let result =
            block_on(panel.show_glyph(&mut scratch[..], FontSize::Medium, b'A', 0, 0, FG, BG));

        assert_eq!(result, Err(Error::BufferTooSmall));
        assert!(bus.ops().is_empty());
        assert!(bus.dma_payloads().is_empty());
    }

    #[test]
    fn test_show_string_short_scratch_sends_nothing() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        // whole buffer holds one cell, each half does not
        let mut scratch = vec![0u8; FontSize::Medium.cell_bytes() + 16];
        let result = block_on(panel.show_string(
            &mut scratch[..],
            FontSize::Medium,
            "AB",
            0,
            0,
            0,
            FG,
            BG,
        ));

        assert_eq!(result, Err(Error::BufferTooSmall));
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_show_glyph_past_right_edge() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        let result =
            block_on(panel.show_glyph(&mut scratch[..], FontSize::Medium, b'A', 220, 0, FG, BG));

        assert_eq!(result, Err(Error::OutOfBounds));
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_negative_start_sends_nothing() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        let result = block_on(panel.show_string(
            &mut scratch[..],
            FontSize::Medium,
            "AB",
            0,
            -5,
            0,
            FG,
            BG,
        ));

        assert_eq!(result, Err(Error::OutOfBounds));
        assert!(bus.ops().is_empty());
        assert!(panel.bulk().is_idle());
    }

    #[test]
    fn test_string_stops_at_right_edge() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        let result = block_on(panel.show_string(
            &mut scratch[..],
            FontSize::Medium,
            "ABCDEFGHIJKL",
            0,
            0,
            0,
            FG,
            BG,
        ));

        // ten 24-pixel cells fill the 240-pixel row exactly
        assert_eq!(result, Err(Error::OutOfBounds));
        assert_eq!(bus.count(|op| matches!(op, Op::DmaArm(_))), 10);
        assert_eq!(column_starts(&bus).last(), Some(&216));
        assert!(panel.bulk().is_idle());
        assert!(bus.cs_high());
    }

    #[test]
    fn test_negative_spacing_walks_off_left_edge() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        let result = block_on(panel.show_string(
            &mut scratch[..],
            FontSize::Medium,
            "AB",
            -30,
            0,
            0,
            FG,
            BG,
        ));

        assert_eq!(result, Err(Error::OutOfBounds));
        assert_eq!(column_starts(&bus), vec![0]);
        assert_eq!(bus.count(|op| matches!(op, Op::DmaArm(_))), 1);
        assert!(panel.bulk().is_idle());
    }

    #[test]
    fn test_string_renders_next_glyph_while_previous_in_flight() {
        let bus = MockBus::new();
        let mut panel = Panel::new(bus.transport(), bus.engine_manual(), Default::default());
        let scratch = bus.scratch();
        let text = "Hi!";
        let arms = || bus.count(|op| matches!(op, Op::DmaArm(_)));
        let disables = || bus.count(|op| matches!(op, Op::DmaDisable));

        {
            let mut drawing = pin!(panel.show_string(
                &mut scratch[..],
                FontSize::Medium,
                text,
                2,
                10,
                0,
                FG,
                BG,
            ));
            for sent in 1..=text.len() {
                assert!(poll_once(drawing.as_mut()).is_pending());
                // one transfer armed and not yet torn down
                assert_eq!(arms(), sent);
                assert_eq!(disables(), sent - 1);
                assert!(!bus.cs_high());
                assert!(bus.complete());
            }
            assert_eq!(poll_once(drawing.as_mut()), Poll::Ready(Ok(())));
        }

        assert!(panel.bulk().is_idle());
        assert!(bus.cs_high());
        assert_eq!(column_starts(&bus), vec![10, 36, 62]);

        let completed = bus.completed_payloads();
        assert_eq!(completed.len(), text.len());
        for (bytes, code) in completed.iter().zip(text.bytes()) {
            assert_eq!(*bytes, expected_cell(code));
        }
    }

    #[test]
    fn test_bad_char_reported_after_in_flight_glyph() {
        let bus = MockBus::new();
        let mut panel = Panel::new(bus.transport(), bus.engine_manual(), Default::default());
        let scratch = bus.scratch();

        {
            let mut drawing = pin!(panel.show_string(
                &mut scratch[..],
                FontSize::Medium,
                "A\n",
                0,
                0,
                0,
                FG,
                BG,
            ));
            // the newline is rendered while 'A' is still on the wire
            assert!(poll_once(drawing.as_mut()).is_pending());
            assert!(bus.complete());
            assert_eq!(
                poll_once(drawing.as_mut()),
                Poll::Ready(Err(Error::UnsupportedGlyph))
            );
        }

        assert_eq!(bus.completed_payloads(), vec![expected_cell(b'A')]);
        assert!(panel.bulk().is_idle());
        assert!(bus.cs_high());
    }
}
