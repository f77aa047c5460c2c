//! Solid fills
//!
//! A fill larger than one bulk transfer is cut into horizontal bands of
//! whole rows. Every band but the last has the same height, so one scratch
//! buffer is painted once and replayed for each of them; the trailing band
//! sends a prefix of the same buffer.

use lumen_hal::{BulkChannel, OutputPin, SpiPeripheral};

use crate::color::{fill_pattern, Rgb666, BYTES_PER_PIXEL};
use crate::command::Command;
use crate::config::MAX_BUFFER_BYTES;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::panel::Panel;

/// Bands of a rectangle, top to bottom
///
/// Works on its own copy of the rectangle.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    rect: Rect,
    rows: u16,
    done: u16,
}

impl ChunkPlan {
    /// Plan bands of at most `max_bytes` each
    ///
    /// Rectangles that fit are sent whole. Rows are never split, so a band
    /// is one row even when that row alone exceeds `max_bytes`.
    pub fn new(rect: Rect, max_bytes: usize) -> Self {
        let rows = if rect.is_empty() {
            0
        } else if rect.byte_len() <= max_bytes {
            rect.height
        } else {
            let row_bytes = rect.width as usize * BYTES_PER_PIXEL;
            (max_bytes / row_bytes).clamp(1, rect.height as usize) as u16
        };
        Self {
            rect,
            rows,
            done: 0,
        }
    }

    /// Height of every band except possibly the last
    pub fn rows_per_chunk(&self) -> u16 {
        self.rows
    }

    /// Total number of bands
    pub fn chunk_count(&self) -> usize {
        if self.rows == 0 {
            return 0;
        }
        self.rect.height.div_ceil(self.rows) as usize
    }

    /// Size of the largest band, and of the scratch buffer it needs
    pub fn max_chunk_bytes(&self) -> usize {
        self.rect.width as usize * self.rows as usize * BYTES_PER_PIXEL
    }
}

impl Iterator for ChunkPlan {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        if self.done >= self.rect.height || self.rows == 0 {
            return None;
        }
        let height = self.rows.min(self.rect.height - self.done);
        let band = Rect::new(self.rect.x, self.rect.y + self.done, self.rect.width, height);
        self.done += height;
        Some(band)
    }
}

impl<SPI, CS, DC, CH> Panel<'_, SPI, CS, DC, CH>
where
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
    CH: BulkChannel,
{
    /// Fill `rect` with `color` through the bulk channel
    ///
    /// `scratch` must hold at least one row of the rectangle, otherwise
    /// [`Error::BufferTooSmall`]; [`MAX_BUFFER_BYTES`] always suffices. An
    /// empty rectangle sends nothing. Both checks run before any traffic.
    pub async fn fill(&mut self, scratch: &mut [u8], rect: Rect, color: Rgb666) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        self.check_bounds(&rect)?;

        let max_bytes = MAX_BUFFER_BYTES.min(scratch.len());
        let plan = ChunkPlan::new(rect, max_bytes);
        let band_bytes = plan.max_chunk_bytes();
        if band_bytes > max_bytes {
            warn!("fill row needs {=usize} bytes, scratch has {=usize}", band_bytes, max_bytes);
            return Err(Error::BufferTooSmall);
        }
        debug!(
            "fill {=u16}x{=u16} in {=usize} bands of {=u16} rows",
            rect.width,
            rect.height,
            plan.chunk_count(),
            plan.rows_per_chunk()
        );

        let pattern = &mut scratch[..band_bytes];
        fill_pattern(pattern, color);
        let pattern = &*pattern;

        for band in plan {
            self.set_window_rect(&band)?;
            self.transport.command(Command::MemoryWrite)?;
            self.bulk
                .issue(&mut self.transport, &pattern[..band.byte_len()])
                .await?;
        }
        Ok(())
    }

    /// Fill `rect` with `color` without the bulk channel
    ///
    /// Streams one pixel per chip-select frame. Needs no scratch memory.
    pub fn fill_polled(&mut self, rect: Rect, color: Rgb666) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        self.set_window_rect(&rect)?;
        self.transport.command(Command::MemoryWrite)?;
        let wire = color.to_wire();
        for _ in 0..rect.area() {
            self.transport.data_block(&wire)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBus, Op};
    use embassy_futures::block_on;
    use proptest::prelude::*;

    #[test]
    fn test_full_panel_plan() {
        let plan = ChunkPlan::new(Rect::full_panel(), MAX_BUFFER_BYTES);
        assert_eq!(plan.rows_per_chunk(), 17);
        assert_eq!(plan.chunk_count(), 17);
        assert_eq!(plan.max_chunk_bytes(), 240 * 17 * 3);

        let bands: Vec<Rect> = plan.collect();
        assert_eq!(bands.len(), 17);
        for (i, band) in bands[..16].iter().enumerate() {
            assert_eq!(*band, Rect::new(0, i as u16 * 17, 240, 17));
        }
        assert_eq!(bands[16], Rect::new(0, 272, 240, 8));
    }

    #[test]
    fn test_small_rect_single_band() {
        let rect = Rect::new(5, 6, 64, 64);
        let bands: Vec<Rect> = ChunkPlan::new(rect, MAX_BUFFER_BYTES).collect();
        assert_eq!(bands, vec![rect]);
    }

    #[test]
    fn test_exact_ceiling_single_band() {
        // 64 * 64 * 3 = 0x3000
        let rect = Rect::new(0, 0, 64, 64);
        assert_eq!(ChunkPlan::new(rect, MAX_BUFFER_BYTES).chunk_count(), 1);
        let rect = Rect::new(0, 0, 64, 65);
        assert_eq!(ChunkPlan::new(rect, MAX_BUFFER_BYTES).chunk_count(), 2);
    }

    #[test]
    fn test_plan_leaves_input_untouched() {
        let rect = Rect::full_panel();
        let plan = ChunkPlan::new(rect, MAX_BUFFER_BYTES);
        assert_eq!(plan.count(), 17);
        assert_eq!(rect, Rect::full_panel());
    }

    #[test]
    fn test_full_panel_fill_issues_seventeen_transfers() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();

        block_on(panel.fill(&mut scratch[..], Rect::full_panel(), Rgb666::BLACK)).unwrap();

        assert_eq!(bus.count(|op| matches!(op, Op::DmaArm(_))), 17);
        let payloads = bus.dma_payloads();
        assert!(payloads[..16].iter().all(|p| p.len() == 240 * 17 * 3));
        assert_eq!(payloads[16].len(), 240 * 8 * 3);
        let total: usize = payloads.iter().map(Vec::len).sum();
        assert_eq!(total, 240 * 280 * 3);
        assert!(payloads.iter().flatten().all(|&b| b == 252));

        // row windows carry the +20 offset
        let rows = bus.frames_for(0x2B);
        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].data, vec![0, 20, 0, 36]);
        assert_eq!(rows[16].data, vec![0x01, 0x24, 0x01, 0x2B]);
        assert!(panel.bulk().is_idle());
    }

    #[test]
    fn test_fill_frames_in_order() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();

        block_on(panel.fill(&mut scratch[..], Rect::new(0, 0, 2, 1), Rgb666::new(63, 30, 10)))
            .unwrap();

        let frames = bus.frames();
        let cmds: Vec<u8> = frames.iter().map(|f| f.cmd).collect();
        assert_eq!(cmds, vec![0x2A, 0x2B, 0x2C]);
        assert_eq!(frames[2].data, vec![0, 132, 212, 0, 132, 212]);
    }

    #[test]
    fn test_empty_fill_sends_nothing() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();
        block_on(panel.fill(&mut scratch[..], Rect::new(10, 10, 0, 5), Rgb666::RED)).unwrap();
        panel.fill_polled(Rect::new(10, 10, 5, 0), Rgb666::RED).unwrap();
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_polled_fill() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        panel.fill_polled(Rect::new(1, 2, 2, 2), Rgb666::WHITE).unwrap();

        let frames = bus.frames();
        assert_eq!(frames[2].cmd, 0x2C);
        assert_eq!(frames[2].data, vec![0; 12]);
        assert_eq!(bus.count(|op| matches!(op, Op::DmaArm(_))), 0);
    }

    #[test]
    fn test_fill_rejects_scratch_shorter_than_a_row() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let mut scratch = [0u8; 600];

        let result = block_on(panel.fill(&mut scratch[..], Rect::new(0, 0, 240, 10), Rgb666::RED));

        assert_eq!(result, Err(Error::BufferTooSmall));
        assert!(bus.ops().is_empty());
        assert!(panel.bulk().is_idle());
    }

    #[test]
    fn test_fill_with_one_row_of_scratch() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let mut scratch = [0u8; 240 * 3];

        block_on(panel.fill(&mut scratch[..], Rect::new(0, 0, 240, 3), Rgb666::RED)).unwrap();

        let payloads = bus.dma_payloads();
        assert_eq!(payloads.len(), 3);
        assert!(payloads.iter().all(|p| p.len() == 240 * 3));
    }

    #[test]
    fn test_off_panel_fill_sends_nothing() {
        let bus = MockBus::new();
        let mut panel = bus.panel();
        let scratch = bus.scratch();

        // first sixteen bands would fit, the last would not
        let tall = Rect::new(0, 0, 240, 290);
        assert_eq!(
            block_on(panel.fill(&mut scratch[..], tall, Rgb666::RED)),
            Err(Error::OutOfBounds)
        );
        assert_eq!(
            panel.fill_polled(Rect::new(230, 0, 20, 1), Rgb666::RED),
            Err(Error::OutOfBounds)
        );
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn test_wide_row_plan_is_single_rows() {
        let plan = ChunkPlan::new(Rect::new(0, 0, 240, 4), 600);
        assert_eq!(plan.rows_per_chunk(), 1);
        assert_eq!(plan.chunk_count(), 4);
        assert_eq!(plan.max_chunk_bytes(), 720);
    }

    fn rect_in_panel() -> impl Strategy<Value = Rect> {
        (0u16..240, 0u16..280).prop_flat_map(|(x, y)| {
            (1u16..=240 - x, 1u16..=280 - y).prop_map(move |(w, h)| Rect::new(x, y, w, h))
        })
    }

    proptest! {
        #[test]
        fn prop_bands_tile_rect(rect in rect_in_panel()) {
            let plan = ChunkPlan::new(rect, MAX_BUFFER_BYTES);
            let limit = plan.max_chunk_bytes();
            prop_assert!(limit <= MAX_BUFFER_BYTES);

            let mut next_y = rect.y;
            let mut total = 0usize;
            for band in plan {
                prop_assert_eq!(band.x, rect.x);
                prop_assert_eq!(band.width, rect.width);
                prop_assert_eq!(band.y, next_y);
                prop_assert!(band.height > 0);
                prop_assert!(band.byte_len() <= limit);
                next_y += band.height;
                total += band.byte_len();
            }
            prop_assert_eq!(next_y, rect.y + rect.height);
            prop_assert_eq!(total, rect.byte_len());
        }
    }
}
