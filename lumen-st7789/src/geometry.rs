//! Panel rectangles

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::BYTES_PER_PIXEL;
use crate::config::{PANEL_HEIGHT, PANEL_WIDTH};

/// Axis-aligned rectangle in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole visible panel
    pub const fn full_panel() -> Self {
        Self::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Wire bytes needed to paint the rectangle
    pub const fn byte_len(&self) -> usize {
        self.area() * BYTES_PER_PIXEL
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Inclusive corner coordinates `(x0, y0, x1, y1)`
    ///
    /// Only meaningful for non-empty rectangles.
    pub const fn corners(&self) -> (u16, u16, u16, u16) {
        (
            self.x,
            self.y,
            self.x + self.width - 1,
            self.y + self.height - 1,
        )
    }

    /// True if the rectangle fits inside a `width`×`height` panel
    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.x as u32 + self.width as u32 <= width as u32
            && self.y as u32 + self.height as u32 <= height as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_inclusive() {
        let r = Rect::new(10, 20, 24, 32);
        assert_eq!(r.corners(), (10, 20, 33, 51));
        assert_eq!(r.area(), 768);
        assert_eq!(r.byte_len(), 2304);
    }

    #[test]
    fn test_fits_panel() {
        assert!(Rect::full_panel().fits(PANEL_WIDTH, PANEL_HEIGHT));
        assert!(!Rect::new(1, 0, 240, 1).fits(PANEL_WIDTH, PANEL_HEIGHT));
        assert!(!Rect::new(0, 279, 1, 2).fits(PANEL_WIDTH, PANEL_HEIGHT));
    }
}
