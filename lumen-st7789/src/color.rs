//! 18-bit (6/6/6) colour
//!
//! The panel is wired with inverted intensity: channel value 63 is sent as
//! 0x00 and 0 as 0xFC. Each wire byte carries the 6-bit value in its upper
//! bits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest channel value
pub const CHANNEL_MAX: u8 = 63;

/// Bytes per pixel on the wire
pub const BYTES_PER_PIXEL: usize = 3;

/// A 6-bit-per-channel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb666 {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb666 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(63, 63, 63);
    pub const RED: Self = Self::new(63, 0, 0);
    pub const GREEN: Self = Self::new(0, 63, 0);
    pub const BLUE: Self = Self::new(0, 0, 63);
    pub const YELLOW: Self = Self::new(63, 63, 0);
    pub const CYAN: Self = Self::new(0, 63, 63);
    pub const MAGENTA: Self = Self::new(63, 0, 63);

    /// Create a colour, saturating each channel at 63
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: saturate(red),
            green: saturate(green),
            blue: saturate(blue),
        }
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Wire bytes in R, G, B order
    pub const fn to_wire(&self) -> [u8; BYTES_PER_PIXEL] {
        [
            map_channel(self.red),
            map_channel(self.green),
            map_channel(self.blue),
        ]
    }
}

const fn saturate(c: u8) -> u8 {
    if c > CHANNEL_MAX {
        CHANNEL_MAX
    } else {
        c
    }
}

/// Map one channel to its wire byte
#[inline]
pub const fn map_channel(c: u8) -> u8 {
    (CHANNEL_MAX - saturate(c)) << 2
}

/// Fill `buf` with repeated copies of the colour's wire triplet
///
/// A trailing partial triplet is left untouched.
pub fn fill_pattern(buf: &mut [u8], color: Rgb666) {
    let wire = color.to_wire();
    for px in buf.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&wire);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(map_channel(0), 252);
        assert_eq!(map_channel(63), 0);
        assert_eq!(Rgb666::BLACK.to_wire(), [252, 252, 252]);
        assert_eq!(Rgb666::WHITE.to_wire(), [0, 0, 0]);
    }

    #[test]
    fn test_reference_colour() {
        assert_eq!(Rgb666::new(63, 30, 10).to_wire(), [0, 132, 212]);
    }

    #[test]
    fn test_out_of_range_saturates() {
        let c = Rgb666::new(200, 64, 63);
        assert_eq!((c.red(), c.green(), c.blue()), (63, 63, 63));
        assert_eq!(c.to_wire(), [0, 0, 0]);
    }

    #[test]
    fn test_fill_pattern_skips_partial_triplet() {
        let mut buf = [0xAAu8; 8];
        fill_pattern(&mut buf, Rgb666::new(63, 30, 10));
        assert_eq!(buf, [0, 132, 212, 0, 132, 212, 0xAA, 0xAA]);
    }

    proptest! {
        #[test]
        fn prop_channel_formula(c in 0u8..=63) {
            prop_assert_eq!(map_channel(c), (63 - c) << 2);
            // upper six bits only
            prop_assert_eq!(map_channel(c) & 0b11, 0);
        }

        #[test]
        fn prop_strictly_decreasing(c in 0u8..63) {
            prop_assert!(map_channel(c) > map_channel(c + 1));
        }
    }
}
