//! Mapping of (LED, channel) to bit columns.
//!
//! The ring's LED drivers take 24-bit blocks of 8 LEDs, outermost block
//! first, with a zig-zag order inside each block. The order is wiring, not
//! arithmetic, so it lives in a table.

/// (R, G, B) offsets inside a 24-bit block, indexed by `led % 8`.
const BLOCK_OFFSETS: [(usize, usize, usize); 8] = [
    (16, 17, 18),
    (19, 20, 21),
    (22, 23, 8),
    (9, 10, 11),
    (12, 13, 14),
    (15, 0, 1),
    (2, 3, 4),
    (5, 6, 7),
];

const BLOCK_BITS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bit column positions for one row of `width` columns.
#[derive(Debug, Clone, Copy)]
pub struct BitLayout {
    width: usize,
}

impl BitLayout {
    /// `width` must be a multiple of 24.
    pub fn new(width: usize) -> Self {
        debug_assert_eq!(width % BLOCK_BITS, 0);
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn column(&self, led: usize, channel: Channel) -> usize {
        let base = self.width - BLOCK_BITS - (led / 8) * BLOCK_BITS;
        let (r, g, b) = BLOCK_OFFSETS[led % 8];
        base + match channel {
            Channel::Red => r,
            Channel::Green => g,
            Channel::Blue => b,
        }
    }

    /// Columns of `led` in R, G, B order.
    pub fn led_columns(&self, led: usize) -> [usize; 3] {
        Channel::ALL.map(|channel| self.column(led, channel))
    }
}
