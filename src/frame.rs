//! Fixed-size pixel buffer for one ring refresh.

use core::ops::Index;

use crate::color::{BLACK, Rgb, add_colors, is_black};

/// One full set of LED colors for a ring of `N` pixels.
///
/// Index `i` is the LED at angular position `i`. A frame is a plain value:
/// it is built on the stack, moved into the transport and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> Frame<N> {
    pub(crate) const NON_EMPTY: () = assert!(N > 0, "ring must have at least one LED");

    /// All-black frame
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self { pixels: [BLACK; N] }
    }

    /// Number of LEDs on the ring
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false: a zero-sized ring is rejected at compile time
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Add `color` onto the pixel at `index`.
    ///
    /// The index wraps around the ring, so callers never produce an
    /// out-of-range write.
    pub fn blend_add(&mut self, index: usize, color: Rgb) {
        let slot = &mut self.pixels[index % N];
        *slot = add_colors(*slot, color);
    }

    /// Number of pixels that are not black
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| !is_black(**p)).count()
    }

    pub const fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub const fn into_array(self) -> [Rgb; N] {
        self.pixels
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for Frame<N> {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index]
    }
}

impl<const N: usize> AsRef<[Rgb]> for Frame<N> {
    fn as_ref(&self) -> &[Rgb] {
        &self.pixels
    }
}
