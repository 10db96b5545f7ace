//! Clock face compositor
//!
//! Maps a [`TimeSample`] to marker positions on the ring and paints them.
//! Markers that land on the same LED are added together, so an overlap is
//! visibly brighter than a single hand.

use crate::color::Rgb;
use crate::frame::Frame;
use crate::time::TimeSample;

/// Hour marker, dim red
pub const HOUR_COLOR: Rgb = Rgb { r: 32, g: 0, b: 0 };

/// Minute marker, dim green
pub const MINUTE_COLOR: Rgb = Rgb { r: 0, g: 4, b: 0 };

/// Second marker, dim blue
pub const SECOND_COLOR: Rgb = Rgb { r: 0, g: 0, b: 16 };

/// Minutes per step of the hour marker between two hour positions
const HOUR_NUDGE_MINUTES: usize = 15;

/// LED positions of the three hands for one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIndices {
    pub hour: usize,
    pub minute: usize,
    pub second: usize,
}

impl MarkerIndices {
    /// Pairs of position and color, in paint order
    pub const fn markers(self) -> [(usize, Rgb); 3] {
        [
            (self.hour, HOUR_COLOR),
            (self.minute, MINUTE_COLOR),
            (self.second, SECOND_COLOR),
        ]
    }
}

/// Compute the hand positions on a ring of `N` LEDs.
///
/// The hour hand sits on one of the 12 major positions and advances one LED
/// per quarter hour toward the next one. A ring without LEDs does not
/// compile:
///
/// ```compile_fail
/// let _ = ring_clock::marker_indices::<0>(ring_clock::TimeSample::MIDNIGHT);
/// ```
pub const fn marker_indices<const N: usize>(sample: TimeSample) -> MarkerIndices {
    let () = Frame::<N>::NON_EMPTY;
    let hour = sample.hour() as usize;
    let minute = sample.minute() as usize;
    let second = sample.second() as usize;

    let major = (hour * (N / 12)) % N;
    MarkerIndices {
        hour: (major + minute / HOUR_NUDGE_MINUTES) % N,
        minute: minute % N,
        second: second % N,
    }
}

/// Render the clock face for `sample`
pub fn compose<const N: usize>(sample: TimeSample) -> Frame<N> {
    let mut frame = Frame::new();
    for (index, color) in marker_indices::<N>(sample).markers() {
        frame.blend_add(index, color);
    }
    frame
}
