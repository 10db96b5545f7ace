//! Channel order of the LED bus
//!
//! WS281x-style chips latch the three channels in a vendor specific order.
//! The transport is told the order once at initialization and reorders every
//! pixel before it hits the wire.

use crate::color::Rgb;

/// Order in which the three channels are shifted out to the LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// Reorder a logical color into wire order.
    ///
    /// The returned value carries the first transmitted byte in `r`,
    /// the second in `g` and the third in `b`.
    ///
    /// Stock ws2812 drivers already shift an `RGB8` out as GRB. With those,
    /// keep [`ColorOrder::Rgb`]; any other setting reorders a second time.
    pub const fn to_wire(self, color: Rgb) -> Rgb {
        let Rgb { r, g, b } = color;
        match self {
            Self::Rgb => Rgb { r, g, b },
            Self::Rbg => Rgb { r, g: b, b: g },
            Self::Grb => Rgb { r: g, g: r, b },
            Self::Gbr => Rgb { r: g, g: b, b: r },
            Self::Brg => Rgb { r: b, g: r, b: g },
            Self::Bgr => Rgb { r: b, g, b: r },
        }
    }
}
