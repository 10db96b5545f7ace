//! [`LedTransport`] over any `smart-leds` writer
//!
//! Works with the ws2812 drivers built on SPI, RMT, PIO or I2S, which all
//! implement [`SmartLedsWrite`].

use smart_leds::SmartLedsWrite;

use crate::color::{ColorOrder, Rgb};
use crate::driver::LedTransport;
use crate::error::TransportError;
use crate::frame::Frame;

/// Adapter from [`SmartLedsWrite`] to [`LedTransport`]
///
/// The adapter permutes every pixel according to the configured
/// [`ColorOrder`] and hands the result to the writer as is. Stock ws2812
/// drivers (`ws2812-spi`, `ws2812-esp32-rmt-driver` and the like) already
/// emit GRB on their own, so pair them with [`ColorOrder::Rgb`]. Pick
/// another order only for a writer that shifts fields out verbatim.
pub struct SmartLedsTransport<W> {
    writer: W,
    order: ColorOrder,
}

impl<W> SmartLedsTransport<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            order: ColorOrder::Rgb,
        }
    }

    pub const fn order(&self) -> ColorOrder {
        self.order
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> LedTransport<N> for SmartLedsTransport<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn initialize(&mut self, ring_size: usize, order: ColorOrder) -> Result<(), TransportError> {
        if ring_size != N {
            return Err(TransportError::Bus);
        }
        self.order = order;
        Ok(())
    }

    fn submit(&mut self, frame: Frame<N>) -> Result<(), TransportError> {
        let order = self.order;
        self.writer
            .write(frame.into_array().into_iter().map(|c| order.to_wire(c)))
            .map_err(|_| TransportError::Bus)
    }
}
