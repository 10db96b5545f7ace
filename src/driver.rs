//! Hardware and service collaborators
//!
//! Implement these traits to support different platforms. The clock core
//! only talks to the outside world through them.

use crate::color::ColorOrder;
use crate::config::TimeSyncConfig;
use crate::error::{RenderError, SetupError, TransportError};
use crate::frame::Frame;
use crate::time::{TickRate, TimeSample};

/// Function bound to the timer interrupt.
///
/// Whatever is registered must not block, must not re-enter itself and
/// must finish well within one tick period.
pub type TickHandler = fn();

/// Source of network-corrected local time
pub trait TimeSource {
    /// Read the current local time
    fn now(&mut self) -> Result<TimeSample, RenderError>;
}

/// Client that keeps the local clock in sync with time servers
pub trait TimeSync {
    /// Apply servers, refresh interval and timezone, then start syncing
    fn configure(&mut self, config: &TimeSyncConfig) -> Result<(), SetupError>;
}

/// LED strip driver
pub trait LedTransport<const N: usize> {
    /// Prepare the bus for a ring of `ring_size` LEDs
    fn initialize(&mut self, ring_size: usize, order: ColorOrder) -> Result<(), TransportError>;

    /// Push a frame to the LEDs
    fn submit(&mut self, frame: Frame<N>) -> Result<(), TransportError>;
}

/// Network link state
pub trait NetworkStatus {
    /// Returns true once the station has an address
    fn is_connected(&mut self) -> bool;
}

/// Periodic hardware timer with an interrupt line
pub trait HardwareTimer {
    /// Set the interrupt frequency
    fn configure(&mut self, rate: TickRate) -> Result<(), SetupError>;

    /// Bind the interrupt to `handler`
    fn attach_interrupt(&mut self, handler: TickHandler);

    /// Start the timer and unmask its interrupt
    fn enable(&mut self);

    /// Stop the timer and mask its interrupt
    fn disable(&mut self);
}

impl<T: TimeSync + ?Sized> TimeSync for &mut T {
    fn configure(&mut self, config: &TimeSyncConfig) -> Result<(), SetupError> {
        T::configure(self, config)
    }
}

impl<T: NetworkStatus + ?Sized> NetworkStatus for &mut T {
    fn is_connected(&mut self) -> bool {
        T::is_connected(self)
    }
}
