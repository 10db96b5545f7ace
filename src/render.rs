use core::cell::RefCell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::compositor::compose;
use crate::driver::{LedTransport, TimeSource};
use crate::error::RenderError;

/// Render pipeline run on every timer tick
///
/// Samples the time source, paints the clock face and pushes it to the
/// transport. Frames live on the stack of a single tick.
pub struct RenderCallback<S, T, const N: usize> {
    source: S,
    transport: T,
    skipped_ticks: u32,
}

impl<S: TimeSource, T: LedTransport<N>, const N: usize> RenderCallback<S, T, N> {
    pub const fn new(source: S, transport: T) -> Self {
        Self {
            source,
            transport,
            skipped_ticks: 0,
        }
    }

    /// Run one tick
    ///
    /// On error the tick is skipped, leaving the previous frame on the ring.
    pub fn tick(&mut self) -> Result<(), RenderError> {
        let result = self.render();
        if let Err(_err) = result {
            self.skipped_ticks = self.skipped_ticks.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[render] tick skipped: {}", _err);
        }
        result
    }

    fn render(&mut self) -> Result<(), RenderError> {
        let sample = self.source.now()?;
        #[cfg(feature = "esp32-log")]
        println!(
            "TIME: {} {} {}",
            sample.hour(),
            sample.minute(),
            sample.second()
        );

        let frame = compose::<N>(sample);
        self.transport.submit(frame)?;
        Ok(())
    }

    /// Number of ticks that failed since creation
    pub const fn skipped_ticks(&self) -> u32 {
        self.skipped_ticks
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}

/// Interrupt-safe home of the render callback.
///
/// Place it in a `static`. Setup installs the callback before the timer
/// interrupt is enabled; the interrupt handler calls [`RenderSlot::fire`].
///
/// ```ignore
/// static RENDER: RenderSlot<&SyncedClock, Ws2812Bus, RING_SIZE> = RenderSlot::new();
///
/// fn on_tick() {
///     let _ = RENDER.fire();
/// }
/// ```
pub struct RenderSlot<S, T, const N: usize> {
    inner: Mutex<RefCell<Option<RenderCallback<S, T, N>>>>,
}

impl<S, T, const N: usize> RenderSlot<S, T, N> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<S: TimeSource, T: LedTransport<N>, const N: usize> RenderSlot<S, T, N> {
    /// Store the callback, replacing any previous one
    pub fn install(&self, callback: RenderCallback<S, T, N>) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).replace(Some(callback));
        });
    }

    /// Returns true once a callback has been installed
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_some())
    }

    /// Run one tick of the installed callback.
    ///
    /// Returns `None` when nothing is installed yet.
    pub fn fire(&self) -> Option<Result<(), RenderError>> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.as_mut().map(RenderCallback::tick)
        })
    }

    /// Run `f` with shared access to the installed callback
    pub fn inspect<R>(&self, f: impl FnOnce(&RenderCallback<S, T, N>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().as_ref().map(f))
    }
}

impl<S, T, const N: usize> Default for RenderSlot<S, T, N> {
    fn default() -> Self {
        Self::new()
    }
}
