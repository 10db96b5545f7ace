//! Software tick pacing.
//!
//! Drives the render callback from any monotonic clock, for boards without a
//! spare hardware timer and for host-side simulation. The caller is
//! responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::driver::{LedTransport, TimeSource};
use crate::error::RenderError;
use crate::render::RenderCallback;
use crate::time::TickRate;

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the render callback reported.
    pub outcome: Result<(), RenderError>,
}

/// Portable tick scheduler that paces a [`RenderCallback`].
///
/// - Tracks tick timing with drift correction
/// - Runs the render callback
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(callback, DEFAULT_TICK_RATE);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct TickScheduler<S, T, const N: usize> {
    callback: RenderCallback<S, T, N>,
    next_tick: Instant,
    period: Duration,
}

impl<S: TimeSource, T: LedTransport<N>, const N: usize> TickScheduler<S, T, N> {
    pub const fn new(callback: RenderCallback<S, T, N>, rate: TickRate) -> Self {
        Self {
            callback,
            next_tick: Instant::from_ticks(0),
            period: rate.period(),
        }
    }

    /// Run one tick and return timing information.
    ///
    /// If the caller fell behind by more than two periods the backlog is
    /// dropped instead of replayed as a burst.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.period * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let outcome = self.callback.tick();

        self.next_tick += self.period;

        let sleep_duration = self
            .next_tick
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            outcome,
        }
    }

    pub fn callback(&self) -> &RenderCallback<S, T, N> {
        &self.callback
    }
}
