//! Local wall clock corrected by network time sync
//!
//! The sync client writes the current unix time whenever it hears from a
//! server; the render tick reads it. Both sides go through a critical
//! section, so a tick never sees half of an update.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::driver::TimeSource;
use crate::error::RenderError;
use crate::time::TimeSample;

const MICROS_PER_SECOND: u64 = 1_000_000;

#[derive(Debug, Clone, Copy)]
struct SyncPoint {
    unix_micros: u64,
    at: Instant,
}

impl SyncPoint {
    /// Elapsed time is added before flooring to whole seconds; an instant
    /// before the sync reads as the sync time itself.
    fn unix_at(self, now: Instant) -> u64 {
        let elapsed = now
            .checked_duration_since(self.at)
            .map_or(0, |d| d.as_micros());
        self.unix_micros.saturating_add(elapsed) / MICROS_PER_SECOND
    }
}

#[derive(Debug, Clone, Copy)]
struct ClockState {
    sync: Option<SyncPoint>,
    offset_minutes: i16,
}

/// Wall clock anchored to the last network sync.
///
/// Between syncs the time advances with the monotonic [`Instant`] clock.
pub struct SyncedClock {
    state: Mutex<Cell<ClockState>>,
}

impl SyncedClock {
    /// Create an unsynchronized clock with the given timezone offset
    pub const fn new(offset_minutes: i16) -> Self {
        Self {
            state: Mutex::new(Cell::new(ClockState {
                sync: None,
                offset_minutes,
            })),
        }
    }

    /// Record a fresh unix time at the current instant
    pub fn set_unix_time(&self, unix_seconds: u64, micros: u32) {
        self.set_unix_time_at(unix_seconds, micros, Instant::now());
    }

    /// Record that `unix_seconds` plus `micros` was the time at `at`.
    ///
    /// `micros` is the fraction of the second reported by the server and is
    /// clamped below one second.
    pub fn set_unix_time_at(&self, unix_seconds: u64, micros: u32, at: Instant) {
        let unix_micros = unix_seconds
            .saturating_mul(MICROS_PER_SECOND)
            .saturating_add(u64::from(micros).min(MICROS_PER_SECOND - 1));
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.sync = Some(SyncPoint { unix_micros, at });
            cell.set(state);
        });
    }

    /// Change the timezone offset
    pub fn set_offset_minutes(&self, offset_minutes: i16) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.offset_minutes = offset_minutes;
            cell.set(state);
        });
    }

    /// Returns true once the clock has been set at least once
    pub fn is_synced(&self) -> bool {
        self.read().sync.is_some()
    }

    /// Unix time at `now`, or `None` before the first sync
    pub fn unix_time_at(&self, now: Instant) -> Option<u64> {
        self.read().sync.map(|sync| sync.unix_at(now))
    }

    /// Local time at `now`, or `None` before the first sync
    pub fn sample_at(&self, now: Instant) -> Option<TimeSample> {
        let state = self.read();
        let unix_seconds = state.sync?.unix_at(now);
        Some(TimeSample::from_unix(unix_seconds, state.offset_minutes))
    }

    fn read(&self) -> ClockState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }
}

impl TimeSource for &SyncedClock {
    fn now(&mut self) -> Result<TimeSample, RenderError> {
        self.sample_at(Instant::now())
            .ok_or(RenderError::TimeUnavailable)
    }
}
