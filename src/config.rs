//! Build-time settings of the clock.
//!
//! Everything here is a design constant of the device. [`SetupConfig`]
//! bundles them so the setup task can be driven with other values in tests
//! or on boards with a different ring.

use embassy_time::Duration;
use heapless::Vec;

use crate::color::ColorOrder;
use crate::time::TickRate;

/// Number of LEDs on the ring, one per minute of the dial
pub const RING_SIZE: usize = 60;

/// Render ticks per second.
///
/// Faster than 1 Hz so the seconds marker moves promptly despite the
/// phase between the timer and the wall clock.
const TICK_RATE_HZ: u32 = 3;

pub const DEFAULT_TICK_RATE: TickRate = match TickRate::from_hz(TICK_RATE_HZ) {
    Some(rate) => rate,
    None => panic!("tick rate must be non-zero"),
};

/// How often the time-sync client refreshes against the servers
pub const NTP_REFRESH: Duration = Duration::from_secs(16 * 60);

/// Offset of local time from UTC
pub const TIMEZONE_OFFSET_MINUTES: i16 = 2 * 60;

/// Maximum number of time servers the sync client keeps
pub const MAX_TIME_SERVERS: usize = 4;

pub const NTP_SERVERS: [&str; MAX_TIME_SERVERS] = [
    "0.pool.ntp.org",
    "1.pool.ntp.org",
    "2.pool.ntp.org",
    "3.pool.ntp.org",
];

/// Initial delay between two network readiness polls
pub const NETWORK_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound for the network poll backoff
pub const NETWORK_POLL_MAX_INTERVAL: Duration = Duration::from_secs(2);

/// Polls before giving up on the network
pub const NETWORK_MAX_POLLS: u32 = 64;

/// Settings handed to the time-sync client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSyncConfig {
    /// Interval between two synchronizations
    pub refresh_interval: Duration,
    /// Local time offset from UTC, in minutes
    pub timezone_offset_minutes: i16,
    /// Host names of the time servers, in order of preference.
    ///
    /// Holds at most [`MAX_TIME_SERVERS`]; a push past that is refused.
    pub servers: Vec<&'static str, MAX_TIME_SERVERS>,
}

impl Default for TimeSyncConfig {
    fn default() -> Self {
        let mut servers = Vec::new();
        for host in NTP_SERVERS {
            // Capacity matches the array length
            let _ = servers.push(host);
        }
        Self {
            refresh_interval: NTP_REFRESH,
            timezone_offset_minutes: TIMEZONE_OFFSET_MINUTES,
            servers,
        }
    }
}

/// Policy for the network readiness wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkWait {
    /// Delay after the first failed poll
    pub initial_interval: Duration,
    /// Cap for the doubled delay
    pub max_interval: Duration,
    /// Polls before giving up, `None` waits forever
    pub max_polls: Option<u32>,
}

impl NetworkWait {
    /// Poll at a fixed interval forever
    pub const fn unbounded(interval: Duration) -> Self {
        Self {
            initial_interval: interval,
            max_interval: interval,
            max_polls: None,
        }
    }

    /// Delay to sleep after `failed_polls` unsuccessful polls (1-based)
    pub fn interval_after(&self, failed_polls: u32) -> Duration {
        let shift = failed_polls.saturating_sub(1).min(16);
        let ticks = self
            .initial_interval
            .as_ticks()
            .saturating_mul(1u64 << shift);
        Duration::from_ticks(ticks.min(self.max_interval.as_ticks()))
    }

    /// Returns true when `polls` polls exhaust the budget
    pub fn is_exhausted(&self, polls: u32) -> bool {
        self.max_polls.is_some_and(|max| polls >= max)
    }
}

impl Default for NetworkWait {
    fn default() -> Self {
        Self {
            initial_interval: NETWORK_POLL_INTERVAL,
            max_interval: NETWORK_POLL_MAX_INTERVAL,
            max_polls: Some(NETWORK_MAX_POLLS),
        }
    }
}

/// Everything the setup task needs to bring the clock up
#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub network: NetworkWait,
    pub time_sync: TimeSyncConfig,
    pub color_order: ColorOrder,
    pub tick_rate: TickRate,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            network: NetworkWait::default(),
            time_sync: TimeSyncConfig::default(),
            color_order: ColorOrder::Rgb,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}
