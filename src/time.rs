//! Wall-clock samples and tick rates.

use embassy_time::Duration;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Local wall-clock time decomposed into hours, minutes and seconds.
///
/// The fields are private so that every value in circulation is in range:
/// hour 0-23, minute 0-59, second 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSample {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeSample {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a sample, returning `None` if any field is out of range
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Decompose a unix timestamp shifted by a timezone offset.
    ///
    /// Leap seconds are not represented, like in POSIX time.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub const fn from_unix(unix_seconds: u64, offset_minutes: i16) -> Self {
        // Reduce to one day first so any u64 timestamp fits in i64
        let of_utc_day = (unix_seconds % SECONDS_PER_DAY as u64) as i64;
        let local = of_utc_day + offset_minutes as i64 * SECONDS_PER_MINUTE;
        let of_day = local.rem_euclid(SECONDS_PER_DAY);
        Self {
            hour: (of_day / SECONDS_PER_HOUR) as u8,
            minute: ((of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            second: (of_day % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }
}

/// Frequency of the periodic render tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    hz: u32,
}

impl TickRate {
    /// Create a tick rate, returning `None` for zero
    pub const fn from_hz(hz: u32) -> Option<Self> {
        if hz == 0 {
            return None;
        }
        Some(Self { hz })
    }

    pub const fn hz(self) -> u32 {
        self.hz
    }

    /// Time between two consecutive ticks
    pub const fn period(self) -> Duration {
        Duration::from_micros(1_000_000 / self.hz as u64)
    }
}
