//! Error types of the setup and render phases.

use core::fmt;

/// Failure reported by an LED transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// A previous frame is still being shifted out
    Busy,
    /// The underlying bus reported an error
    Bus,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => f.write_str("transport busy"),
            Self::Bus => f.write_str("bus error"),
        }
    }
}

impl core::error::Error for TransportError {}

/// Failure while bringing the clock up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The network never became ready within the poll budget
    NetworkUnavailable { polls: u32 },
    /// The time-sync client refused the configuration
    TimeSyncRejected,
    /// The LED transport could not be initialized
    TransportInitFailed(TransportError),
    /// The hardware timer cannot run at the requested rate
    TimerRejected,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkUnavailable { polls } => {
                write!(f, "network unavailable after {polls} polls")
            }
            Self::TimeSyncRejected => f.write_str("time sync configuration rejected"),
            Self::TransportInitFailed(err) => write!(f, "transport init failed: {err}"),
            Self::TimerRejected => f.write_str("timer rejected tick rate"),
        }
    }
}

impl core::error::Error for SetupError {}

/// Failure during a render tick
///
/// The tick is skipped and the previous frame stays on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The clock has not been synchronized yet
    TimeUnavailable,
    /// The frame could not be pushed
    Transport(TransportError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeUnavailable => f.write_str("time unavailable"),
            Self::Transport(err) => write!(f, "frame push failed: {err}"),
        }
    }
}

impl core::error::Error for RenderError {}

impl From<TransportError> for RenderError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}
