#![no_std]

pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod frame_scheduler;
pub mod render;
pub mod setup;
pub mod time;
pub mod transport;

pub use clock::SyncedClock;
pub use compositor::{
    HOUR_COLOR, MINUTE_COLOR, MarkerIndices, SECOND_COLOR, compose, marker_indices,
};
pub use config::{
    DEFAULT_TICK_RATE, NetworkWait, RING_SIZE, SetupConfig, TIMEZONE_OFFSET_MINUTES,
    TimeSyncConfig,
};
pub use driver::{HardwareTimer, LedTransport, NetworkStatus, TickHandler, TimeSource, TimeSync};
pub use error::{RenderError, SetupError, TransportError};
pub use frame::Frame;
pub use frame_scheduler::{TickResult, TickScheduler};
pub use render::{RenderCallback, RenderSlot};
pub use setup::{Peripherals, SetupState, SetupTask};
pub use time::{TickRate, TimeSample};
pub use transport::SmartLedsTransport;

pub use color::{ColorOrder, Rgb};
pub use embassy_time::{Duration, Instant};
