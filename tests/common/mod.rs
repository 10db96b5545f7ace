//! Shared test doubles for the clock collaborators

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use ring_clock::{
    ColorOrder, Frame, HardwareTimer, LedTransport, NetworkStatus, RenderError, SetupError,
    TickHandler, TickRate, TimeSample, TimeSource, TimeSync, TimeSyncConfig, TransportError,
};

// ============================================================================
// Time
// ============================================================================

/// Time source returning a preset sample, or failing when unset
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub Option<TimeSample>);

impl FixedTime {
    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self(TimeSample::new(hour, minute, second))
    }
}

impl TimeSource for FixedTime {
    fn now(&mut self) -> Result<TimeSample, RenderError> {
        self.0.ok_or(RenderError::TimeUnavailable)
    }
}

/// Time-sync client that records what it was given
#[derive(Debug, Default)]
pub struct RecordingSync {
    pub configured: Option<TimeSyncConfig>,
    pub reject: bool,
}

impl TimeSync for RecordingSync {
    fn configure(&mut self, config: &TimeSyncConfig) -> Result<(), SetupError> {
        if self.reject {
            return Err(SetupError::TimeSyncRejected);
        }
        self.configured = Some(config.clone());
        Ok(())
    }
}

// ============================================================================
// LEDs
// ============================================================================

/// Transport that keeps every submitted frame
#[derive(Debug, Default)]
pub struct RecordingTransport<const N: usize> {
    pub initialized: Option<(usize, ColorOrder)>,
    pub frames: Vec<Frame<N>>,
    pub fail_init: bool,
    pub fail_submit: bool,
}

impl<const N: usize> RecordingTransport<N> {
    pub fn last_frame(&self) -> Option<&Frame<N>> {
        self.frames.last()
    }
}

impl<const N: usize> LedTransport<N> for RecordingTransport<N> {
    fn initialize(&mut self, ring_size: usize, order: ColorOrder) -> Result<(), TransportError> {
        if self.fail_init {
            return Err(TransportError::Bus);
        }
        self.initialized = Some((ring_size, order));
        Ok(())
    }

    fn submit(&mut self, frame: Frame<N>) -> Result<(), TransportError> {
        if self.fail_submit {
            return Err(TransportError::Busy);
        }
        self.frames.push(frame);
        Ok(())
    }
}

// ============================================================================
// Network, timer, delay
// ============================================================================

/// Network that answers polls from a script, then stays down
#[derive(Debug, Default)]
pub struct ScriptedNetwork {
    pub answers: VecDeque<bool>,
    pub polls: u32,
}

impl ScriptedNetwork {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            polls: 0,
        }
    }
}

impl NetworkStatus for ScriptedNetwork {
    fn is_connected(&mut self) -> bool {
        self.polls += 1;
        self.answers.pop_front().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCall {
    Configure(u32),
    Attach,
    Enable,
    Disable,
}

/// Timer that logs calls and can fire its bound handler on demand
#[derive(Debug, Default)]
pub struct MockTimer {
    pub calls: Vec<TimerCall>,
    pub handler: Option<TickHandler>,
    pub enabled: bool,
    pub reject: bool,
}

impl MockTimer {
    /// Simulate the interrupt; only delivered while enabled
    pub fn fire(&self) -> bool {
        match (self.enabled, self.handler) {
            (true, Some(handler)) => {
                handler();
                true
            }
            _ => false,
        }
    }
}

impl HardwareTimer for MockTimer {
    fn configure(&mut self, rate: TickRate) -> Result<(), SetupError> {
        self.calls.push(TimerCall::Configure(rate.hz()));
        if self.reject {
            return Err(SetupError::TimerRejected);
        }
        Ok(())
    }

    fn attach_interrupt(&mut self, handler: TickHandler) {
        self.calls.push(TimerCall::Attach);
        self.handler = Some(handler);
    }

    fn enable(&mut self) {
        self.calls.push(TimerCall::Enable);
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.calls.push(TimerCall::Disable);
        self.enabled = false;
    }
}

/// Delay that returns immediately and remembers what was asked
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub millis: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.millis.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.millis.push(ms);
    }
}

pub fn noop_handler() {}
