//! One-shot boot task
//!
//! Brings the clock up in a fixed order and then gets out of the way:
//!
//! `WaitingForNetwork -> ConfiguringTimeSync -> InitializingTransport -> ArmingTimer -> Done`
//!
//! Once the timer is armed the render callback is the only running logic.

use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::SetupConfig;
use crate::driver::{HardwareTimer, LedTransport, NetworkStatus, TickHandler, TimeSource, TimeSync};
use crate::error::SetupError;
use crate::render::{RenderCallback, RenderSlot};

/// Progress of the setup task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    WaitingForNetwork,
    ConfiguringTimeSync,
    InitializingTransport,
    ArmingTimer,
    Done,
}

impl SetupState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaitingForNetwork => "waiting_for_network",
            Self::ConfiguringTimeSync => "configuring_time_sync",
            Self::InitializingTransport => "initializing_transport",
            Self::ArmingTimer => "arming_timer",
            Self::Done => "done",
        }
    }
}

/// Collaborators the setup task drives
pub struct Peripherals<Net, Sntp, Src, Tr, Tim> {
    pub network: Net,
    pub time_sync: Sntp,
    pub time_source: Src,
    pub transport: Tr,
    pub timer: Tim,
}

/// Boot-time state machine that arms the render timer
pub struct SetupTask<'a, Net, Sntp, Src, Tr, Tim, D, const N: usize> {
    config: SetupConfig,
    state: SetupState,
    polls: u32,

    network: Net,
    time_sync: Sntp,
    // Moved into the render slot when the timer is armed
    pipeline: Option<(Src, Tr)>,
    timer: Tim,
    delay: D,

    slot: &'a RenderSlot<Src, Tr, N>,
    handler: TickHandler,
}

impl<'a, Net, Sntp, Src, Tr, Tim, D, const N: usize> SetupTask<'a, Net, Sntp, Src, Tr, Tim, D, N>
where
    Net: NetworkStatus,
    Sntp: TimeSync,
    Src: TimeSource,
    Tr: LedTransport<N>,
    Tim: HardwareTimer,
    D: DelayNs,
{
    /// Create the task
    ///
    /// `handler` is bound to the timer interrupt and must call
    /// [`RenderSlot::fire`] on `slot`.
    pub fn new(
        config: SetupConfig,
        peripherals: Peripherals<Net, Sntp, Src, Tr, Tim>,
        delay: D,
        slot: &'a RenderSlot<Src, Tr, N>,
        handler: TickHandler,
    ) -> Self {
        Self {
            config,
            state: SetupState::WaitingForNetwork,
            polls: 0,
            network: peripherals.network,
            time_sync: peripherals.time_sync,
            pipeline: Some((peripherals.time_source, peripherals.transport)),
            timer: peripherals.timer,
            delay,
            slot,
            handler,
        }
    }

    pub const fn state(&self) -> SetupState {
        self.state
    }

    /// Network polls performed so far
    pub const fn polls(&self) -> u32 {
        self.polls
    }

    /// Perform the work of the current state and advance.
    ///
    /// While waiting for the network every call is one poll. Calling this
    /// after `Done` does nothing.
    pub fn step(&mut self) -> Result<SetupState, SetupError> {
        let next = match self.state {
            SetupState::WaitingForNetwork => self.poll_network()?,
            SetupState::ConfiguringTimeSync => {
                self.time_sync.configure(&self.config.time_sync)?;
                SetupState::InitializingTransport
            }
            SetupState::InitializingTransport => {
                self.init_transport()?;
                SetupState::ArmingTimer
            }
            SetupState::ArmingTimer => {
                self.arm_timer()?;
                SetupState::Done
            }
            SetupState::Done => SetupState::Done,
        };

        #[cfg(feature = "esp32-log")]
        if next != self.state {
            println!("[setup] {} -> {}", self.state.as_str(), next.as_str());
        }
        self.state = next;
        Ok(next)
    }

    /// Drive the machine to `Done` and return the armed timer.
    ///
    /// Keep the timer alive for as long as the clock should run.
    pub fn run(mut self) -> Result<Tim, SetupError> {
        while self.step()? != SetupState::Done {}

        #[cfg(feature = "esp32-log")]
        println!("[setup] done");
        Ok(self.timer)
    }

    fn poll_network(&mut self) -> Result<SetupState, SetupError> {
        self.polls = self.polls.saturating_add(1);
        if self.network.is_connected() {
            return Ok(SetupState::ConfiguringTimeSync);
        }

        let wait = self.config.network;
        if wait.is_exhausted(self.polls) {
            return Err(SetupError::NetworkUnavailable { polls: self.polls });
        }

        let interval = wait.interval_after(self.polls);
        #[cfg(feature = "esp32-log")]
        println!(
            "[setup] network not ready (poll {}), retry in {} ms",
            self.polls,
            interval.as_millis()
        );
        #[allow(clippy::cast_possible_truncation)]
        self.delay.delay_ms(interval.as_millis() as u32);
        Ok(SetupState::WaitingForNetwork)
    }

    fn init_transport(&mut self) -> Result<(), SetupError> {
        let Some((_, transport)) = self.pipeline.as_mut() else {
            return Ok(());
        };
        transport
            .initialize(N, self.config.color_order)
            .map_err(SetupError::TransportInitFailed)
    }

    fn arm_timer(&mut self) -> Result<(), SetupError> {
        self.timer.disable();
        self.timer.configure(self.config.tick_rate)?;

        if let Some((source, transport)) = self.pipeline.take() {
            self.slot.install(RenderCallback::new(source, transport));
        }

        // Attach before enabling so the first interrupt finds its handler
        self.timer.attach_interrupt(self.handler);
        self.timer.enable();
        Ok(())
    }
}
