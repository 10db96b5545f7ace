//! Desktop preview for the LED ring clock
//!
//! Draws the ring in a window and runs the real render pipeline on a
//! simulated timer, so the face can be checked at any speed.

use std::cell::Cell;
use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use ring_clock::{
    ColorOrder, DEFAULT_TICK_RATE, Frame, Instant, LedTransport, RING_SIZE, RenderCallback,
    RenderError, Rgb, SyncedClock, TIMEZONE_OFFSET_MINUTES, TickScheduler, TimeSample,
    TimeSource, TransportError,
};

/// Radius of each LED dot in pixels
const LED_RADIUS: f32 = 9.0;

/// Default channel gain so the dim markers are visible on screen
const DEFAULT_GAIN: u8 = 6;

/// Local clock the simulated sync client writes to
static CLOCK: SyncedClock = SyncedClock::new(TIMEZONE_OFFSET_MINUTES);

/// Time source reading [`CLOCK`] at a synthetic instant
struct SimulatedTime {
    clock: &'static SyncedClock,
    t_ms: Cell<u64>,
}

impl SimulatedTime {
    fn instant(&self) -> Instant {
        Instant::from_millis(self.t_ms.get())
    }
}

impl TimeSource for SimulatedTime {
    fn now(&mut self) -> Result<TimeSample, RenderError> {
        self.clock
            .sample_at(self.instant())
            .ok_or(RenderError::TimeUnavailable)
    }
}

/// Transport that keeps the last frame for drawing
#[derive(Default)]
struct ScreenTransport {
    frame: Option<Frame<RING_SIZE>>,
}

impl LedTransport<RING_SIZE> for ScreenTransport {
    fn initialize(&mut self, ring_size: usize, _order: ColorOrder) -> Result<(), TransportError> {
        if ring_size != RING_SIZE {
            return Err(TransportError::Bus);
        }
        Ok(())
    }

    fn submit(&mut self, frame: Frame<RING_SIZE>) -> Result<(), TransportError> {
        self.frame = Some(frame);
        Ok(())
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Ring Clock Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ring-clock-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Render pipeline paced like the hardware timer
    scheduler: TickScheduler<SimulatedTime, ScreenTransport, RING_SIZE>,
    /// Deadline of the next simulated timer interrupt
    next_tick: Instant,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether simulated time is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Channel multiplier for display
    gain: u8,
    /// Timezone offset in minutes
    offset_minutes: i16,
}

impl PreviewApp {
    fn new() -> Self {
        let mut transport = ScreenTransport::default();
        let _ = transport.initialize(RING_SIZE, ColorOrder::Rgb);
        let source = SimulatedTime {
            clock: &CLOCK,
            t_ms: Cell::new(0),
        };

        let mut app = Self {
            scheduler: TickScheduler::new(RenderCallback::new(source, transport), DEFAULT_TICK_RATE),
            next_tick: Instant::from_millis(0),
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            gain: DEFAULT_GAIN,
            offset_minutes: TIMEZONE_OFFSET_MINUTES,
        };
        app.sync_from_host();
        app
    }

    fn source(&self) -> &SimulatedTime {
        self.scheduler.callback().source()
    }

    /// Set the clock from the host, as a time server answer would
    fn sync_from_host(&self) {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        CLOCK.set_unix_time_at(
            since_epoch.as_secs(),
            since_epoch.subsec_micros(),
            self.source().instant(),
        );
    }

    /// Advance synthetic time and fire every timer tick that became due
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.playing {
            return;
        }

        let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = if delta_ms_f64.is_finite() {
            delta_ms_f64.max(0.0) as u64
        } else {
            0
        };

        let source = self.source();
        let t_ms = source.t_ms.get().wrapping_add(delta_ms);
        source.t_ms.set(t_ms);

        let now = Instant::from_millis(t_ms);
        if now >= self.next_tick {
            self.next_tick = self.scheduler.tick(now).next_deadline;
        }
    }

    fn led_color(&self, pixel: Rgb) -> egui::Color32 {
        egui::Color32::from_rgb(
            pixel.r.saturating_mul(self.gain),
            pixel.g.saturating_mul(self.gain),
            pixel.b.saturating_mul(self.gain),
        )
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        ctx.request_repaint();

        let frame = self
            .scheduler
            .callback()
            .transport()
            .frame
            .unwrap_or_default();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui.button("⟳ Sync").clicked() {
                    self.sync_from_host();
                }

                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 1.0..=3600.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Gain:");
                ui.add(egui::Slider::new(&mut self.gain, 1..=8));

                ui.add_space(8.0);
                ui.label("UTC offset (min):");
                let old_offset = self.offset_minutes;
                ui.add(egui::DragValue::new(&mut self.offset_minutes).range(-720..=840));
                if self.offset_minutes != old_offset {
                    CLOCK.set_offset_minutes(self.offset_minutes);
                }
            });

            ui.add_space(4.0);

            let callback = self.scheduler.callback();
            let time_label = match CLOCK.sample_at(self.source().instant()) {
                Some(t) => format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()),
                None => "--:--:--".to_owned(),
            };
            ui.label(format!(
                "Time: {time_label}   skipped ticks: {}",
                callback.skipped_ticks()
            ));

            ui.add_space(16.0);

            // === Ring ===
            let side = ui.available_width().min(ui.available_height());
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
            let center = response.rect.center();
            let radius = side / 2.0 - LED_RADIUS * 2.0;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.as_slice().iter().enumerate() {
                // LED 0 at twelve o'clock, clockwise
                let angle = i as f32 / RING_SIZE as f32 * std::f32::consts::TAU
                    - std::f32::consts::FRAC_PI_2;
                let pos = center + egui::vec2(angle.cos(), angle.sin()) * radius;

                painter.circle_filled(pos, LED_RADIUS, self.led_color(*pixel));
                if i % 5 == 0 {
                    painter.circle_stroke(
                        pos,
                        LED_RADIUS + 2.0,
                        egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
                    );
                }
            }
        });
    }
}
