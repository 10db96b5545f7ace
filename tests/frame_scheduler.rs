mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use ring_clock::{DEFAULT_TICK_RATE, RenderCallback, RenderError, TickRate, TickScheduler};

    use super::common::{FixedTime, RecordingTransport};

    const RING: usize = 60;

    fn scheduler(
        time: FixedTime,
        rate: TickRate,
    ) -> TickScheduler<FixedTime, RecordingTransport<RING>, RING> {
        TickScheduler::new(
            RenderCallback::new(time, RecordingTransport::<RING>::default()),
            rate,
        )
    }

    #[test]
    fn test_paces_at_tick_rate() {
        let mut scheduler = scheduler(FixedTime::at(8, 0, 0), DEFAULT_TICK_RATE);

        let first = scheduler.tick(Instant::from_millis(0));
        assert_eq!(first.outcome, Ok(()));
        assert_eq!(first.next_deadline, Instant::from_micros(333_333));
        assert_eq!(first.sleep_duration, Duration::from_micros(333_333));

        let second = scheduler.tick(first.next_deadline);
        assert_eq!(second.next_deadline, Instant::from_micros(666_666));
        assert_eq!(second.sleep_duration, Duration::from_micros(333_333));

        assert_eq!(scheduler.callback().transport().frames.len(), 2);
    }

    #[test]
    fn test_late_tick_sleeps_less() {
        let rate = TickRate::from_hz(2).unwrap();
        let mut scheduler = scheduler(FixedTime::at(8, 0, 0), rate);

        scheduler.tick(Instant::from_millis(0));
        let late = scheduler.tick(Instant::from_millis(700));
        assert_eq!(late.next_deadline, Instant::from_millis(1000));
        assert_eq!(late.sleep_duration, Duration::from_millis(300));
    }

    #[test]
    fn test_drift_resets_after_stall() {
        let rate = TickRate::from_hz(2).unwrap();
        let mut scheduler = scheduler(FixedTime::at(8, 0, 0), rate);

        scheduler.tick(Instant::from_millis(0));
        // Stalled for several periods: no catch-up burst
        let result = scheduler.tick(Instant::from_millis(5000));
        assert_eq!(result.next_deadline, Instant::from_millis(5500));
        assert_eq!(result.sleep_duration, Duration::from_millis(500));
    }

    #[test]
    fn test_failed_tick_keeps_pace() {
        let mut scheduler = scheduler(FixedTime(None), DEFAULT_TICK_RATE);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.outcome, Err(RenderError::TimeUnavailable));
        assert_eq!(result.sleep_duration, Duration::from_micros(333_333));
        assert_eq!(scheduler.callback().skipped_ticks(), 1);
    }
}
