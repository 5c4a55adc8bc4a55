//! Countdown timer - pausable one-tick-per-second countdown
//!
//! The timer does not own a clock. Callers feed elapsed wall time through
//! [`CountdownTimer::advance`], the same fixed-timestep style the game loop
//! uses everywhere else, and read the resulting [`TimerEvent`]s from a queue.
//!
//! Lifecycle: `Idle -> Running -> {Paused <-> Running} -> Finished`.
//! [`CountdownTimer::stop`] returns to `Idle` from any state.

use std::collections::VecDeque;

use crate::types::{TimerEvent, TIMER_TICK_MS};

/// Timer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Cancellation token handed out by [`CountdownTimer::start`].
///
/// It is consumed by [`CountdownTimer::stop`], so a run can only be cancelled
/// once through its own token.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "the token is required to stop the timer"]
pub struct TimerToken {
    run: u64,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    duration_secs: u32,
    remaining_secs: u32,
    phase: TimerPhase,
    /// Time accumulated toward the next tick.
    cadence_ms: u32,
    /// Incremented on every start; tokens from older runs are stale.
    run: u64,
    events: VecDeque<TimerEvent>,
}

impl CountdownTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            phase: TimerPhase::Idle,
            cadence_ms: 0,
            run: 0,
            events: VecDeque::new(),
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.phase == TimerPhase::Finished
    }

    /// Begin counting down. Only valid from `Idle`.
    ///
    /// A zero-length timer finishes immediately.
    pub fn start(&mut self) -> Option<TimerToken> {
        if self.phase != TimerPhase::Idle {
            return None;
        }
        self.run += 1;
        self.cadence_ms = 0;
        self.remaining_secs = self.duration_secs;
        self.phase = TimerPhase::Running;

        if self.remaining_secs == 0 {
            self.finish();
        }

        Some(TimerToken { run: self.run })
    }

    /// Suspend decrementing. The tick cadence keeps running.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == TimerPhase::Paused {
            self.phase = TimerPhase::Running;
        }
    }

    /// Cancel the run and reset the remaining time to the full duration.
    ///
    /// Queues [`TimerEvent::Reset`] with the display value. A token from an
    /// earlier run has nothing left to cancel, so it is ignored.
    pub fn stop(&mut self, token: TimerToken) {
        if token.run != self.run {
            return;
        }
        self.phase = TimerPhase::Idle;
        self.cadence_ms = 0;
        self.remaining_secs = self.duration_secs;
        self.events.push_back(TimerEvent::Reset(self.duration_secs));
    }

    /// Feed elapsed time. Fires one tick per full [`TIMER_TICK_MS`].
    pub fn advance(&mut self, elapsed_ms: u32) {
        if !matches!(self.phase, TimerPhase::Running | TimerPhase::Paused) {
            return;
        }

        self.cadence_ms = self.cadence_ms.saturating_add(elapsed_ms);
        while self.cadence_ms >= TIMER_TICK_MS {
            self.cadence_ms -= TIMER_TICK_MS;
            if self.phase == TimerPhase::Paused {
                continue;
            }

            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            self.events.push_back(TimerEvent::Tick(self.remaining_secs));
            if self.remaining_secs == 0 {
                self.finish();
                break;
            }
        }
    }

    fn finish(&mut self) {
        self.phase = TimerPhase::Finished;
        self.cadence_ms = 0;
        self.events.push_back(TimerEvent::Finished);
    }

    /// Pop the oldest pending event.
    pub fn poll_event(&mut self) -> Option<TimerEvent> {
        self.events.pop_front()
    }

    /// Take every pending event in order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TimerEvent> + '_ {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(timer: &mut CountdownTimer) -> Vec<TimerEvent> {
        timer.drain_events().collect()
    }

    #[test]
    fn test_new_timer_is_idle() {
        let mut timer = CountdownTimer::new(5);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_secs(), 5);

        // Idle timers ignore time.
        timer.advance(10_000);
        assert_eq!(timer.remaining_secs(), 5);
        assert!(timer.poll_event().is_none());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut timer = CountdownTimer::new(5);
        let token = timer.start();
        assert!(token.is_some());
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert!(timer.start().is_none());
    }

    #[test]
    fn test_partial_second_does_not_tick() {
        let mut timer = CountdownTimer::new(5);
        let _token = timer.start();
        timer.advance(999);
        assert!(timer.poll_event().is_none());
        timer.advance(1);
        assert_eq!(timer.poll_event(), Some(TimerEvent::Tick(4)));
    }

    #[test]
    fn test_large_step_catches_up_in_order() {
        let mut timer = CountdownTimer::new(5);
        let _token = timer.start();
        timer.advance(2_500);
        assert_eq!(
            collect(&mut timer),
            vec![TimerEvent::Tick(4), TimerEvent::Tick(3)]
        );
    }

    #[test]
    fn test_finished_fires_once() {
        let mut timer = CountdownTimer::new(2);
        let _token = timer.start();
        timer.advance(60_000);
        assert_eq!(
            collect(&mut timer),
            vec![TimerEvent::Tick(1), TimerEvent::Tick(0), TimerEvent::Finished]
        );
        assert!(timer.is_finished());

        timer.advance(60_000);
        assert!(timer.poll_event().is_none());
    }

    #[test]
    fn test_zero_duration_finishes_on_start() {
        let mut timer = CountdownTimer::new(0);
        let _token = timer.start();
        assert_eq!(collect(&mut timer), vec![TimerEvent::Finished]);
    }

    #[test]
    fn test_paused_ticks_are_skipped() {
        let mut timer = CountdownTimer::new(5);
        let _token = timer.start();
        timer.advance(400);
        timer.pause();
        assert!(timer.is_paused());

        // The cadence boundary passes while paused.
        timer.advance(3_000);
        assert!(timer.poll_event().is_none());
        assert_eq!(timer.remaining_secs(), 5);

        timer.resume();
        timer.advance(600);
        assert_eq!(collect(&mut timer), vec![TimerEvent::Tick(4)]);
    }

    #[test]
    fn test_pause_resume_outside_run_are_noops() {
        let mut timer = CountdownTimer::new(1);
        timer.pause();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        let _token = timer.start();
        timer.advance(1_000);
        timer.resume();
        timer.pause();
        assert_eq!(timer.phase(), TimerPhase::Finished);
    }

    #[test]
    fn test_stop_resets_and_silences() {
        let mut timer = CountdownTimer::new(5);
        let token = timer.start().unwrap();
        timer.advance(2_000);
        let _ = collect(&mut timer);

        timer.stop(token);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_secs(), 5);
        assert_eq!(collect(&mut timer), vec![TimerEvent::Reset(5)]);

        timer.advance(10_000);
        assert!(timer.poll_event().is_none());
    }

    #[test]
    fn test_stop_after_finish_resets() {
        let mut timer = CountdownTimer::new(1);
        let token = timer.start().unwrap();
        timer.advance(1_000);
        let _ = collect(&mut timer);

        timer.stop(token);
        assert_eq!(collect(&mut timer), vec![TimerEvent::Reset(1)]);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut timer = CountdownTimer::new(3);
        let first = timer.start().unwrap();
        let _ = timer.start();
        // Still the first run: stop it, then start a second one.
        timer.stop(first);
        let _ = collect(&mut timer);

        let _second = timer.start().unwrap();
        let stale = TimerToken { run: 1 };
        timer.stop(stale);
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert!(timer.poll_event().is_none());
    }
}
