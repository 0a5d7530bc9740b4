//! Frame-tick timers.
//!
//! Timers are polled rather than callback-driven: the owner calls [`tick`]
//! once per frame and inspects the one-shot `just_started` / `just_stopped`
//! signals afterwards. Signals are cleared at the start of the next tick, so
//! each transition is observable for exactly one frame.
//!
//! [`tick`]: CountdownTimer::tick

/// Counts down from an initial duration to zero.
///
/// State machine: `{Idle, Running}`. `start` moves to Running (re-arming an
/// already running timer just resets the remaining time without signaling
/// "started" again); the timer returns to Idle on natural expiry or an
/// explicit [`stop`](CountdownTimer::stop).
#[derive(Clone, Debug)]
pub struct CountdownTimer {
    initial: f32,
    remaining: f32,
    running: bool,
    just_started: bool,
    just_stopped: bool,
}

impl CountdownTimer {
    /// Creates an idle timer. `start` must be called to arm it.
    pub fn new(initial: f32) -> Self {
        Self {
            initial,
            remaining: 0.0,
            running: false,
            just_started: false,
            just_stopped: false,
        }
    }

    /// Arms the timer from its full duration.
    ///
    /// Re-arming while running resets the remaining time without raising
    /// the started signal a second time.
    pub fn start(&mut self) {
        self.remaining = self.initial;
        if !self.running {
            self.running = true;
            self.just_started = true;
        }
    }

    /// Stops the timer if it is running, raising the stopped signal.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.just_stopped = true;
        }
    }

    /// Advances the timer. Ticking an idle timer is a no-op.
    ///
    /// When the remaining time crosses zero the timer stops itself and the
    /// stopped signal fires exactly once.
    pub fn tick(&mut self, delta: f32) {
        self.just_started = false;
        self.just_stopped = false;

        if self.running && self.remaining > 0.0 {
            self.remaining -= delta;
        }

        if self.running && self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.stop();
        }
    }

    /// Replaces the duration and refills the remaining time.
    /// The running state is left unchanged.
    pub fn reset_to(&mut self, new_duration: f32) {
        self.initial = new_duration;
        self.remaining = new_duration;
    }

    /// Refills the remaining time from the current duration.
    pub fn reset(&mut self) {
        self.remaining = self.initial;
    }

    /// Fraction of the duration still remaining, in `[0, 1]`.
    ///
    /// A zero-duration timer reports 0.0: it is treated as already expired
    /// rather than producing a divide-by-zero NaN.
    pub fn progress(&self) -> f32 {
        if self.initial <= 0.0 {
            0.0
        } else {
            (self.remaining / self.initial).clamp(0.0, 1.0)
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True for the one tick window after the timer was armed.
    pub fn just_started(&self) -> bool {
        self.just_started
    }

    /// True for the one tick window after the timer stopped.
    pub fn just_stopped(&self) -> bool {
        self.just_stopped
    }
}

/// Counts up from zero. Used for session and encounter timing.
#[derive(Clone, Debug, Default)]
pub struct StopwatchTimer {
    elapsed: f32,
    running: bool,
}

impl StopwatchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.running {
            self.elapsed += delta;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_runs_down_and_stops_once() {
        let mut timer = CountdownTimer::new(2.0);
        timer.start();
        assert!(timer.is_running());
        assert!(timer.just_started());

        timer.tick(1.0);
        assert!(timer.is_running());
        assert!(!timer.just_started());
        assert!(!timer.just_stopped());

        timer.tick(1.5);
        assert!(!timer.is_running());
        assert!(timer.just_stopped());

        // Signal is one-shot.
        timer.tick(0.1);
        assert!(!timer.just_stopped());
    }

    #[test]
    fn restart_while_running_does_not_signal_started_again() {
        let mut timer = CountdownTimer::new(3.0);
        timer.start();
        timer.tick(2.0);
        assert!((timer.remaining() - 1.0).abs() < 1e-6);

        timer.start();
        assert!((timer.remaining() - 3.0).abs() < 1e-6);
        assert!(!timer.just_started());
    }

    #[test]
    fn reset_to_changes_duration_without_touching_running_state() {
        let mut timer = CountdownTimer::new(1.0);
        timer.reset_to(4.0);
        assert!(!timer.is_running());
        assert!((timer.remaining() - 4.0).abs() < 1e-6);

        timer.start();
        timer.reset_to(2.0);
        assert!(timer.is_running());
        assert!((timer.progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn progress_of_zero_duration_timer_is_expired() {
        let timer = CountdownTimer::new(0.0);
        assert_eq!(timer.progress(), 0.0);
        assert!(timer.is_finished());
    }

    #[test]
    fn ticking_idle_timer_is_a_noop() {
        let mut timer = CountdownTimer::new(5.0);
        timer.tick(10.0);
        assert!(!timer.is_running());
        assert!(!timer.just_stopped());
    }

    #[test]
    fn stopwatch_accumulates_while_running() {
        let mut watch = StopwatchTimer::new();
        watch.tick(1.0);
        assert_eq!(watch.elapsed(), 0.0);

        watch.start();
        watch.tick(0.5);
        watch.tick(0.25);
        assert!((watch.elapsed() - 0.75).abs() < 1e-6);

        watch.stop();
        watch.tick(1.0);
        assert!((watch.elapsed() - 0.75).abs() < 1e-6);
    }
}
