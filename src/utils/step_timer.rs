use std::time::Duration;

use super::Config;

/// Accumulates frame time and reports when the next generation is due.
pub struct StepTimer {
    step_duration: f64,
    accumulated: f64,
}

impl Default for StepTimer {
    fn default() -> Self {
        Self {
            step_duration: Config::DEFAULT_STEP_DURATION,
            accumulated: 0.,
        }
    }
}

impl StepTimer {
    pub fn new(step_duration: f64) -> Self {
        let mut timer = Self::default();
        timer.set_step_duration(step_duration);
        timer
    }

    pub fn step_duration(&self) -> f64 {
        self.step_duration
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// NaN falls back to the default.
    pub fn set_step_duration(&mut self, seconds: f64) {
        self.step_duration = if seconds.is_nan() {
            Config::DEFAULT_STEP_DURATION
        } else {
            seconds.clamp(Config::MIN_STEP_DURATION, Config::MAX_STEP_DURATION)
        };
    }

    pub fn speed_up(&mut self, dt: f64) {
        self.set_step_duration(self.step_duration - dt);
    }

    pub fn slow_down(&mut self, dt: f64) {
        self.set_step_duration(self.step_duration + dt);
    }

    /// Drops the time collected so far, e.g. after the user edited cells.
    pub fn reset(&mut self) {
        self.accumulated = 0.;
    }

    /// Returns `true` when a generation elapsed.
    ///
    /// At most one generation is reported per call; the overshoot is kept
    /// modulo the step duration.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let due = self.accumulated > self.step_duration;
        if due {
            self.accumulated %= self.step_duration;
        }
        self.accumulated += elapsed.as_secs_f64();
        due
    }
}
