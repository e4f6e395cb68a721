use std::sync::atomic::{AtomicU32, Ordering};

static FILL_RATE_PERCENT: AtomicU32 = AtomicU32::new(Config::DEFAULT_FILL_RATE_PERCENT);

/// Engine-wide defaults shared by the grid front ends.
pub struct Config;

impl Config {
    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_FILL_RATE_PERCENT: u32 = 40;
    pub const DEFAULT_FILL_RATE: f64 = Self::DEFAULT_FILL_RATE_PERCENT as f64 / 100.;

    /// Seconds between generations.
    pub const DEFAULT_STEP_DURATION: f64 = 0.01;
    pub const MIN_STEP_DURATION: f64 = 0.001;
    pub const MAX_STEP_DURATION: f64 = 1.;

    /// Probability of a cell being alive after randomization.
    pub fn fill_rate() -> f64 {
        Self::fill_rate_percent() as f64 / 100.
    }

    pub fn fill_rate_percent() -> u32 {
        FILL_RATE_PERCENT.load(Ordering::Relaxed)
    }

    /// Values above 100 are clamped.
    pub fn set_fill_rate_percent(percent: u32) {
        FILL_RATE_PERCENT.store(percent.min(100), Ordering::Relaxed);
    }
}
