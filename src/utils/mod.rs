mod config;
mod step_timer;

pub use config::Config;
pub use step_timer::StepTimer;
