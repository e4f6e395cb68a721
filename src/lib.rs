mod cell;
mod error;
mod grid;
mod utils;

pub use cell::Cell;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use utils::{Config, StepTimer};
