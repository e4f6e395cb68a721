use conway_cells::{Config, Grid, StepTimer};
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SIDE: usize = 2048;
const GENERATIONS: u64 = 1000;
const FRAMES: u32 = 600;

fn main() -> conway_cells::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let timer = Instant::now();
    let mut grid = Grid::square(SIDE)?;
    grid.randomize(Config::fill_rate(), Some(Config::DEFAULT_SEED))?;
    info!(
        elapsed = ?timer.elapsed(),
        population = grid.population(),
        "field built"
    );

    let timer = Instant::now();
    grid.advance(GENERATIONS)?;
    let elapsed = timer.elapsed();
    info!(
        ?elapsed,
        per_generation = ?(elapsed / GENERATIONS as u32),
        population = grid.population(),
        "big update"
    );

    // 60 fps frame loop with the default pace
    let mut step_timer = StepTimer::default();
    let frame = Duration::from_secs_f64(1. / 60.);
    let mut steps = 0;
    for _ in 0..FRAMES {
        if step_timer.tick(frame) {
            grid.next_gen()?;
            steps += 1;
        }
    }
    info!(
        frames = FRAMES,
        steps,
        step_duration = step_timer.step_duration(),
        "paced run"
    );
    Ok(())
}
