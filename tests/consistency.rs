use conway_cells::Grid;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

/// Reference field that recounts all neighbors every generation.
struct NaiveField {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
}

impl NaiveField {
    fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), width * height);
        Self {
            cells_next: vec![false; cells.len()],
            cells_curr: cells,
            width,
            height,
        }
    }

    fn get(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return false;
        }
        self.cells_curr[x as usize + y as usize * self.width]
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        self.get(x - 1, y - 1) as usize
            + self.get(x, y - 1) as usize
            + self.get(x + 1, y - 1) as usize
            + self.get(x - 1, y) as usize
            + self.get(x + 1, y) as usize
            + self.get(x - 1, y + 1) as usize
            + self.get(x, y + 1) as usize
            + self.get(x + 1, y + 1) as usize
    }

    fn update(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                let next = if self.cells_curr[x + y * self.width] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.cells_next[x + y * self.width] = next;
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }
}

fn assert_fields_equal(grid: &Grid, naive: &NaiveField, generation: usize) {
    let cells = grid.get_cells();
    if cells == naive.cells_curr {
        return;
    }
    let mut picture = String::new();
    for y in 0..naive.height {
        picture.push('|');
        picture.extend(
            cells[y * naive.width..(y + 1) * naive.width]
                .iter()
                .map(|&c| if c { '#' } else { ' ' }),
        );
        picture.push('|');
        picture.extend(
            naive.cells_curr[y * naive.width..(y + 1) * naive.width]
                .iter()
                .map(|&c| if c { '#' } else { ' ' }),
        );
        picture.push_str("|\n");
    }
    panic!("Mismatch after {} generations:\n{}", generation, picture);
}

#[test]
fn test_consistency() {
    const W: usize = 64;
    const H: usize = 48;

    for fill_rate in [0.2, 0.4, 0.6] {
        let mut grid = Grid::with_dimensions(W, H).unwrap();
        grid.randomize(fill_rate, Some(SEED)).unwrap();
        let mut naive = NaiveField::from_cells(W, H, grid.get_cells());

        for generation in 1..=200 {
            grid.next_gen().unwrap();
            naive.update();
            assert_fields_equal(&grid, &naive, generation);
        }
        assert_eq!(grid.population(), naive.cells_curr.iter().filter(|&&c| c).count());
    }
}

#[test]
fn test_consistency_with_edits() {
    const W: usize = 31;
    const H: usize = 17;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let states = (0..W * H).map(|_| rng.gen_bool(0.3)).collect::<Vec<_>>();
    let mut grid = Grid::with_dimensions(W, H).unwrap();
    grid.set_cells(&states).unwrap();
    let mut naive = NaiveField::from_cells(W, H, states);

    for generation in 1..=100 {
        for _ in 0..5 {
            let (x, y, state) = (rng.gen_range(0..W), rng.gen_range(0..H), rng.gen_bool(0.5));
            grid.set_cell_state(x, y, state).unwrap();
            naive.cells_curr[x + y * W] = state;
        }
        grid.next_gen().unwrap();
        naive.update();
        assert_fields_equal(&grid, &naive, generation);
    }
}

#[test]
fn test_advance_matches_single_steps() {
    let mut stepped = Grid::square(40).unwrap();
    stepped.randomize(0.5, Some(SEED)).unwrap();
    let mut advanced = stepped.clone();

    for _ in 0..37 {
        stepped.next_gen().unwrap();
    }
    advanced.advance(37).unwrap();
    assert_eq!(stepped.get_cells(), advanced.get_cells());
    assert_eq!(stepped.generation(), advanced.generation());
}
