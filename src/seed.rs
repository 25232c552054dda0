use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{pos, Cell, Grid, Pos};

pub const DEFAULT_ROW_CHANCE: f64 = 1. / 3.;
pub const DEFAULT_CELL_CHANCE: f64 = 1. / 20.;

/// Sparse random population: a few rows are picked, then a few cells within them.
#[derive(Debug, Clone)]
pub struct Seeder {
    seed: u64,
    rng: ChaCha8Rng,
    row_chance: f64,
    cell_chance: f64,
}

impl Seeder {
    /// without an explicit seed one is drawn from entropy, so every run can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            row_chance: DEFAULT_ROW_CHANCE,
            cell_chance: DEFAULT_CELL_CHANCE,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn with_chances(mut self, row_chance: f64, cell_chance: f64) -> Self {
        assert!((0.0..=1.0).contains(&row_chance), "row chance out of [0, 1]");
        assert!((0.0..=1.0).contains(&cell_chance), "cell chance out of [0, 1]");
        self.row_chance = row_chance;
        self.cell_chance = cell_chance;
        self
    }

    /// overwrites every cell of the grid.
    pub fn populate(&mut self, grid: &mut Grid) {
        for y in 0..grid.height() as i32 {
            let active_row = self.rng.gen_bool(self.row_chance);
            for x in 0..grid.width() as i32 {
                let alive = active_row && self.rng.gen_bool(self.cell_chance);
                let cell = if alive { Cell::Alive } else { Cell::Dead };
                grid.set(pos!(x, y), cell);
            }
        }
    }
}

/// Reads a plain text pattern where `#` marks an alive cell, one line per row.
pub fn parse_pattern(str: &str) -> Vec<Pos> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in str.chars() {
        match c {
            '#' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            '\r' => (),
            _ => pos.x += 1,
        }
    }
    result
}

/// Sets the pattern cells alive, shifted by `offset`.
/// Returns how many cells fell outside of the grid and were dropped.
pub fn place_pattern(grid: &mut Grid, cells: &[Pos], offset: Pos) -> usize {
    let mut skipped = 0;
    for &cell in cells {
        let pos = cell + offset;
        if grid.contains(pos) {
            grid.set(pos, Cell::Alive);
        } else {
            skipped += 1;
        }
    }
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_grid() {
        let mut left = Grid::new(40, 30);
        let mut right = Grid::new(40, 30);
        Seeder::new(Some(7)).populate(&mut left);
        Seeder::new(Some(7)).populate(&mut right);
        assert_eq!(left, right);
    }

    #[test]
    fn entropy_seed_can_be_replayed() {
        let mut seeder = Seeder::new(None);
        let mut replay = Seeder::new(Some(seeder.seed()));
        assert_eq!(replay.seed(), seeder.seed());

        let mut left = Grid::new(40, 30);
        let mut right = Grid::new(40, 30);
        seeder.populate(&mut left);
        replay.populate(&mut right);
        assert_eq!(left, right);
    }

    #[test]
    fn populate_overwrites() {
        let mut grid = Grid::new(10, 10);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, Cell::Alive);
        }
        Seeder::new(Some(1))
            .with_chances(0.0, 1.0)
            .populate(&mut grid);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn rows_are_all_or_nothing_at_full_cell_chance() {
        let mut grid = Grid::new(12, 50);
        Seeder::new(Some(3))
            .with_chances(0.5, 1.0)
            .populate(&mut grid);
        for row in grid.rows() {
            let alive = row.iter().filter(|cell| cell.is_alive()).count();
            assert!(alive == 0 || alive == row.len());
        }
        assert!(grid.population() > 0);
        assert!(grid.population() < 12 * 50);
    }

    #[test]
    fn default_population_is_sparse() {
        let mut grid = Grid::new(200, 100);
        Seeder::new(Some(42)).populate(&mut grid);
        // expected density is 1/60
        let population = grid.population();
        assert!(population > 0);
        assert!(population < 200 * 100 / 20);
    }

    #[test]
    fn parses_patterns() {
        let cells = parse_pattern(".#.\r\n..#\n###\n");
        assert_eq!(
            cells,
            vec![pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
        );
        assert!(parse_pattern("...\n   \n").is_empty());
    }

    #[test]
    fn placement_drops_outside_cells() {
        let mut grid = Grid::new(3, 3);
        let cells = parse_pattern("##\n##\n");
        assert_eq!(place_pattern(&mut grid, &cells, pos!(2, 2)), 3);
        assert_eq!(grid.actives(), vec![pos!(2, 2)]);
        assert_eq!(place_pattern(&mut grid, &cells, pos!(-1, 0)), 2);
        assert_eq!(grid.actives(), vec![pos!(0, 0), pos!(0, 1), pos!(2, 2)]);
    }
}
