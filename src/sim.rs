use crate::{pos, Cell, Grid};

pub use history::{fingerprint, History};
mod history;

/// classic life transition, B3/S23.
pub fn next_state(cell: Cell, alive_neighbors: usize) -> Cell {
    match (cell, alive_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive, // stay
        (Cell::Alive, _) => Cell::Dead,      // under or over population
        (Cell::Dead, 3) => Cell::Alive,      // reproduction
        (Cell::Dead, _) => Cell::Dead,       // stays dead
    }
}

/// Advances `grid` by one generation.
///
/// Every neighbor count is read from the grid as it stood before the call, the next
/// generation is built in a separate buffer and swapped in once every cell is computed.
pub fn step(grid: &mut Grid) {
    let next = (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| {
                    let pos = pos!(x, y);
                    next_state(grid.get(pos), grid.alive_neighbor_count(pos))
                })
                .collect::<Vec<Cell>>()
        })
        .collect();
    grid.replace(next);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Evolving,
    /// the current generation was already seen `period` ticks ago.
    Stagnant { period: usize },
}

/// Owns the grid being simulated along with its generation count and recent history.
#[derive(Debug)]
pub struct Sim {
    grid: Grid,
    generation: u64,
    history: History,
}

impl Sim {
    pub fn new(grid: Grid) -> Self {
        let mut history = History::default();
        history.record(fingerprint(&grid));
        Self {
            grid,
            generation: 0,
            history,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&mut self) -> Tick {
        step(&mut self.grid);
        self.generation += 1;

        if self.grid.population() == 0 {
            return Tick::Stagnant { period: 1 };
        }
        match self.history.record(fingerprint(&self.grid)) {
            Some(period) => Tick::Stagnant { period },
            None => Tick::Evolving,
        }
    }

    /// replaces the content of the grid in place, keeping the generation count.
    pub fn reset_with(&mut self, f: impl FnOnce(&mut Grid)) {
        self.grid.clear();
        f(&mut self.grid);
        self.history.clear();
        self.history.record(fingerprint(&self.grid));
    }
}
