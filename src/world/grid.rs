use crate::{pos, Cell, Pos};

/// A fixed-size, hard-edged board. Positions outside `[0, width) x [0, height)` do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let cells = vec![vec![Cell::Dead; width]; height];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, Pos { x, y }: Pos) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> (usize, usize) {
        assert!(
            self.contains(pos),
            "position ({}, {}) is outside of the {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        (pos.x as usize, pos.y as usize)
    }

    pub fn get(&self, pos: Pos) -> Cell {
        let (x, y) = self.index(pos);
        self.cells[y][x]
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let (x, y) = self.index(pos);
        self.cells[y][x] = cell;
    }

    /// number of alive cells among the in-bounds neighbors of `pos`, in `0..=8`.
    pub fn alive_neighbor_count(&self, pos: Pos) -> usize {
        pos.neighbors()
            .filter(|&neighbor| self.contains(neighbor) && self.get(neighbor).is_alive())
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| pos!(x, y)))
    }

    pub fn actives(&self) -> Vec<Pos> {
        self.positions()
            .filter(|&pos| self.get(pos).is_alive())
            .collect()
    }

    pub fn population(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Dead);
        }
    }

    /// swaps in the rows of `next`, which must have the same dimensions.
    pub(crate) fn replace(&mut self, next: Vec<Vec<Cell>>) {
        debug_assert_eq!(next.len(), self.height);
        debug_assert!(next.iter().all(|row| row.len() == self.width));
        self.cells = next;
    }
}
