use std::io::{self, Write};

use crate::{pos, Grid, Pos};

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = ' ';

/// A frame of text: `height` rows of the grid plus one status line below them.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    status: String,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = vec![vec![DEAD_GLYPH; width]; height];
        Self {
            height,
            lines,
            status: String::new(),
            width,
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(char) = f(pos!(x as i32, y as i32)) {
                    self.lines[y][x] = char;
                }
            }
        }
    }

    pub fn draw_grid(&mut self, grid: &Grid) {
        self.layer(|pos| {
            grid.contains(pos).then(|| {
                if grid.get(pos).is_alive() {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                }
            })
        });
    }

    /// sets the line shown under the grid, cut to the canvas width.
    pub fn status(&mut self, status: &str) {
        self.status = status.chars().take(self.width).collect();
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines
            .iter()
            .map(|line| line.iter().collect())
            .chain(std::iter::once(self.status.clone()))
    }

    /// the full frame, every line positioned with an absolute cursor move.
    /// lines past the last addressable terminal row are left out.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (index, line) in self.lines().enumerate() {
            let Ok(row) = u16::try_from(index + 1) else {
                break;
            };
            let goto = termion::cursor::Goto(1, row);
            let clear = termion::clear::UntilNewline;
            result += &format!("{goto}{line}{clear}");
        }
        result
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn draws_alive_cells() {
        let mut grid = Grid::new(3, 2);
        grid.set(pos!(0, 0), Cell::Alive);
        grid.set(pos!(2, 1), Cell::Alive);

        let mut canvas = Canvas::for_grid(&grid);
        canvas.draw_grid(&grid);
        canvas.status("gen 0  pop 2");
        let lines: Vec<_> = canvas.lines().collect();
        assert_eq!(lines, vec!["█  ", "  █", "gen"]);
    }

    #[test]
    fn redraw_clears_dead_cells() {
        let mut grid = Grid::new(2, 1);
        grid.set(pos!(1, 0), Cell::Alive);
        let mut canvas = Canvas::for_grid(&grid);
        canvas.draw_grid(&grid);
        grid.clear();
        canvas.draw_grid(&grid);
        assert_eq!(canvas.lines().next().as_deref(), Some("  "));
    }

    #[test]
    fn render_positions_every_line() {
        let canvas = Canvas::new(2, 2);
        let frame = canvas.render();
        for row in 1..=3 {
            let goto = format!("{}", termion::cursor::Goto(1, row));
            assert!(frame.contains(&goto), "line {row}");
        }

        let mut out = vec![];
        canvas.display(&mut out).unwrap();
        assert_eq!(out, frame.into_bytes());
    }

    #[test]
    fn render_stops_at_the_last_terminal_row() {
        let frame = Canvas::new(1, 70000).render();
        let last = format!("{}", termion::cursor::Goto(1, u16::MAX));
        assert!(frame.contains(&last));
        assert_eq!(frame.matches("\x1b[").count(), 2 * u16::MAX as usize);
    }
}
