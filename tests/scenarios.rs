use golrs_bounded::{parse_pattern, place_pattern, pos, step, Cell, Grid, Seeder, Sim, Tick};

fn grid_from(width: usize, height: usize, pattern: &str) -> Grid {
    let mut grid = Grid::new(width, height);
    let skipped = place_pattern(&mut grid, &parse_pattern(pattern), pos!(0, 0));
    assert_eq!(skipped, 0);
    grid
}

fn assert_alive(grid: &Grid, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        assert_eq!(grid.get(pos!(x, y)), Cell::Alive, "expected alive at ({x},{y})");
    }
    assert_eq!(grid.population(), cells.len());
}

#[test]
fn blinker_has_period_two() {
    let horizontal = grid_from(5, 5, ".....\n.....\n.###.\n");
    let mut grid = horizontal.clone();

    step(&mut grid);
    assert_alive(&grid, &[(2, 1), (2, 2), (2, 3)]);
    step(&mut grid);
    assert_eq!(grid, horizontal);
}

#[test]
fn block_survives_anywhere_it_fits() {
    for (width, height) in [(4, 4), (5, 4), (10, 7)] {
        let mut grid = grid_from(width, height, "....\n.##.\n.##.\n");
        step(&mut grid);
        assert_alive(&grid, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    }
}

#[test]
fn block_against_the_corner_survives() {
    // hard edges: the missing neighbors outside are never counted
    let mut grid = grid_from(3, 3, "##\n##\n");
    step(&mut grid);
    assert_alive(&grid, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn blinker_on_the_edge_loses_a_cell() {
    // a vertical blinker against the left edge cannot grow to the left
    let mut grid = grid_from(3, 3, "#\n#\n#\n");
    step(&mut grid);
    assert_alive(&grid, &[(0, 1), (1, 1)]);
}

#[test]
fn empty_grid_stays_dead() {
    let mut grid = Grid::new(16, 9);
    for _ in 0..3 {
        step(&mut grid);
        assert_eq!(grid.population(), 0);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut grid = Grid::new(60, 30);
        Seeder::new(Some(2024)).populate(&mut grid);
        let mut sim = Sim::new(grid);
        for _ in 0..25 {
            sim.tick();
        }
        sim.grid().clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn glider_stagnates_as_a_block_in_the_corner() {
    let mut sim = Sim::new(grid_from(6, 6, ".#\n..#\n###\n"));
    let mut ticks = 0;
    while sim.tick() == Tick::Evolving {
        ticks += 1;
        assert!(ticks < 100, "never stagnated");
    }
    assert_alive(sim.grid(), &[(4, 4), (5, 4), (4, 5), (5, 5)]);
}
