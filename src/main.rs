use std::{env::args, fs, process::exit};

use golrs_bounded::{
    config::USAGE, parse_pattern, place_pattern, pos, view, Config, Error, Grid, Result, Seeder,
    Sim, View,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_pattern(config: &Config, grid: &mut Grid) -> Result<bool> {
    let Some(path) = &config.pattern else {
        return Ok(false);
    };
    let content = fs::read_to_string(path).map_err(|source| Error::Pattern {
        path: path.clone(),
        source,
    })?;
    let actives = parse_pattern(&content);
    let skipped = place_pattern(grid, &actives, pos!(0, 0));
    if skipped > 0 {
        warn!(?path, skipped, "pattern cells outside of the grid were dropped");
    }
    Ok(true)
}

fn run() -> Result<()> {
    let config = Config::from_args(args().skip(1))?;
    if config.help {
        println!("{USAGE}");
        return Ok(());
    }

    let (width, height) = view::grid_size(&config)?;
    let mut grid = Grid::new(width, height);
    let mut seeder =
        Seeder::new(config.seed).with_chances(config.row_chance, config.cell_chance);
    if !load_pattern(&config, &mut grid)? {
        seeder.populate(&mut grid);
    }
    info!(
        width,
        height,
        seed = seeder.seed(),
        population = grid.population(),
        "starting"
    );

    let generation = View::new(Sim::new(grid), seeder, config).run()?;
    info!(generation, "exiting");
    Ok(())
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("[error] {error}");
        exit(1);
    }
}
