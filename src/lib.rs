//! Conway's game of life on a bounded grid, with a terminal front end.
//!
//! Cells outside of the grid do not exist: they are neither stored nor counted as neighbors.

pub use utils::Pos;
mod utils;

pub use world::{Cell, Grid};
pub mod world;

pub use sim::{fingerprint, next_state, step, History, Sim, Tick};
pub mod sim;

pub use seed::{parse_pattern, place_pattern, Seeder};
pub mod seed;

pub use config::{Config, ConfigError};
pub mod config;

pub use error::{Error, Result};
pub mod error;

pub use view::{Canvas, View};
pub mod view;
