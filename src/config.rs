use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::seed::{DEFAULT_CELL_CHANCE, DEFAULT_ROW_CHANCE};

pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

pub const USAGE: &str = "\
usage: golrs-bounded [options] [pattern]

  pattern           text file where '#' marks alive cells, placed at the top left
  --tick-ms <n>     milliseconds between generations (default 50)
  --seed <n>        seed for the random population
  --row-chance <p>  chance for a row to hold any alive cell (default 1/3)
  --cell-chance <p> chance for a cell of such a row to be alive (default 1/20)
  --size <w>x<h>    grid size instead of the terminal size
  --reseed          repopulate once the world is dead or looping
  --help            print this message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown option {0:?}")]
    UnknownOption(String),
    #[error("only one pattern path can be given, got {0:?} and {1:?}")]
    ExtraPattern(PathBuf, PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick: Duration,
    pub seed: Option<u64>,
    pub size: Option<(usize, usize)>,
    pub pattern: Option<PathBuf>,
    pub reseed: bool,
    pub row_chance: f64,
    pub cell_chance: f64,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            seed: None,
            size: None,
            pattern: None,
            reseed: false,
            row_chance: DEFAULT_ROW_CHANCE,
            cell_chance: DEFAULT_CELL_CHANCE,
            help: false,
        }
    }
}

impl Config {
    /// parses command line arguments, without the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tick-ms" => {
                    let millis: u64 = parse_value("--tick-ms", args.next())?;
                    config.tick = Duration::from_millis(millis);
                }
                "--seed" => config.seed = Some(parse_value("--seed", args.next())?),
                "--row-chance" => {
                    config.row_chance = parse_chance("--row-chance", args.next())?
                }
                "--cell-chance" => {
                    config.cell_chance = parse_chance("--cell-chance", args.next())?
                }
                "--size" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--size"))?;
                    config.size = Some(parse_size(&value)?);
                }
                "--reseed" => config.reseed = true,
                "--help" | "-h" => config.help = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownOption(flag.to_string()))
                }
                path => {
                    if let Some(previous) = config.pattern.take() {
                        return Err(ConfigError::ExtraPattern(previous, path.into()));
                    }
                    config.pattern = Some(path.into());
                }
            }
        }
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(
    flag: &'static str,
    value: Option<String>,
) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { flag, value })
}

fn parse_chance(flag: &'static str, value: Option<String>) -> Result<f64, ConfigError> {
    let chance: f64 = parse_value(flag, value)?;
    if !(0.0..=1.0).contains(&chance) {
        return Err(ConfigError::InvalidValue {
            flag,
            value: chance.to_string(),
        });
    }
    Ok(chance)
}

fn parse_size(value: &str) -> Result<(usize, usize), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        flag: "--size",
        value: value.to_string(),
    };
    let (width, height) = value.split_once('x').ok_or_else(invalid)?;
    let width: usize = width.parse().map_err(|_| invalid())?;
    let height: usize = height.parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}
