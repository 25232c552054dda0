use std::{io, path::PathBuf};

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("standard output is not a terminal")]
    NotATerminal,
    #[error("could not get terminal size: {0}")]
    TerminalSize(#[source] io::Error),
    #[error("terminal is too small for a grid, got {width}x{height}")]
    EmptyTerminal { width: u16, height: u16 },
    #[error("grid of {width}x{height} does not fit the terminal, at most {max_width}x{max_height}")]
    GridTooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not read pattern {path:?}: {source}")]
    Pattern {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
