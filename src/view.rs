use std::{
    io::{stdin, stdout, Write},
    sync::mpsc,
    thread,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    Config, Seeder, Sim, Tick,
};

pub use canvas::Canvas;
mod canvas;

/// Grid dimensions for the current terminal, keeping the last line free for the status.
pub fn grid_size(config: &Config) -> Result<(usize, usize)> {
    if !termion::is_tty(&stdout()) {
        return Err(Error::NotATerminal);
    }
    let terminal = termion::terminal_size().map_err(Error::TerminalSize)?;
    fit_grid(config.size, terminal)
}

/// the requested size if it fits in `terminal`, or the whole terminal when none is requested.
fn fit_grid(
    requested: Option<(usize, usize)>,
    (width, height): (u16, u16),
) -> Result<(usize, usize)> {
    if width < 2 || height < 2 {
        return Err(Error::EmptyTerminal { width, height });
    }
    let (max_width, max_height) = ((width - 1) as usize, (height - 1) as usize);
    match requested {
        None => Ok((max_width, max_height)),
        Some((width, height)) if width <= max_width && height <= max_height => {
            Ok((width, height))
        }
        Some((width, height)) => Err(Error::GridTooLarge {
            width,
            height,
            max_width,
            max_height,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    TogglePause,
    Reseed,
    Step,
}

impl InputCmd {
    fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputCmd::Exit,
            Key::Char(' ') => InputCmd::TogglePause,
            Key::Char('r') => InputCmd::Reseed,
            Key::Char('n') => InputCmd::Step,
            _ => return None,
        };
        Some(command)
    }
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let Ok(key) = key else { break };
        if let Some(command) = InputCmd::from_key(key) {
            if sender.send(command).is_err() {
                break;
            }
        }
    }
}

/// Terminal front end: paces the simulation, draws each generation and reacts to keys.
pub struct View {
    sim: Sim,
    seeder: Seeder,
    canvas: Canvas,
    config: Config,
    paused: bool,
    stagnant: bool,
}

impl View {
    pub fn new(sim: Sim, seeder: Seeder, config: Config) -> Self {
        let canvas = Canvas::for_grid(sim.grid());
        Self {
            sim,
            seeder,
            canvas,
            config,
            paused: false,
            stagnant: false,
        }
    }

    /// Runs until the user quits, returning the generation reached.
    pub fn run(mut self) -> Result<u64> {
        let mut stdout = stdout().into_raw_mode()?;
        write!(stdout, "{}{}", termion::clear::All, termion::cursor::Hide)?;

        let (sender, receiver) = mpsc::channel();
        thread::spawn(|| input_loop(sender));

        let result = self.view_loop(&receiver, &mut stdout);

        write!(
            stdout,
            "{}{}{}",
            termion::clear::All,
            termion::cursor::Goto(1, 1),
            termion::cursor::Show
        )?;
        stdout.flush()?;
        result.map(|_| self.sim.generation())
    }

    fn view_loop(
        &mut self,
        receiver: &mpsc::Receiver<InputCmd>,
        out: &mut impl Write,
    ) -> Result<()> {
        loop {
            let mut step_once = false;
            while let Ok(cmd) = receiver.try_recv() {
                match cmd {
                    InputCmd::Exit => return Ok(()),
                    InputCmd::TogglePause => self.paused = !self.paused,
                    InputCmd::Reseed => self.reseed(),
                    InputCmd::Step => step_once = true,
                }
            }

            self.draw(out)?;
            if !self.paused || step_once {
                self.advance();
            }
            thread::sleep(self.config.tick);
        }
    }

    fn draw(&mut self, out: &mut impl Write) -> Result<()> {
        let grid = self.sim.grid();
        let paused = if self.paused { "  [paused]" } else { "" };
        let status = format!(
            "gen {}  pop {}{paused}",
            self.sim.generation(),
            grid.population()
        );
        self.canvas.draw_grid(grid);
        self.canvas.status(&status);
        self.canvas.display(out)?;
        Ok(())
    }

    fn advance(&mut self) {
        match self.sim.tick() {
            Tick::Evolving => self.stagnant = false,
            Tick::Stagnant { period } if self.config.reseed => {
                info!(generation = self.sim.generation(), period, "world stagnated, reseeding");
                self.reseed();
            }
            Tick::Stagnant { period } => {
                // only the first stagnant generation is worth a line
                if !self.stagnant {
                    debug!(generation = self.sim.generation(), period, "world stagnated");
                }
                self.stagnant = true;
            }
        }
    }

    fn reseed(&mut self) {
        let seeder = &mut self.seeder;
        self.sim.reset_with(|grid| seeder.populate(grid));
        self.stagnant = false;
    }
}

#[test]
fn test_fit_grid() {
    assert_eq!(fit_grid(None, (80, 24)).unwrap(), (79, 23));
    assert_eq!(fit_grid(Some((79, 23)), (80, 24)).unwrap(), (79, 23));
    assert_eq!(fit_grid(Some((10, 5)), (80, 24)).unwrap(), (10, 5));
    assert!(matches!(
        fit_grid(Some((1, 70000)), (80, 24)),
        Err(Error::GridTooLarge { height: 70000, max_height: 23, .. })
    ));
    assert!(matches!(
        fit_grid(Some((80, 10)), (80, 24)),
        Err(Error::GridTooLarge { width: 80, max_width: 79, .. })
    ));
    assert!(matches!(
        fit_grid(None, (1, 24)),
        Err(Error::EmptyTerminal { width: 1, height: 24 })
    ));
}

#[test]
fn test_key_bindings() {
    assert_eq!(InputCmd::from_key(Key::Char('q')), Some(InputCmd::Exit));
    assert_eq!(InputCmd::from_key(Key::Ctrl('c')), Some(InputCmd::Exit));
    assert_eq!(InputCmd::from_key(Key::Char(' ')), Some(InputCmd::TogglePause));
    assert_eq!(InputCmd::from_key(Key::Char('r')), Some(InputCmd::Reseed));
    assert_eq!(InputCmd::from_key(Key::Char('n')), Some(InputCmd::Step));
    assert_eq!(InputCmd::from_key(Key::Up), None);
}
