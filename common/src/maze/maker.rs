pub mod algorithms;

use std::fmt;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Coord, Grid};
use crate::config::MazeConfig;
use algorithms::backtrack::Backtrack;

pub const START: Coord = Coord::new(0, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidConfiguration { cols: usize, rows: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidConfiguration { cols, rows } => write!(
                f,
                "invalid maze dimensions {}x{}: columns and rows must both be at least 1",
                cols, rows
            ),
        }
    }
}

impl std::error::Error for MazeError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Continuing,
    Done,
}

impl Status {
    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

/// What a renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub cursor: Coord,
    pub finished: bool,
}

/// Carves a perfect maze one cell visit at a time.
///
/// The grid is an arena addressed by `Coord`; the cursor and the
/// backtracking stack hold coordinates, never references into it. Call
/// `step` until it returns `Status::Done`; the maze is valid, if incomplete,
/// between any two calls.
pub struct MazeMaker<R: Rng = StdRng> {
    grid: Grid,
    stack: Vec<Coord>,
    current: Coord,
    finished: bool,
    steps: usize,
    rng: R,
}

impl MazeMaker<StdRng> {
    /// Seeds the random source from `config.seed` if there is one, otherwise
    /// from the operating system.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config, rng)
    }
}

impl<R: Rng> MazeMaker<R> {
    pub fn with_rng(config: MazeConfig, rng: R) -> Result<Self, MazeError> {
        let MazeConfig { cols, rows, .. } = config;
        if cols == 0 || rows == 0 {
            return Err(MazeError::InvalidConfiguration { cols, rows });
        }

        debug!("building {}x{} grid", cols, rows);

        Ok(MazeMaker {
            grid: Grid::new(cols, rows),
            stack: Vec::new(),
            current: START,
            finished: false,
            steps: 0,
            rng,
        })
    }

    /// Advances the generator by one cell visit.
    pub fn step(&mut self) -> Status {
        self.backtrack_step()
    }

    /// Steps until done and returns how many calls to `step` that took.
    pub fn run_to_completion(&mut self) -> usize {
        let mut calls = 0;
        loop {
            calls += 1;
            if self.step().is_done() {
                return calls;
            }
        }
    }

    /// Throws the current maze away and starts a new one of the same shape.
    /// The random source carries on, so the next maze is a different one.
    pub fn reset(&mut self) {
        debug!("resetting {}x{} grid", self.grid.cols(), self.grid.rows());

        self.grid = Grid::new(self.grid.cols(), self.grid.rows());
        self.stack.clear();
        self.current = START;
        self.finished = false;
        self.steps = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Coord {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of calls to `step` that did work, including the one that found
    /// the maze complete.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            cursor: self.current,
            finished: self.finished,
        }
    }
}
