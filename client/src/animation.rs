use std::time::Duration;

use log::{info, warn};
use rand::Rng;

use common::maze::{MazeMaker, Snapshot, analysis};

use crate::config::ViewConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Carving,
    Finished,
}

/// Drives a `MazeMaker` from the frame loop: decides how often to step and
/// stops stepping once the maze is done.
pub struct Animation<R: Rng = rand::rngs::StdRng> {
    maker: MazeMaker<R>,
    steps_per_frame: usize,
    frame_delay: Duration,
    since_last_tick: Duration,
    phase: Phase,
}

impl<R: Rng> Animation<R> {
    pub fn new(maker: MazeMaker<R>, view: &ViewConfig) -> Self {
        let phase = if maker.is_finished() {
            Phase::Finished
        } else {
            Phase::Carving
        };

        Self {
            maker,
            steps_per_frame: view.steps_per_frame.max(1),
            frame_delay: view.frame_delay,
            since_last_tick: Duration::ZERO,
            phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.maker.snapshot()
    }

    pub fn maker(&self) -> &MazeMaker<R> {
        &self.maker
    }

    /// Called once per frame with the time since the previous frame.
    pub fn update(&mut self, dt: Duration) -> Phase {
        if self.phase == Phase::Finished {
            return self.phase;
        }

        self.since_last_tick += dt;
        if self.since_last_tick < self.frame_delay {
            return self.phase;
        }
        self.since_last_tick = Duration::ZERO;

        for _ in 0..self.steps_per_frame {
            if self.maker.step().is_done() {
                self.finish();
                break;
            }
        }

        self.phase
    }

    pub fn restart(&mut self) {
        info!("starting a new maze");
        self.maker.reset();
        self.since_last_tick = Duration::ZERO;
        self.phase = Phase::Carving;
    }

    fn finish(&mut self) {
        self.phase = Phase::Finished;

        let report = analysis::inspect(self.maker.grid());
        if report.is_perfect() {
            info!("maze finished in {} steps: {}", self.maker.steps(), report);
        } else {
            warn!("maze finished but is not perfect: {}", report);
        }
    }
}
