use log::{debug, trace};
use rand::{Rng, prelude::IndexedRandom};

use super::super::{MazeMaker, Status};

pub trait Backtrack {
    fn backtrack_step(&mut self) -> Status;
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack_step(&mut self) -> Status {
        if self.finished {
            return Status::Done;
        }
        self.steps += 1;

        let curr = self.current;
        self.grid.visit(curr);
        self.grid.refresh_visited_neighbors(curr);

        // Uniform over the unvisited directions, never over all four.
        let directions = self.grid.cell(curr).unvisited_directions();

        if let Some(&direction) = directions.choose(&mut self.rng) {
            self.stack.push(curr);
            let next = self
                .grid
                .remove_wall_between(curr, direction)
                .expect("unvisited directions should always lead to a cell on the grid");
            trace!("carved {} from {} to {}", direction, curr, next);
            self.current = next;
        } else if let Some(prev) = self.stack.pop() {
            trace!("backtracked from {} to {}", curr, prev);
            self.current = prev;
        } else {
            self.finished = true;
            debug!("maze complete after {} steps", self.steps);
            return Status::Done;
        }

        Status::Continuing
    }
}
