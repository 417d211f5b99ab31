use std::fmt;

use disjoint::DisjointSetVec;
use strum::IntoEnumIterator;

use super::{Coord, Direction, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    pub cells: usize,
    pub passages: usize,
    pub components: usize,
    pub cycles: usize,
}

impl Report {
    /// One connected piece with no loops: a spanning tree over the cells.
    pub fn is_perfect(&self) -> bool {
        self.components == 1 && self.cycles == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells, {} passages, {} components, {} cycles",
            self.cells, self.passages, self.components, self.cycles
        )
    }
}

/// Every open wall between two cells, listed once from the cell on its left
/// or above it.
pub fn passages(grid: &Grid) -> Vec<(Coord, Coord)> {
    let mut passages = Vec::new();

    for coord in grid.coords() {
        for direction in [Direction::Right, Direction::Bottom] {
            let Some(neighbor) = grid.neighbor(coord, direction) else {
                continue;
            };

            if grid.is_open(coord, direction) {
                passages.push((coord, neighbor));
            }
        }
    }

    passages
}

pub fn inspect(grid: &Grid) -> Report {
    let passages = passages(grid);
    let mut cells = DisjointSetVec::from(grid.coords().collect::<Vec<Coord>>());
    let mut cycles = 0;

    for &(cell_1, cell_2) in &passages {
        let i = grid.index_of(cell_1);
        let j = grid.index_of(cell_2);

        if cells.root_of(i) == cells.root_of(j) {
            cycles += 1;
        } else {
            cells.join(i, j);
        }
    }

    let components = (0..grid.len()).filter(|&i| cells.root_of(i) == i).count();

    Report {
        cells: grid.len(),
        passages: passages.len(),
        components,
        cycles,
    }
}

/// Checks that each pair of adjacent cells agrees about the wall between them.
pub fn walls_are_symmetric(grid: &Grid) -> bool {
    grid.coords().all(|coord| {
        Direction::iter().all(|direction| match grid.neighbor(coord, direction) {
            Some(neighbor) => {
                grid.cell(coord).has_wall(direction)
                    == grid.cell(neighbor).has_wall(direction.opposite())
            }
            None => true,
        })
    })
}

/// Checks that no wall on the outside edge of the grid has been removed.
pub fn boundary_is_intact(grid: &Grid) -> bool {
    grid.coords().all(|coord| {
        Direction::iter()
            .filter(|&direction| grid.neighbor(coord, direction).is_none())
            .all(|direction| grid.cell(coord).has_wall(direction))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(grid: &mut Grid, i: usize, j: usize, direction: Direction) {
        grid.remove_wall_between(Coord::new(i, j), direction)
            .expect("test walls should be between cells");
    }

    #[test]
    fn test_untouched_grid_is_all_separate_cells() {
        let grid = Grid::new(3, 2);
        let report = inspect(&grid);

        assert_eq!(
            report,
            Report {
                cells: 6,
                passages: 0,
                components: 6,
                cycles: 0,
            }
        );
        assert!(!report.is_perfect());
    }

    #[test]
    fn test_single_cell_is_perfect() {
        let report = inspect(&Grid::new(1, 1));
        assert!(report.is_perfect());
        assert_eq!(report.passages, 0);
    }

    #[test]
    fn test_spanning_tree_is_perfect() {
        let mut grid = Grid::new(2, 2);
        open(&mut grid, 0, 0, Direction::Right);
        open(&mut grid, 0, 0, Direction::Bottom);
        open(&mut grid, 1, 0, Direction::Bottom);

        let report = inspect(&grid);
        assert!(report.is_perfect(), "{}", report);
        assert_eq!(report.passages, report.cells - 1);
    }

    #[test]
    fn test_loop_is_counted_as_cycle() {
        let mut grid = Grid::new(2, 2);
        open(&mut grid, 0, 0, Direction::Right);
        open(&mut grid, 0, 0, Direction::Bottom);
        open(&mut grid, 1, 0, Direction::Bottom);
        open(&mut grid, 0, 1, Direction::Right);

        let report = inspect(&grid);
        assert_eq!(report.cycles, 1);
        assert_eq!(report.components, 1);
        assert!(!report.is_perfect());
    }

    #[test]
    fn test_isolated_region_is_counted_as_component() {
        let mut grid = Grid::new(3, 1);
        open(&mut grid, 0, 0, Direction::Right);

        let report = inspect(&grid);
        assert_eq!(report.components, 2);
        assert_eq!(report.cycles, 0);
        assert!(!report.is_perfect());
    }

    #[test]
    fn test_passages_are_listed_once() {
        let mut grid = Grid::new(2, 2);
        open(&mut grid, 1, 1, Direction::Top);
        open(&mut grid, 1, 1, Direction::Left);

        assert_eq!(
            passages(&grid),
            vec![
                (Coord::new(1, 0), Coord::new(1, 1)),
                (Coord::new(0, 1), Coord::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_one_sided_wall_is_not_symmetric() {
        let mut grid = Grid::new(2, 1);
        assert!(walls_are_symmetric(&grid));

        let index = grid.index_of(Coord::new(0, 0));
        grid.cells[index].walls[Direction::Right.index()] = false;

        assert!(!walls_are_symmetric(&grid));
    }

    #[test]
    fn test_opened_edge_breaks_boundary() {
        let mut grid = Grid::new(2, 2);
        assert!(boundary_is_intact(&grid));

        let index = grid.index_of(Coord::new(1, 1));
        grid.cells[index].walls[Direction::Bottom.index()] = false;

        assert!(!boundary_is_intact(&grid));
        assert!(walls_are_symmetric(&grid));
    }
}
