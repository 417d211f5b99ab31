pub mod analysis;
pub mod maker;

use std::fmt;

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

pub use maker::{MazeError, MazeMaker, Snapshot, Status};

pub const WALL_SYMBOL: &str = "██";
pub const SPACE_SYMBOL: &str = "  ";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

/// Position of a cell: `i` is the column, `j` the row.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Coord {
    pub i: usize,
    pub j: usize,
}

impl Coord {
    pub const fn new(i: usize, j: usize) -> Self {
        Coord { i, j }
    }

    /// Position of this cell's interior in the block map returned by
    /// `Grid::blocks`, as `(x, z)`.
    pub fn block(self) -> (usize, usize) {
        (2 * self.i + 1, 2 * self.j + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    walls: [bool; Direction::COUNT],
    visited_neighbors: [bool; Direction::COUNT],
    visited: bool,
}

impl Cell {
    fn new(coord: Coord, cols: usize, rows: usize) -> Self {
        // Directions that lead off the grid count as visited so they are
        // never offered as a way forward.
        let mut visited_neighbors = [false; Direction::COUNT];
        visited_neighbors[Direction::Top.index()] = coord.j == 0;
        visited_neighbors[Direction::Right.index()] = coord.i == cols - 1;
        visited_neighbors[Direction::Bottom.index()] = coord.j == rows - 1;
        visited_neighbors[Direction::Left.index()] = coord.i == 0;

        Cell {
            walls: [true; Direction::COUNT],
            visited_neighbors,
            visited: false,
        }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub fn walls(&self) -> [bool; Direction::COUNT] {
        self.walls
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_neighbor_visited(&self, direction: Direction) -> bool {
        self.visited_neighbors[direction.index()]
    }

    pub fn unvisited_directions(&self) -> Vec<Direction> {
        Direction::iter()
            .filter(|&direction| !self.is_neighbor_visited(direction))
            .collect()
    }

    pub fn available_neighbors(&self) -> usize {
        self.visited_neighbors
            .iter()
            .filter(|&&visited| !visited)
            .count()
    }
}

/// Arena of cells, stored row by row.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        debug_assert!(cols > 0 && rows > 0, "grid dimensions must be non-zero");

        let cells = (0..rows)
            .flat_map(|j| (0..cols).map(move |i| Coord::new(i, j)))
            .map(|coord| Cell::new(coord, cols, rows))
            .collect();

        Grid { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.i < self.cols && coord.j < self.rows
    }

    #[inline]
    pub(crate) fn index_of(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "cell {} is out of bounds", coord);
        coord.j * self.cols + coord.i
    }

    #[inline]
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[self.index_of(coord)]
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |j| (0..cols).map(move |i| Coord::new(i, j)))
    }

    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let Coord { i, j } = coord;
        let next = match direction {
            Direction::Top => Coord::new(i, j.checked_sub(1)?),
            Direction::Right => Coord::new(i + 1, j),
            Direction::Bottom => Coord::new(i, j + 1),
            Direction::Left => Coord::new(i.checked_sub(1)?, j),
        };

        self.contains(next).then_some(next)
    }

    /// True if there is no wall on the `direction` side of the cell.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        !self.cell(coord).has_wall(direction)
    }

    pub fn visit(&mut self, coord: Coord) {
        let index = self.index_of(coord);
        self.cells[index].visited = true;
    }

    /// Flags every on-grid neighbour of `coord` that has been visited.
    /// Off-grid directions were flagged when the cell was built.
    pub fn refresh_visited_neighbors(&mut self, coord: Coord) {
        let index = self.index_of(coord);

        for direction in Direction::iter() {
            let Some(neighbor) = self.neighbor(coord, direction) else {
                continue;
            };

            if self.cell(neighbor).visited {
                self.cells[index].visited_neighbors[direction.index()] = true;
            }
        }
    }

    /// Clears the wall on the `direction` side of `coord` and the facing wall
    /// of the neighbour, returning the neighbour. Returns `None`, leaving the
    /// grid untouched, if the direction leads off the grid.
    pub fn remove_wall_between(&mut self, coord: Coord, direction: Direction) -> Option<Coord> {
        let neighbor = self.neighbor(coord, direction)?;
        let index = self.index_of(coord);
        let neighbor_index = self.index_of(neighbor);

        self.cells[index].walls[direction.index()] = false;
        self.cells[neighbor_index].walls[direction.opposite().index()] = false;

        Some(neighbor)
    }

    /// Block map of the grid: `1` for wall, `0` for space, with cells at odd
    /// coordinates and the walls between them at the even ones.
    pub fn blocks(&self) -> Vec<Vec<u8>> {
        let width = 2 * self.cols + 1;
        let height = 2 * self.rows + 1;
        let mut blocks = vec![vec![1; width]; height];

        for coord in self.coords() {
            let (x, z) = coord.block();
            blocks[z][x] = 0;

            if self.is_open(coord, Direction::Right) {
                blocks[z][x + 1] = 0;
            }
            if self.is_open(coord, Direction::Bottom) {
                blocks[z + 1][x] = 0;
            }
        }

        blocks
    }

    pub fn log(&self) -> String {
        self.blocks()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&block| if block == 0 { SPACE_SYMBOL } else { WALL_SYMBOL })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions_face_each_other() {
        for direction in Direction::iter() {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_directions_are_indexed_clockwise_from_top() {
        let order: Vec<usize> = Direction::iter().map(Direction::index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_eq!(Direction::COUNT, 4);
        assert_eq!(Direction::Bottom.to_string(), "bottom");
    }

    #[test]
    fn test_edge_cells_treat_off_grid_neighbors_as_visited() {
        let grid = Grid::new(3, 2);

        let top_left = grid.cell(Coord::new(0, 0));
        assert!(top_left.is_neighbor_visited(Direction::Top));
        assert!(top_left.is_neighbor_visited(Direction::Left));
        assert!(!top_left.is_neighbor_visited(Direction::Right));
        assert!(!top_left.is_neighbor_visited(Direction::Bottom));
        assert_eq!(top_left.available_neighbors(), 2);

        let bottom_middle = grid.cell(Coord::new(1, 1));
        assert_eq!(
            bottom_middle.unvisited_directions(),
            vec![Direction::Top, Direction::Right, Direction::Left]
        );

        let bottom_right = grid.cell(Coord::new(2, 1));
        assert!(bottom_right.is_neighbor_visited(Direction::Right));
        assert!(bottom_right.is_neighbor_visited(Direction::Bottom));
    }

    #[test]
    fn test_single_cell_has_nowhere_to_go() {
        let grid = Grid::new(1, 1);
        let cell = grid.cell(Coord::new(0, 0));

        assert_eq!(cell.available_neighbors(), 0);
        assert!(cell.unvisited_directions().is_empty());
        assert_eq!(cell.walls(), [true; 4]);
        assert!(!cell.is_visited());
    }

    #[test]
    fn test_neighbor_stops_at_grid_edges() {
        let grid = Grid::new(2, 2);

        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::Top), None);
        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::Left), None);
        assert_eq!(grid.neighbor(Coord::new(1, 1), Direction::Right), None);
        assert_eq!(grid.neighbor(Coord::new(1, 1), Direction::Bottom), None);
        assert_eq!(
            grid.neighbor(Coord::new(0, 0), Direction::Right),
            Some(Coord::new(1, 0))
        );
        assert_eq!(
            grid.neighbor(Coord::new(0, 0), Direction::Bottom),
            Some(Coord::new(0, 1))
        );
    }

    #[test]
    fn test_remove_wall_between_clears_both_sides() {
        let mut grid = Grid::new(2, 2);

        let next = grid.remove_wall_between(Coord::new(1, 1), Direction::Top);

        assert_eq!(next, Some(Coord::new(1, 0)));
        assert!(grid.is_open(Coord::new(1, 1), Direction::Top));
        assert!(grid.is_open(Coord::new(1, 0), Direction::Bottom));
        assert!(!grid.is_open(Coord::new(1, 0), Direction::Left));
    }

    #[test]
    fn test_remove_wall_off_grid_changes_nothing() {
        let mut grid = Grid::new(2, 2);
        let before = grid.clone();

        assert_eq!(grid.remove_wall_between(Coord::new(0, 0), Direction::Left), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_refresh_only_flags_visited_neighbors() {
        let mut grid = Grid::new(3, 3);
        grid.visit(Coord::new(1, 0));
        grid.visit(Coord::new(2, 2));

        let center = Coord::new(1, 1);
        grid.refresh_visited_neighbors(center);

        let cell = grid.cell(center);
        assert!(cell.is_neighbor_visited(Direction::Top));
        assert!(!cell.is_neighbor_visited(Direction::Right));
        assert!(!cell.is_neighbor_visited(Direction::Bottom));
        assert!(!cell.is_neighbor_visited(Direction::Left));
        assert_eq!(cell.available_neighbors(), 3);
    }

    #[test]
    fn test_blocks_show_cells_and_open_walls() {
        let mut grid = Grid::new(2, 1);
        assert_eq!(
            grid.blocks(),
            vec![vec![1, 1, 1, 1, 1], vec![1, 0, 1, 0, 1], vec![1, 1, 1, 1, 1]]
        );

        grid.remove_wall_between(Coord::new(0, 0), Direction::Right);
        assert_eq!(
            grid.blocks(),
            vec![vec![1, 1, 1, 1, 1], vec![1, 0, 0, 0, 1], vec![1, 1, 1, 1, 1]]
        );
    }

    #[test]
    fn test_log_draws_walls_as_blocks() {
        let mut grid = Grid::new(1, 2);
        grid.remove_wall_between(Coord::new(0, 0), Direction::Bottom);

        let expected = ["██████", "██  ██", "██  ██", "██  ██", "██████"].join("\n");
        assert_eq!(grid.log(), expected);
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_coords_are_row_major() {
        let grid = Grid::new(2, 2);
        let coords: Vec<Coord> = grid.coords().collect();

        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
        for (index, coord) in coords.into_iter().enumerate() {
            assert_eq!(grid.index_of(coord), index);
        }
    }
}
