// Grid:
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_ROWS: usize = 50;

// Window:
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
pub const BORDER_PIXELS: u32 = 1; // Extra pixel so the right and bottom edges of the last cells are visible.
