use macroquad::prelude::*;
use strum::IntoEnumIterator;

use common::maze::{Cell, Coord, Direction, Snapshot};

use crate::config::ViewConfig;

const LINE_THICKNESS: f32 = 1.0;

pub fn draw_snapshot(snapshot: &Snapshot, view: &ViewConfig) {
    clear_background(view.background.color());

    let grid = snapshot.grid;
    let (w, h) = view.cell_size(grid.cols(), grid.rows());
    let wall_color = view.wall.color();

    for coord in grid.coords() {
        draw_cell_boundary(grid.cell(coord), coord, w, h, wall_color);
    }

    if !snapshot.finished {
        let rect = cursor_rect(snapshot.cursor, w, h);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, view.cursor.color());
    }
}

fn draw_cell_boundary(cell: &Cell, coord: Coord, w: f32, h: f32, color: Color) {
    for (direction, (start, end)) in Direction::iter().zip(cell_edges(coord, w, h)) {
        if cell.has_wall(direction) {
            draw_line(start.x, start.y, end.x, end.y, LINE_THICKNESS, color);
        }
    }
}

/// End points of the top, right, bottom and left edges of a cell, in that
/// order.
pub fn cell_edges(coord: Coord, w: f32, h: f32) -> [(Vec2, Vec2); 4] {
    let left = coord.i as f32 * w;
    let top = coord.j as f32 * h;
    let right = left + w;
    let bottom = top + h;

    [
        (vec2(left, top), vec2(right, top)),
        (vec2(right, top), vec2(right, bottom)),
        (vec2(left, bottom), vec2(right, bottom)),
        (vec2(left, top), vec2(left, bottom)),
    ]
}

/// The cursor fills its cell inside the wall lines.
pub fn cursor_rect(coord: Coord, w: f32, h: f32) -> Rect {
    Rect::new(
        coord.i as f32 * w + 1.0,
        coord.j as f32 * h + 1.0,
        w - 1.0,
        h - 1.0,
    )
}
