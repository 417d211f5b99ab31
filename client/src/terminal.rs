use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use common::maze::{SPACE_SYMBOL, Snapshot, WALL_SYMBOL};

use crate::{animation::Phase, config::ViewConfig};

pub const CURSOR_SYMBOL: &str = "▒▒";

/// Text rows for one frame: the maze's block map with the cursor marked.
pub fn frame_lines(snapshot: &Snapshot) -> Vec<String> {
    let cursor = (!snapshot.finished).then(|| snapshot.cursor.block());

    snapshot
        .grid
        .blocks()
        .iter()
        .enumerate()
        .map(|(z, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &block)| {
                    if cursor == Some((x, z)) {
                        CURSOR_SYMBOL
                    } else if block == 0 {
                        SPACE_SYMBOL
                    } else {
                        WALL_SYMBOL
                    }
                })
                .collect::<String>()
        })
        .collect()
}

pub fn status_line(phase: Phase) -> &'static str {
    match phase {
        Phase::Carving => "Carving... (space: new maze, q: quit)",
        Phase::Finished => "Done. (space: new maze, q: quit)",
    }
}

pub fn draw(
    out: &mut impl Write,
    snapshot: &Snapshot,
    view: &ViewConfig,
    phase: Phase,
) -> io::Result<()> {
    let lines = frame_lines(snapshot);

    queue!(
        out,
        SetBackgroundColor(view.background.terminal_color()),
        SetForegroundColor(view.wall.terminal_color())
    )?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }

    if !snapshot.finished {
        let (x, z) = snapshot.cursor.block();
        let column = x * WALL_SYMBOL.chars().count();
        queue!(
            out,
            MoveTo(column as u16, z as u16),
            SetForegroundColor(view.cursor.terminal_color()),
            Print(CURSOR_SYMBOL)
        )?;
    }

    queue!(
        out,
        ResetColor,
        MoveTo(0, lines.len() as u16 + 1),
        Clear(ClearType::CurrentLine),
        Print(status_line(phase))
    )?;

    out.flush()
}
