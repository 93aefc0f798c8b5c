#![cfg(feature = "std")]

//! Text rendering of boards.

use std::string::String;
use std::vec::Vec;

use crate::{Board, BoardView, Cell, ViewMode};

/// Character used for a cell.
pub fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss => '.',
        Cell::Margin => '-',
    }
}

/// Render a view as lines: a 1-based column header, then one line per row.
pub fn render_view(view: &BoardView) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.size() + 1);
    let mut header = String::from("   |");
    for c in 1..=view.size() {
        header.push_str(&format!("{:>2} |", c));
    }
    lines.push(header);
    for (r, row) in view.rows().enumerate() {
        let mut line = format!("{:>2} |", r + 1);
        for &cell in row {
            line.push_str(&format!(" {} |", cell_char(cell)));
        }
        lines.push(line);
    }
    lines
}

/// View mode matching the board's own hidden flag.
pub fn default_mode(board: &Board) -> ViewMode {
    if board.is_hidden() {
        ViewMode::Hidden
    } else {
        ViewMode::Revealed
    }
}

/// Render a board in its default mode.
pub fn render_board(board: &Board) -> String {
    render_view(&board.view(default_mode(board))).join("\n")
}

/// Two boards next to each other, each under its title.
pub fn render_side_by_side(left: (&str, &Board), right: (&str, &Board)) -> String {
    let l = render_view(&left.1.view(default_mode(left.1)));
    let r = render_view(&right.1.view(default_mode(right.1)));
    let width = l.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let gap = "    ";

    let mut out = format!("{:<width$}{gap}{}\n", left.0, right.0, width = width);
    for i in 0..l.len().max(r.len()) {
        let a = l.get(i).map(String::as_str).unwrap_or("");
        let b = r.get(i).map(String::as_str).unwrap_or("");
        // pad by chars; '■' is wider than one byte
        let pad = width - a.chars().count();
        out.push_str(a);
        out.push_str(&" ".repeat(pad));
        out.push_str(gap);
        out.push_str(b);
        out.push('\n');
    }
    out
}
