use crate::state::{Marker, Snapshot};

const FOOD_CHAR: char = 'F';
const SNAKE_BODY_CHAR: char = 'X';
const EMPTY_CHAR: char = ' ';

fn marker_char(marker: Marker) -> char {
    match marker {
        Marker::Food => FOOD_CHAR,
        Marker::Body => SNAKE_BODY_CHAR,
        Marker::Empty => EMPTY_CHAR,
    }
}

/// Bordered text frame, one line per board row plus the top and bottom borders.
pub fn frame(snapshot: &Snapshot) -> Vec<String> {
    let width = snapshot.cells.first().map_or(0, |row| row.len());
    let rule = "═".repeat(width);

    let mut lines = Vec::with_capacity(snapshot.cells.len() + 2);
    lines.push(format!("╔{}╗", rule));
    for row in &snapshot.cells {
        let inner: String = row.iter().copied().map(marker_char).collect();
        lines.push(format!("║{}║", inner));
    }
    lines.push(format!("╚{}╝", rule));
    lines
}
