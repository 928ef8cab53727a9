//! Screen layout definitions for the TUI
//!
//! Splits the screen into header, product area and status line, and places
//! product cards on a grid inside the product area.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, catalog name and product count
    pub header: Rect,

    /// Product list (loading indicator, error banner or card grid)
    pub content: Rect,

    /// Notice or keybinding hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Products
        Constraint::Length(1), // Status line
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Card height for a given number of description lines: borders, image
/// row, title, description, price block and cart control.
pub fn card_height(description_lines: u16) -> u16 {
    description_lines.saturating_add(6)
}

/// Place cards on a grid, scrolled by whole rows so that `focused` is
/// visible. Returns `(card index, rect)` for every card that fits.
pub fn card_grid(
    area: Rect,
    columns: usize,
    card_count: usize,
    card_height: u16,
    focused: usize,
) -> Vec<(usize, Rect)> {
    if card_count == 0 || area.width == 0 || area.height == 0 || card_height == 0 {
        return Vec::new();
    }

    let columns = columns.max(1);
    let visible_rows = (area.height / card_height).max(1) as usize;
    let focused_row = focused.min(card_count - 1) / columns;
    let first_row = focused_row.saturating_sub(visible_rows - 1);

    let column_rects = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
        .split(area);

    let mut placed = Vec::new();
    for row in 0..visible_rows {
        let y = area.y.saturating_add((row as u16).saturating_mul(card_height));
        let height = card_height.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        for (col, column) in column_rects.iter().enumerate() {
            let index = (first_row + row) * columns + col;
            if index >= card_count {
                return placed;
            }
            placed.push((index, Rect::new(column.x, y, column.width, height)));
        }
    }
    placed
}
