//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering with ratatui's
//! TestBackend.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use storefront_app::services::sample_products;
use storefront_app::state::AppState;
use storefront_app::store::ProductsAction;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wrapper around a TestBackend terminal with assertion helpers
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one line
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get the symbol of a specific cell
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Get all content as a string
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState with the sample catalog loaded
pub fn create_loaded_state() -> AppState {
    let mut state = AppState::new();
    state.catalog_name = "sample catalog".to_string();
    state.dispatch(ProductsAction::FetchSucceeded(sample_products()));
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_default_size() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(10, 2);
        term.draw_with(|frame| {
            frame.buffer_mut().set_string(0, 1, "hello", ratatui::style::Style::default());
        });
        assert!(term.line_contains(1, "hello"));
        assert!(!term.line_contains(0, "hello"));
        assert_eq!(term.cell_at(0, 1), Some("h"));
        assert_eq!(term.cell_at(20, 1), None);
    }

    #[test]
    fn test_loaded_state_has_cards() {
        let state = create_loaded_state();
        assert_eq!(state.cards.len(), 2);
    }
}
