//! Status line: the latest notice, or keybinding hints for the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::{StatusNotice, UiMode};

use super::text::truncate_with_ellipsis;
use crate::theme::styles;

pub struct StatusLine<'a> {
    mode: UiMode,
    notice: Option<&'a StatusNotice>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: UiMode, notice: Option<&'a StatusNotice>) -> Self {
        Self { mode, notice }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            UiMode::Browse => vec![
                ("\u{2190}\u{2191}\u{2193}\u{2192}", "Move"),
                ("Enter", "Details"),
                ("a", "Add to cart"),
                ("r", "Reload"),
                ("q", "Quit"),
            ],
            UiMode::Detail => vec![("Esc", "Close"), ("Ctrl+C", "Quit")],
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = match self.notice {
            Some(notice) => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    truncate_with_ellipsis(&notice.message, (area.width as usize).saturating_sub(12)),
                    styles::notice(notice.level),
                ),
                Span::styled("  [x] dismiss", styles::text_muted()),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, label) in self.hints() {
                    spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
                    spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
                }
                Line::from(spans)
            }
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
