//! Status badge: a label followed by an icon on a colored background

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use storefront_app::StockStatus;

use crate::theme::{icons::IconSet, palette};

/// Pure presentational badge. Holds no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBadge<'a> {
    label: &'a str,
    icon: &'a str,
    bg: Color,
    fg: Color,
}

impl<'a> StatusBadge<'a> {
    pub fn new(label: &'a str, icon: &'a str, bg: Color, fg: Color) -> Self {
        Self {
            label,
            icon,
            bg,
            fg,
        }
    }

    /// "In Stock" (teal, done icon) or "Out Of Stock" (rose, close icon)
    pub fn for_stock(status: StockStatus, icons: IconSet) -> StatusBadge<'static> {
        match status {
            StockStatus::InStock => StatusBadge::new(
                status.label(),
                icons.done(),
                palette::BADGE_TEAL_BG,
                palette::BADGE_TEAL_FG,
            ),
            StockStatus::OutOfStock => StatusBadge::new(
                status.label(),
                icons.close(),
                palette::BADGE_ROSE_BG,
                palette::BADGE_ROSE_FG,
            ),
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn icon(&self) -> &str {
        self.icon
    }

    /// Columns the badge occupies: " label icon "
    pub fn width(&self) -> u16 {
        (self.label.width() + self.icon.width() + 3) as u16
    }

    fn style(&self) -> Style {
        Style::default()
            .bg(self.bg)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Widget for StatusBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let badge_area = Rect {
            width: self.width().min(area.width),
            height: 1,
            ..area
        };
        buf.set_style(badge_area, self.style());

        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(self.label),
            Span::raw(" "),
            Span::raw(self.icon),
            Span::raw(" "),
        ])
        .style(self.style());
        line.render(badge_area, buf);
    }
}
