//! Product list widget
//!
//! Shows exactly one of: the loading indicator, the error banner, or the
//! card grid with one card per product in catalog order.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::config::UiSettings;
use storefront_app::product_list::LOADING_TEXT;
use storefront_app::ListBranch;

use super::product_card::ProductCard;
use super::text::truncate_with_ellipsis;
use crate::layout::{card_grid, card_height};
use crate::theme::{icons::IconSet, styles};

pub struct ProductList<'a> {
    branch: ListBranch<'a>,
    ui: &'a UiSettings,
    icons: IconSet,
    columns: usize,
    focused: usize,
    animation_frame: u64,
}

impl<'a> ProductList<'a> {
    pub fn new(branch: ListBranch<'a>, ui: &'a UiSettings, icons: IconSet) -> Self {
        Self {
            branch,
            ui,
            icons,
            columns: 1,
            focused: 0,
            animation_frame: 0,
        }
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn focused(mut self, focused: usize) -> Self {
        self.focused = focused;
        self
    }

    pub fn animation_frame(mut self, frame: u64) -> Self {
        self.animation_frame = frame;
        self
    }

    fn render_centered(line: Line<'_>, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let y = area.y + area.height / 2;
        line.centered()
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.branch {
            ListBranch::Loading => {
                let line = Line::from(vec![
                    Span::styled(self.icons.spinner(self.animation_frame), styles::accent()),
                    Span::raw(" "),
                    Span::styled(LOADING_TEXT, styles::text_secondary()),
                ]);
                Self::render_centered(line, area, buf);
            }

            ListBranch::Error(message) => {
                let message =
                    truncate_with_ellipsis(message, (area.width as usize).saturating_sub(3));
                let line = Line::from(vec![
                    Span::styled(self.icons.warning(), styles::status_red()),
                    Span::raw(" "),
                    Span::styled(message, styles::status_red()),
                ]);
                Self::render_centered(line, area, buf);
            }

            ListBranch::Ready([]) => {
                let line = Line::from(Span::styled("No products", styles::text_muted()));
                Self::render_centered(line, area, buf);
            }

            ListBranch::Ready(products) => {
                let height = card_height(self.ui.description_lines);
                for (index, rect) in
                    card_grid(area, self.columns, products.len(), height, self.focused)
                {
                    ProductCard::new(&products[index], self.ui, self.icons)
                        .focused(index == self.focused)
                        .render(rect, buf);
                }
            }
        }
    }
}
