//! Header bar widget
//!
//! Shows the app title, the catalog being browsed and the product count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct MainHeader<'a> {
    catalog_name: &'a str,
    product_count: Option<usize>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(catalog_name: &'a str, icons: IconSet) -> Self {
        Self {
            catalog_name,
            product_count: None,
            icons,
        }
    }

    /// Count shown once the catalog has loaded
    pub fn with_product_count(mut self, count: usize) -> Self {
        self.product_count = Some(count);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::raw(" "),
            Span::styled(self.icons.store(), styles::accent()),
            Span::raw(" "),
            Span::styled("Storefront", styles::accent_bold()),
        ];
        if !self.catalog_name.is_empty() {
            left.push(Span::styled(" / ", styles::text_muted()));
            left.push(Span::styled(self.catalog_name, styles::text_secondary()));
        }
        let left = Line::from(left);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        if let Some(count) = self.product_count {
            let right = Line::from(Span::styled(
                format!(
                    "{} product{} ",
                    count,
                    if count == 1 { "" } else { "s" }
                ),
                styles::text_muted(),
            ));
            let right_width = right.width() as u16;
            if left_width + right_width + 2 <= inner.width {
                buf.set_line(
                    inner.x + inner.width - right_width,
                    inner.y,
                    &right,
                    right_width,
                );
            }
        }
    }
}
