//! Product detail view widget
//!
//! A modal over the dimmed product grid. Everything it shows comes from the
//! card-resident selection handed in through [`DetailViewProps`]; it never
//! looks a product up on its own.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::DetailViewProps;

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use super::product_card::{image_label, price_spans};
use super::status_badge::StatusBadge;
use super::text::{truncate_with_ellipsis, wrap_truncated};
use crate::theme::{icons::IconSet, styles};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 16;

/// Rows above the description: image, price, badge, spacer
const HEADER_ROWS: u16 = 4;

pub struct ProductDetail<'a> {
    props: DetailViewProps<'a>,
    currency_symbol: &'a str,
    icons: IconSet,
}

impl<'a> ProductDetail<'a> {
    pub fn new(props: DetailViewProps<'a>, currency_symbol: &'a str, icons: IconSet) -> Self {
        Self {
            props,
            currency_symbol,
            icons,
        }
    }

    fn modal_rect(area: Rect) -> Rect {
        centered_rect(
            MODAL_WIDTH.min(area.width.saturating_sub(4)),
            MODAL_HEIGHT.min(area.height.saturating_sub(2)),
            area,
        )
    }

    fn render_line(line: Line<'_>, inner: Rect, row: u16, buf: &mut Buffer) {
        if row < inner.height {
            line.render(Rect::new(inner.x, inner.y + row, inner.width, 1), buf);
        }
    }
}

impl Widget for ProductDetail<'_> {
    /// Renders over `area`, which should be the whole screen
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.props.open {
            return;
        }

        dim_background(buf, area);

        let modal = Self::modal_rect(area);
        if modal.width < 3 || modal.height < 3 {
            return;
        }
        render_shadow(buf, modal);
        clear_area(buf, modal);

        let title = self.props.title();
        let title = if title.is_empty() {
            String::new()
        } else {
            format!(" {} ", truncate_with_ellipsis(title, modal.width.saturating_sub(4) as usize))
        };
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        if let Some(image) = self.props.image().and_then(image_label) {
            let line = Line::from(vec![
                Span::styled(self.icons.image(), styles::text_muted()),
                Span::raw(" "),
                Span::styled(
                    truncate_with_ellipsis(&image, width.saturating_sub(2)),
                    styles::text_muted(),
                ),
            ]);
            Self::render_line(line, inner, 0, buf);
        }

        // the detail view never strikes an undiscounted price
        if let Some(price) = self.props.price_display() {
            Self::render_line(
                Line::from(price_spans(price, self.currency_symbol, false)),
                inner,
                1,
                buf,
            );
        }

        if inner.height > 2 {
            let badge = StatusBadge::for_stock(self.props.stock_status(), self.icons);
            badge.render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);
        }

        // description fills what is left above the close hint
        let description_rows = inner.height.saturating_sub(HEADER_ROWS + 2) as usize;
        if let Some(description) = self.props.description() {
            for (i, text) in wrap_truncated(description, width, description_rows)
                .into_iter()
                .enumerate()
            {
                Self::render_line(
                    Line::from(Span::styled(text, styles::text_primary())),
                    inner,
                    HEADER_ROWS + i as u16,
                    buf,
                );
            }
        }

        let hint = Line::from(vec![
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" Close", styles::text_secondary()),
        ])
        .right_aligned();
        Self::render_line(hint, inner, inner.height - 1, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;
    use storefront_app::config::IconMode;
    use storefront_core::ProductRecord;

    fn unicode() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn phone() -> ProductRecord {
        ProductRecord::new(652, "Iphone 17 pro max")
            .with_image("https://cdn.example.com/iphone.png")
            .with_description("Advanced cameras and an all-day battery.")
            .with_quantity(10)
            .with_price(113000.0)
            .with_special_price(92499.99)
    }

    fn render(props: DetailViewProps<'_>) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(ProductDetail::new(props, "\u{20b9}", unicode()), term.area());
        term
    }

    fn cell_modifier(term: &TestTerminal, text: &str) -> Modifier {
        let buffer = term.buffer();
        for y in 0..buffer.area.height {
            let line: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            if let Some(pos) = line.find(text) {
                let x = line[..pos].chars().count() as u16;
                return buffer[(x, y)].modifier;
            }
        }
        panic!("{:?} not rendered", text);
    }

    #[test]
    fn test_closed_view_renders_nothing() {
        let product = phone();
        let term = render(DetailViewProps::new(false, Some(&product), true));
        assert!(!term.buffer_contains("Iphone"));
        assert!(!term.buffer_contains("Close"));
    }

    #[test]
    fn test_closed_empty_view_renders_blank_screen() {
        let term = render(DetailViewProps::new(false, None, false));

        let blank = term
            .content()
            .chars()
            .all(|c| c == ' ' || c == '\n');
        assert!(blank);
    }

    #[test]
    fn test_open_view_shows_selection() {
        let product = phone();
        let term = render(DetailViewProps::new(true, Some(&product), true));

        assert!(term.buffer_contains(" Iphone 17 pro max "));
        assert!(term.buffer_contains("cdn.example.com"));
        assert!(term.buffer_contains("all-day battery"));
        assert!(term.buffer_contains("In Stock \u{2713}"));
        assert!(term.buffer_contains("[Esc] Close"));
    }

    #[test]
    fn test_empty_product_renders_without_content() {
        let term = render(DetailViewProps::new(true, None, false));

        assert!(!term.buffer_contains("\u{20b9}"));
        assert!(term.buffer_contains("Out Of Stock \u{2717}"));
        assert!(term.buffer_contains("Close"));
    }

    #[test]
    fn test_badge_follows_supplied_flag_not_quantity() {
        // quantity says available, the card says otherwise
        let product = phone();
        let term = render(DetailViewProps::new(true, Some(&product), false));
        assert!(term.buffer_contains("Out Of Stock"));
    }

    #[test]
    fn test_discounted_price_strikes_base() {
        let product = phone();
        let term = render(DetailViewProps::new(true, Some(&product), true));

        assert!(cell_modifier(&term, "\u{20b9}113000.00").contains(Modifier::CROSSED_OUT));
        assert!(!cell_modifier(&term, "\u{20b9}92499.99").contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_plain_price_is_not_struck() {
        let product = ProductRecord::new(1, "Mug").with_price(250.0);
        let term = render(DetailViewProps::new(true, Some(&product), false));

        assert!(!cell_modifier(&term, "\u{20b9}250.00").contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let product = phone();
        let mut term = TestTerminal::with_size(6, 4);
        term.render_widget(
            ProductDetail::new(
                DetailViewProps::new(true, Some(&product), true),
                "\u{20b9}",
                unicode(),
            ),
            term.area(),
        );
    }
}
