//! Product card widget
//!
//! One cell of the product grid: image placeholder, title, a few lines of
//! description, the price block and the cart control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use url::Url;

use storefront_app::card::{cart_control_enabled, cart_control_label};
use storefront_app::config::UiSettings;
use storefront_core::{format_price, PriceDisplay, ProductRecord};

use super::text::{truncate_with_ellipsis, wrap_truncated};
use crate::theme::{icons::IconSet, palette, styles};

/// Short label for an image URI: the host for absolute URLs, otherwise the
/// text itself. `None` when there is no image.
pub fn image_label(image: &str) -> Option<String> {
    if image.trim().is_empty() {
        return None;
    }
    let label = Url::parse(image)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| image.to_string());
    Some(label)
}

/// Spans for a price block.
///
/// Discounted prices show the base struck through next to the emphasized
/// special price. A plain price is struck only when `strike_plain` is set.
pub fn price_spans(
    display: PriceDisplay,
    currency_symbol: &str,
    strike_plain: bool,
) -> Vec<Span<'static>> {
    match display {
        PriceDisplay::Discounted { base, special } => vec![
            Span::styled(format_price(currency_symbol, base), styles::price_struck()),
            Span::raw(" "),
            Span::styled(
                format_price(currency_symbol, special),
                styles::price_emphasis(),
            ),
        ],
        PriceDisplay::Plain { base } => {
            let style = if strike_plain {
                styles::price_struck().fg(palette::TEXT_SECONDARY)
            } else {
                styles::price_emphasis()
            };
            vec![Span::styled(format_price(currency_symbol, base), style)]
        }
    }
}

pub struct ProductCard<'a> {
    product: &'a ProductRecord,
    ui: &'a UiSettings,
    icons: IconSet,
    focused: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a ProductRecord, ui: &'a UiSettings, icons: IconSet) -> Self {
        Self {
            product,
            ui,
            icons,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn image_line(&self, width: usize) -> Line<'static> {
        let label = image_label(&self.product.image).unwrap_or_else(|| "no image".to_string());
        let label = truncate_with_ellipsis(&label, width.saturating_sub(2));
        Line::from(vec![
            Span::styled(self.icons.image(), styles::text_muted()),
            Span::raw(" "),
            Span::styled(label, styles::text_muted()),
        ])
    }

    fn cart_line(&self) -> Line<'static> {
        let enabled = cart_control_enabled(self.product);
        let text = format!(
            " {} {} ",
            self.icons.cart(),
            cart_control_label(self.product)
        );
        Line::from(Span::styled(text, styles::cart_button(enabled)))
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let description_lines = self.ui.description_lines as usize;

        let mut rows: Vec<Line> = Vec::with_capacity(description_lines + 4);
        rows.push(self.image_line(width));
        rows.push(Line::from(Span::styled(
            truncate_with_ellipsis(&self.product.name, width),
            styles::title(self.focused),
        )));

        // fixed description height keeps prices aligned across a row
        let mut description = wrap_truncated(&self.product.description, width, description_lines);
        description.resize(description_lines, String::new());
        rows.extend(
            description
                .into_iter()
                .map(|text| Line::from(Span::styled(text, styles::text_secondary()))),
        );

        rows.push(Line::from(price_spans(
            self.product.price_display(),
            &self.ui.currency_symbol,
            self.ui.strike_plain_price,
        )));
        rows.push(self.cart_line());

        for (offset, line) in rows.into_iter().enumerate() {
            let y = inner.y + offset as u16;
            if y >= inner.bottom() {
                break;
            }
            line.render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use insta::assert_snapshot;
    use ratatui::style::Modifier;
    use storefront_app::config::IconMode;
    use storefront_app::services::sample_products;

    fn unicode() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn phone() -> ProductRecord {
        sample_products().remove(0)
    }

    fn laptop() -> ProductRecord {
        sample_products().remove(1)
    }

    fn find(term: &TestTerminal, text: &str) -> Option<(u16, u16)> {
        let buffer = term.buffer();
        for y in 0..buffer.area.height {
            let line: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            if let Some(byte_pos) = line.find(text) {
                let x = line[..byte_pos].chars().count() as u16;
                return Some((x, y));
            }
        }
        None
    }

    #[test]
    fn test_image_label() {
        assert_eq!(
            image_label("https://cdn.example.com/a.png").as_deref(),
            Some("cdn.example.com")
        );
        assert_eq!(image_label("images/a.png").as_deref(), Some("images/a.png"));
        assert_eq!(image_label(""), None);
        assert_eq!(image_label("   "), None);
    }

    #[test]
    fn test_discounted_price_spans() {
        let spans = price_spans(PriceDisplay::new(100.0, Some(80.0)), "$", true);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "$100.00");
        assert!(spans[0].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(spans[2].content, "$80.00");
        assert!(!spans[2].style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_plain_price_strike_follows_setting() {
        let struck = price_spans(PriceDisplay::new(100.0, None), "$", true);
        assert_eq!(struck.len(), 1);
        assert!(struck[0].style.add_modifier.contains(Modifier::CROSSED_OUT));

        let plain = price_spans(PriceDisplay::new(100.0, Some(0.0)), "$", false);
        assert_eq!(plain.len(), 1);
        assert!(!plain[0].style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_card_renders_product_fields() {
        let ui = UiSettings::default();
        let product = phone();
        let mut term = TestTerminal::with_size(40, 9);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        assert!(term.buffer_contains("store.storeimages.cdn-apple.com"));
        assert!(term.buffer_contains("Iphone 17 pro max"));
        assert!(term.buffer_contains("\u{20b9}113000.00 \u{20b9}92499.99"));
        assert!(term.buffer_contains("Add to cart"));
    }

    #[test]
    fn test_card_base_price_struck_when_discounted() {
        let ui = UiSettings::default();
        let product = phone();
        let mut term = TestTerminal::with_size(40, 9);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        let (x, y) = find(&term, "\u{20b9}113000.00").unwrap();
        assert!(term.buffer()[(x, y)]
            .modifier
            .contains(Modifier::CROSSED_OUT));
        let (x, y) = find(&term, "\u{20b9}92499.99").unwrap();
        assert!(!term.buffer()[(x, y)]
            .modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_card_plain_price_struck_by_default() {
        let ui = UiSettings::default();
        let product = ProductRecord::new(1, "Mug").with_price(250.0).with_quantity(2);
        let mut term = TestTerminal::with_size(30, 9);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        let (x, y) = find(&term, "\u{20b9}250.00").unwrap();
        assert!(term.buffer()[(x, y)]
            .modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_card_plain_price_unstruck_when_configured() {
        let ui = UiSettings {
            strike_plain_price: false,
            ..UiSettings::default()
        };
        let product = ProductRecord::new(1, "Mug").with_price(250.0).with_quantity(2);
        let mut term = TestTerminal::with_size(30, 9);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        let (x, y) = find(&term, "\u{20b9}250.00").unwrap();
        assert!(!term.buffer()[(x, y)]
            .modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_unavailable_card_shows_out_of_stock() {
        let ui = UiSettings::default();
        let product = laptop();
        let mut term = TestTerminal::with_size(40, 9);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        assert!(term.buffer_contains("Out of stock"));
        assert!(!term.buffer_contains("Add to cart"));
        let (x, y) = find(&term, "Out of stock").unwrap();
        assert_eq!(term.buffer()[(x, y)].bg, palette::BUTTON_DISABLED_BG);
    }

    #[test]
    fn test_description_is_truncated() {
        let ui = UiSettings {
            description_lines: 1,
            ..UiSettings::default()
        };
        let product = phone();
        let mut term = TestTerminal::with_size(40, 7);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        assert!(term.buffer_contains("\u{2026}"));
        assert!(!term.buffer_contains("battery"));
    }

    #[test]
    fn test_focused_card_uses_active_border() {
        let ui = UiSettings::default();
        let product = phone();
        let mut term = TestTerminal::with_size(40, 9);

        term.render_widget(
            ProductCard::new(&product, &ui, unicode()).focused(true),
            term.area(),
        );

        assert_eq!(term.buffer()[(0, 0)].fg, palette::BORDER_ACTIVE);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let ui = UiSettings::default();
        let product = phone();
        let mut term = TestTerminal::with_size(3, 2);
        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());
    }

    #[test]
    fn snapshot_product_card() {
        let ui = UiSettings::default();
        let product = ProductRecord::new(7, "Desk Lamp")
            .with_image("https://img.shop.test/lamp.png")
            .with_description("Warm light for late night reading")
            .with_quantity(4)
            .with_price(1200.0)
            .with_special_price(999.5);
        let mut term = TestTerminal::with_size(24, 9);

        term.render_widget(ProductCard::new(&product, &ui, unicode()), term.area());

        assert_snapshot!("product_card", term.content());
    }
}
