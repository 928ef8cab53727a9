//! Semantic style builders for the storefront theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use storefront_app::NoticeLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title(focused: bool) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        base.fg(palette::ACCENT)
    } else {
        base.fg(palette::TEXT_BRIGHT)
    }
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn notice(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => status_green(),
        NoticeLevel::Warning => status_yellow(),
        NoticeLevel::Error => status_red(),
    }
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Price styles ---

/// Base price that has been superseded (or is struck on cards)
pub fn price_struck() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Price the customer pays
pub fn price_emphasis() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Cart control ---
pub fn cart_button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::BUTTON_DISABLED_BG)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struck_price_is_crossed_out() {
        assert!(price_struck()
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
        assert!(!price_emphasis()
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_disabled_cart_button_is_dimmed() {
        assert_eq!(cart_button(false).fg, Some(palette::TEXT_MUTED));
        assert_eq!(cart_button(true).bg, Some(palette::BUTTON_BG));
    }

    #[test]
    fn test_notice_levels_map_to_status_colors() {
        assert_eq!(notice(NoticeLevel::Error).fg, Some(palette::STATUS_RED));
        assert_eq!(notice(NoticeLevel::Warning).fg, Some(palette::STATUS_YELLOW));
        assert_eq!(notice(NoticeLevel::Info).fg, Some(palette::STATUS_GREEN));
    }
}
