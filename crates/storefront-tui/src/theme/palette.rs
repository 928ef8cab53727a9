//! Color palette for the storefront theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Detail view background

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Unfocused cards
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused card

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Cart control ---
pub const BUTTON_BG: Color = Color::Rgb(59, 130, 246); // blue-500
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(45, 51, 59);

// --- Status badges ---
pub const BADGE_TEAL_BG: Color = Color::Rgb(153, 246, 228); // teal-200
pub const BADGE_TEAL_FG: Color = Color::Rgb(19, 78, 74); // teal-900
pub const BADGE_ROSE_BG: Color = Color::Rgb(254, 205, 211); // rose-200
pub const BADGE_ROSE_FG: Color = Color::Rgb(190, 18, 60); // rose-700

// --- Effects ---
pub const SHADOW: Color = Color::Black;
