//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use storefront_app::config::IconMode;

/// Spinner frames for the loading indicator
const SPINNER_FRAMES: [&str; 4] = ["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"]; // ◐ ◓ ◑ ◒

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn cart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f07a}", // nf-fa-shopping_cart
            IconMode::Unicode => "\u{229e}",   // ⊞
        }
    }

    /// "In Stock" badge
    pub fn done(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    /// "Out Of Stock" badge
    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn store(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f54e}", // nf-fa-store
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn spinner(&self, frame: u64) -> &'static str {
        SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize]
    }
}
