//! Width-aware text fitting for card and modal content

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '\u{2026}'; // …

/// Truncates text to `max_width` display columns, ending in an ellipsis when
/// anything was cut.
///
/// ```
/// # use storefront_tui::widgets::text::truncate_with_ellipsis;
/// assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
/// assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello W\u{2026}");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        text.to_string()
    } else {
        with_trailing_ellipsis(text, max_width)
    }
}

/// Cut `text` so that it plus an ellipsis fits `max_width`, then append the
/// ellipsis.
fn with_trailing_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap by display width. Words wider than a line are split.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current_width = 0;
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Word wrap limited to `max_lines`; the last kept line ends in an ellipsis
/// when text was dropped.
pub fn wrap_truncated(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }

    let mut lines = wrap_lines(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.pop() {
            lines.push(with_trailing_ellipsis(&last, width));
        }
    }
    lines
}
