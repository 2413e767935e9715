//! Styling for table output.
//!
//! A small bundle of per-region styles rendered through the `colored`
//! crate, plus display-width-aware truncation and alignment padding.

use colored::{Color, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Align;

/// Style applied to one region of the table (header, a row tone, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    /// Render bold.
    pub bold: bool,
    /// Render dimmed.
    pub dimmed: bool,
    /// Foreground color, if any.
    pub color: Option<Color>,
}

impl CellStyle {
    /// Creates an unstyled style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables bold (builder pattern).
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enables dimming (builder pattern).
    #[must_use]
    pub fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    /// Sets the foreground color (builder pattern).
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Renders `text` with this style applied.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut out = text.normal();
        if self.bold {
            out = out.bold();
        }
        if self.dimmed {
            out = out.dimmed();
        }
        if let Some(color) = self.color {
            out = out.color(color);
        }
        out.to_string()
    }
}

/// Styles for every table region.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    /// Header row.
    pub header: CellStyle,
    /// Default-tone data rows.
    pub row: CellStyle,
    /// Striped-tone data rows (every other row by default).
    pub stripe: CellStyle,
    /// Accent-tone rows picked out by a row classifier.
    pub accent: CellStyle,
    /// Critical-tone rows picked out by a row classifier.
    pub critical: CellStyle,
    /// Skeleton placeholder rows shown while loading.
    pub skeleton: CellStyle,
    /// The empty-state message row.
    pub empty: CellStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: CellStyle::new().bold(),
            row: CellStyle::new(),
            stripe: CellStyle::new().dimmed(),
            accent: CellStyle::new().color(Color::Cyan),
            critical: CellStyle::new().color(Color::Red),
            skeleton: CellStyle::new().dimmed(),
            empty: CellStyle::new().dimmed(),
        }
    }
}

/// Truncates `s` to the given display width, ending with an ellipsis when
/// anything was cut.
#[must_use]
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncates and pads `s` to exactly `width` display columns under the
/// given alignment.
#[must_use]
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let text = truncate(s, width);
    let gap = width.saturating_sub(UnicodeWidthStr::width(text.as_str()));
    match align {
        Align::Left => format!("{text}{}", " ".repeat(gap)),
        Align::Right => format!("{}{text}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_pad_alignments() {
        assert_eq!(pad("ab", 6, Align::Left), "ab    ");
        assert_eq!(pad("ab", 6, Align::Right), "    ab");
        assert_eq!(pad("ab", 6, Align::Center), "  ab  ");
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
    }

    #[test]
    fn test_pad_truncates_overlong() {
        assert_eq!(pad("overflowing", 4, Align::Left), "ove…");
    }

    #[test]
    fn test_render_plain_without_flags() {
        colored::control::set_override(false);
        let style = CellStyle::new().bold().dimmed();
        assert_eq!(style.render("text"), "text");
    }
}
