//! Default row delegate for list components.
//!
//! This module provides `DefaultDelegate`, a single-line row renderer that
//! covers the common case: show the item's display value, mark the selected
//! row with a gutter indicator, and underline the part of the value that
//! matches the current filter text.
//!
//! ## Styling
//!
//! `DefaultItemStyles` provides the styles involved:
//! - Normal and selected text styles
//! - The selection indicator drawn in the left gutter
//! - The underline applied to filter matches
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_autocomplete::list::DefaultDelegate;
//! use std::sync::Arc;
//!
//! let delegate: DefaultDelegate<String> = DefaultDelegate::new(Arc::new(|s: &String| s.clone()));
//! ```

use super::style::ELLIPSIS;
use super::types::ValueFn;
use super::{ItemDelegate, Model};
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` terminal columns, ending with an ellipsis
/// when anything was cut.
fn truncate_line(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Finds the first case-insensitive occurrence of `needle` in `haystack`,
/// returning the starting char index.
fn find_case_insensitive(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&start| {
        needle
            .iter()
            .zip(&haystack[start..])
            .all(|(n, h)| n.to_lowercase().eq(h.to_lowercase()))
    })
}

/// Renders `text` with the first case-insensitive occurrence of `term`
/// highlighted.
///
/// The three segments are each rendered with a complete style so the output
/// can be concatenated: the match segment inherits the base style plus the
/// highlight attributes, matching how filter matches are emphasized elsewhere.
fn highlight_match(text: &str, term: &str, base: &Style, highlight: &Style) -> String {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();

    let start = match find_case_insensitive(&chars, &needle) {
        Some(start) => start,
        None => return base.render(text),
    };
    let end = start + needle.len();

    let mut out = String::new();
    if start > 0 {
        let head: String = chars[..start].iter().collect();
        out.push_str(&base.render(&head));
    }
    let matched: String = chars[start..end].iter().collect();
    out.push_str(&base.clone().inherit(highlight.clone()).render(&matched));
    if end < chars.len() {
        let tail: String = chars[end..].iter().collect();
        out.push_str(&base.render(&tail));
    }
    out
}

/// Styling for the default single-line row in its various states.
///
/// The text styles carry only foreground attributes so that highlighted and
/// plain segments of a row can be rendered independently and concatenated.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Text style in the normal (unselected) state.
    pub normal: Style,
    /// Text style for the selected row.
    pub selected: Style,
    /// Style for the indicator drawn in the gutter of the selected row.
    pub indicator: Style,
    /// Attributes merged into the text style over the matched span.
    pub filter_match: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(Color::from("#dddddd")),
            selected: Style::new().foreground(Color::from("#EE6FF8")),
            indicator: Style::new().foreground(Color::from("#AD58B4")),
            filter_match: Style::new().underline(true),
        }
    }
}

/// Delegate that renders one single-line row per item.
///
/// The display value comes from the configured extractor; the selected row is
/// marked with a `│` indicator in a two-column gutter, and the span matching
/// the list's filter text is underlined.
pub struct DefaultDelegate<M: 'static> {
    /// Styling used for the different visual states.
    pub styles: DefaultItemStyles,
    value: ValueFn<M>,
}

impl<M: 'static> Clone for DefaultDelegate<M> {
    fn clone(&self) -> Self {
        Self {
            styles: self.styles.clone(),
            value: self.value.clone(),
        }
    }
}

impl<M: 'static> DefaultDelegate<M> {
    /// Creates a delegate that displays each item through `value`.
    pub fn new(value: ValueFn<M>) -> Self {
        Self {
            styles: DefaultItemStyles::default(),
            value,
        }
    }

    /// Replaces the delegate's styles.
    pub fn with_styles(mut self, styles: DefaultItemStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl<M: 'static> std::fmt::Debug for DefaultDelegate<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultDelegate")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

impl<M: 'static> ItemDelegate<M> for DefaultDelegate<M> {
    fn render(&self, m: &Model<M>, index: usize, item: &M) -> String {
        if m.width() == 0 {
            return String::new();
        }

        let s = &self.styles;
        let is_selected = m.selected() == Some(index);

        // The gutter takes two columns on every row so text stays aligned.
        let value = (self.value)(item);
        let text = truncate_line(&value, m.width().saturating_sub(2));

        let gutter = if is_selected {
            format!("{} ", s.indicator.render("│"))
        } else {
            "  ".to_string()
        };

        let base = if is_selected { &s.selected } else { &s.normal };
        let term = m.filter_text();
        let line = if term.is_empty() {
            base.render(&text)
        } else {
            highlight_match(&text, term, base, &s.filter_match)
        };

        format!("{}{}", gutter, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap_or_default()
    }

    #[test]
    fn truncates_wide_lines_with_ellipsis() {
        assert_eq!(truncate_line("hello world", 20), "hello world");
        assert_eq!(truncate_line("hello world", 5), "hell…");
        assert_eq!(truncate_line("hello", 0), "");
    }

    #[test]
    fn finds_substring_ignoring_case() {
        let hay: Vec<char> = "Grateful Dead".chars().collect();
        let needle: Vec<char> = "dead".chars().collect();
        assert_eq!(find_case_insensitive(&hay, &needle), Some(9));

        let missing: Vec<char> = "zz".chars().collect();
        assert_eq!(find_case_insensitive(&hay, &missing), None);
    }

    #[test]
    fn highlight_keeps_full_text() {
        let base = Style::new();
        let highlight = Style::new().underline(true);
        let out = highlight_match("Take Five", "five", &base, &highlight);
        assert_eq!(strip(&out), "Take Five");
    }

    #[test]
    fn unmatched_term_renders_plain() {
        let base = Style::new();
        let highlight = Style::new().underline(true);
        let out = highlight_match("Take Five", "ten", &base, &highlight);
        assert_eq!(strip(&out), "Take Five");
    }
}
