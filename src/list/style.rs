//! Styling for the list component.
//!
//! `ListStyles` covers the container-level visuals: the frame drawn around the
//! dropdown and the message shown when no items match. Per-item styling lives
//! with the delegate that renders the rows (see
//! [`DefaultItemStyles`](super::DefaultItemStyles)).
//!
//! All defaults use `AdaptiveColor` so the component stays readable in both
//! light and dark terminal themes.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_autocomplete::list::style::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.frame = styles.frame.border_foreground(Color::from("#874BFD"));
//! styles.no_items = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#dddddd" })
//!     .italic(true);
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Unicode ellipsis character (…) appended to rows truncated to the list width.
pub const ELLIPSIS: &str = "…";

/// Styling for the container-level elements of a list.
///
/// The frame wraps the visible rows; `no_items` styles the placeholder text
/// rendered when the filtered set is empty. Row styling is owned by the
/// item delegate, not by this struct.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Style for the frame drawn around the visible rows.
    pub frame: Style,
    /// Style for the "no matches" placeholder text.
    pub no_items: Style,
}

impl Default for ListStyles {
    /// Creates default list styles with adaptive colors.
    ///
    /// The frame uses a subdued single-line border; the empty-state message is
    /// dimmed so it reads as a hint rather than content.
    fn default() -> Self {
        Self {
            frame: Style::new()
                .border_style(lipgloss::normal_border())
                .border_foreground(Color::from("240")),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_styles_render_text() {
        let styles = ListStyles::default();
        let rendered = styles.no_items.render("No matches");
        assert!(rendered.contains("No matches"));
    }
}
