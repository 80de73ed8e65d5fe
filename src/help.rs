//! Help view generated from key bindings.
//!
//! Renders either a compact single-line summary of a widget's key bindings
//! ("↑ up • ↓ down • esc close") or an expanded multi-column layout, driven
//! entirely by a [`KeyMap`] implementation. Disabled bindings are skipped and
//! output is truncated with an ellipsis when a width limit is set.
//!
//! The widget keymaps in this crate ([`ListKeyMap`](crate::list::ListKeyMap),
//! [`AutocompleteKeyMap`](crate::autocomplete::AutocompleteKeyMap)) implement
//! [`KeyMap`], so a help line for either widget is one call away:
//!
//! ```rust
//! use bubbletea_autocomplete::help;
//! use bubbletea_autocomplete::list::ListKeyMap;
//!
//! let help = help::Model::new().with_width(60);
//! let line = help.view(&ListKeyMap::default());
//! assert!(!line.is_empty());
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

pub use crate::key::KeyMap;

/// Styling for the help view elements.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the ellipsis shown when content is truncated.
    pub ellipsis: Style,
    /// Style for key labels in the short view.
    pub short_key: Style,
    /// Style for descriptions in the short view.
    pub short_desc: Style,
    /// Style for the separator between short view items.
    pub short_separator: Style,
    /// Style for key labels in the full view.
    pub full_key: Style,
    /// Style for descriptions in the full view.
    pub full_desc: Style,
    /// Style for the separator between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let keys = dim("#909090", "#626262");
        let descriptions = dim("#B2B2B2", "#4A4A4A");
        let separators = dim("#DDDADA", "#3C3C3C");
        Self {
            ellipsis: separators.clone(),
            short_key: keys.clone(),
            short_desc: descriptions.clone(),
            short_separator: separators.clone(),
            full_key: keys,
            full_desc: descriptions,
            full_separator: separators,
        }
    }
}

/// Adaptive gray foreground, legible on light and dark backgrounds alike.
fn dim(light: &'static str, dark: &'static str) -> Style {
    Style::new().foreground(lipgloss::AdaptiveColor {
        Light: light,
        Dark: dark,
    })
}

/// Renders `text` through `style` restricted to a single line.
fn styled(style: &Style, text: &str) -> String {
    style.clone().inline(true).render(text)
}

/// The help view state: display mode, width limit, separators, and styles.
#[derive(Debug, Clone)]
pub struct Model {
    /// Toggles between the short (single-line) and full (multi-column) view.
    pub show_all: bool,
    /// Maximum width in cells. `0` disables truncation.
    pub width: usize,
    /// Separator between items in the short view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Marker appended when content is truncated.
    pub ellipsis: String,
    /// Visual styling.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".into(),
            full_separator: "    ".into(),
            ellipsis: "…".into(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum render width, builder-style.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders help for the given keymap in the current display mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders the compact single-line view: `key desc • key desc …`.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = styled(&self.styles.short_separator, &self.short_separator);
        let mut line = String::new();
        let mut used = 0;

        for binding in bindings.iter().filter(|b| b.enabled()) {
            let help = binding.help();
            let mut entry = String::new();
            if used > 0 {
                entry.push_str(&separator);
            }
            entry.push_str(&styled(&self.styles.short_key, &help.key));
            entry.push(' ');
            entry.push_str(&styled(&self.styles.short_desc, &help.desc));

            let entry_width = lipgloss::width_visible(&entry);
            if let Some(marker) = self.overflow_marker(used, entry_width) {
                line.push_str(&marker);
                break;
            }
            used += entry_width;
            line.push_str(&entry);
        }
        line
    }

    /// Renders the expanded view: one column per binding group, rows of
    /// `key desc`, columns joined side by side.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = styled(&self.styles.full_separator, &self.full_separator);
        let mut columns: Vec<String> = Vec::new();
        let mut used = 0;

        for group in groups.iter().filter(|g| should_render_column(g)) {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        styled(&self.styles.full_key, &help.key),
                        styled(&self.styles.full_desc, &help.desc)
                    )
                })
                .collect();

            let column = rows.join("\n");
            let column_width = lipgloss::width_visible(&column);
            if let Some(marker) = self.overflow_marker(used, column_width) {
                if !marker.is_empty() {
                    columns.push(marker);
                }
                break;
            }
            used += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::with_capacity(columns.len() * 2);
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Returns the styled ellipsis (or an empty string when even that would
    // not fit) once the next entry overflows the width limit, None otherwise.
    fn overflow_marker(&self, used: usize, next_width: usize) -> Option<String> {
        if self.width == 0 || used + next_width <= self.width {
            return None;
        }
        let marker = format!(" {}", styled(&self.styles.ellipsis, &self.ellipsis));
        if used + lipgloss::width_visible(&marker) < self.width {
            Some(marker)
        } else {
            Some(String::new())
        }
    }
}

/// Reports whether a column has at least one enabled binding to show.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}
