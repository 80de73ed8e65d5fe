//! Key bindings for list navigation and selection.
//!
//! A focused list reacts to three bindings: move the selection up or down
//! (arrow keys plus the vim-style `k`/`j`) and confirm the highlighted row
//! with `enter`. Hosts can rebind any of them by replacing the fields on
//! [`ListKeyMap`] before wiring the list into their update loop.
//!
//! ```rust
//! use bubbletea_autocomplete::key::KeyMap;
//! use bubbletea_autocomplete::list::ListKeyMap;
//!
//! let keymap = ListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 3);
//! ```

use crate::key::{self, new_binding, with_help_str, with_keys_str, Binding};

/// Key bindings for list navigation and selection.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move selection up one item.
    pub cursor_up: Binding,
    /// Move selection down one item.
    pub cursor_down: Binding,
    /// Confirm the highlighted item.
    pub select: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: new_binding(vec![
                with_keys_str(&["up", "k"]),
                with_help_str("↑/k", "up"),
            ]),
            cursor_down: new_binding(vec![
                with_keys_str(&["down", "j"]),
                with_help_str("↓/j", "down"),
            ]),
            select: new_binding(vec![
                with_keys_str(&["enter"]),
                with_help_str("enter", "select"),
            ]),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.cursor_up, &self.cursor_down, &self.select]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;
    use crossterm::event::KeyCode;

    #[test]
    fn default_bindings_match_expected_keys() {
        let keymap = ListKeyMap::default();
        assert!(keymap.cursor_up.keys().iter().any(|k| k.code == KeyCode::Up));
        assert!(keymap
            .cursor_down
            .keys()
            .iter()
            .any(|k| k.code == KeyCode::Char('j')));
        assert!(keymap
            .select
            .keys()
            .iter()
            .any(|k| k.code == KeyCode::Enter));
    }

    #[test]
    fn short_help_lists_all_bindings() {
        let keymap = ListKeyMap::default();
        assert_eq!(keymap.short_help().len(), 3);
    }
}
