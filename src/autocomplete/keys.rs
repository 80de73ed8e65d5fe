//! Key bindings intercepted by the autocomplete before the input sees them.
//!
//! These cover dismissal, confirmation, and selection movement over the
//! results overlay. Any key that matches none of them falls through to the
//! owned text input.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::AutocompleteKeyMap;
//! use bubbletea_autocomplete::key::KeyMap;
//!
//! let keymap = AutocompleteKeyMap::default();
//! let help = keymap.short_help();
//! assert_eq!(help.len(), 4);
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for overlay dismissal, confirmation, and selection movement.
#[derive(Debug, Clone)]
pub struct AutocompleteKeyMap {
    /// Dismiss the results overlay.
    pub cancel: key::Binding,
    /// Accept the marked result.
    pub confirm: key::Binding,
    /// Advance the selection.
    pub next: key::Binding,
    /// Retreat the selection.
    pub previous: key::Binding,
}

impl Default for AutocompleteKeyMap {
    fn default() -> Self {
        Self {
            cancel: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "dismiss"),
            confirm: key::Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
                .with_help("enter/tab", "accept"),
            next: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "next"),
            previous: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "previous"),
        }
    }
}

impl key::KeyMap for AutocompleteKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cancel, &self.confirm, &self.next, &self.previous]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.next, &self.previous],
            vec![&self.confirm, &self.cancel],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;

    #[test]
    fn default_bindings_match_expected_keys() {
        let keymap = AutocompleteKeyMap::default();
        assert!(keymap.cancel.keys().iter().any(|k| k.code == KeyCode::Esc));
        assert!(keymap
            .confirm
            .keys()
            .iter()
            .any(|k| k.code == KeyCode::Enter));
        assert!(keymap.confirm.keys().iter().any(|k| k.code == KeyCode::Tab));
        assert!(keymap.next.keys().iter().any(|k| k.code == KeyCode::Down));
        assert!(keymap.previous.keys().iter().any(|k| k.code == KeyCode::Up));
    }

    #[test]
    fn full_help_groups_movement_and_actions() {
        let keymap = AutocompleteKeyMap::default();
        let columns = keymap.full_help();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].len(), 2);
        assert_eq!(columns[1].len(), 2);
    }
}
