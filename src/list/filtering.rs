//! Match recomputation and selection movement for list components.
//!
//! This module keeps the list's *matches* (the indices of working-set items
//! passing the filter under the current filter text, truncated to the display
//! limit) consistent with its inputs, and moves the selection marker through
//! that set with wrap-around plus a minimal-scroll viewport adjustment.

use super::Model;

impl<M: 'static> Model<M> {
    /// Recomputes the visible rows from the working set, the filter
    /// predicate, the current filter text, and the display limit.
    ///
    /// Matches preserve working-set order. The selection marker survives only
    /// while it still points at a row; the viewport is re-clamped afterwards.
    pub(super) fn apply_filter(&mut self) {
        let mut matches: Vec<usize> = match &self.filter {
            Some(filter) => self
                .items
                .iter()
                .enumerate()
                .filter(|&(_, item)| filter(item, &self.filter_text))
                .map(|(index, _)| index)
                .collect(),
            None => (0..self.items.len()).collect(),
        };
        if let Some(limit) = self.limit {
            matches.truncate(limit);
        }
        self.matches = matches;

        if let Some(row) = self.selected {
            if row >= self.matches.len() {
                self.selected = None;
            }
        }
        self.sync_viewport();
    }

    /// Places the selection marker on `row`, or clears it.
    ///
    /// An out-of-range row clears the marker rather than clamping to an
    /// arbitrary neighbor.
    pub fn select(&mut self, row: Option<usize>) {
        self.selected = row.filter(|&r| r < self.matches.len());
        self.sync_viewport();
    }

    /// Moves the selection marker one row down, wrapping from the last row to
    /// the first. With no marker set, selects the first row.
    pub fn select_next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(row) => (row + 1) % self.matches.len(),
        });
        self.sync_viewport();
    }

    /// Moves the selection marker one row up, wrapping from the first row to
    /// the last. With no marker set, selects the last row.
    pub fn select_previous(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        self.selected = Some(match self.selected {
            None | Some(0) => last,
            Some(row) => row - 1,
        });
        self.sync_viewport();
    }

    /// Scrolls the viewport just far enough to keep the selected row visible.
    ///
    /// Scrolling happens only when the row's top or bottom edge falls outside
    /// the window; a row already in view never moves the viewport.
    pub(super) fn sync_viewport(&mut self) {
        if self.matches.is_empty() {
            self.viewport_start = 0;
            return;
        }

        if let Some(row) = self.selected {
            let viewport_end = self.viewport_start + self.height;
            if row >= viewport_end {
                self.viewport_start = row.saturating_sub(self.height - 1);
            }
            if row < self.viewport_start {
                self.viewport_start = row;
            }
        }

        let max_start = self.matches.len().saturating_sub(self.height);
        if self.viewport_start > max_start {
            self.viewport_start = max_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{filters, Config};
    use super::*;
    use crate::list::types::ValueFn;
    use std::sync::Arc;

    fn value() -> ValueFn<String> {
        Arc::new(|s: &String| s.clone())
    }

    fn list_of(names: &[&str]) -> Model<String> {
        Config::from_value(value())
            .with_items(names.iter().map(|n| n.to_string()).collect())
            .with_filter(filters::substring(value()))
            .build()
            .unwrap()
    }

    #[test]
    fn matches_preserve_collection_order() {
        let mut list = list_of(&["Ann", "Ben", "Cara"]);
        list.set_filter_text("a");
        assert_eq!(list.visible_indices(), &[0, 2]);
    }

    #[test]
    fn limit_truncates_matches() {
        let value = value();
        let mut list = Config::from_value(value.clone())
            .with_items(vec!["aa".into(), "ab".into(), "ac".into()])
            .with_filter(filters::substring(value))
            .with_limit(2)
            .build()
            .unwrap();
        list.set_filter_text("a");
        assert_eq!(list.len(), 2);
        assert_eq!(list.visible_indices(), &[0, 1]);
    }

    #[test]
    fn select_next_enters_at_first_row_and_wraps() {
        let mut list = list_of(&["Ann", "Ben", "Cara"]);
        assert_eq!(list.selected(), None);
        list.select_next();
        assert_eq!(list.selected(), Some(0));
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));
        list.select_next();
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn select_previous_enters_at_last_row_and_wraps() {
        let mut list = list_of(&["Ann", "Ben", "Cara"]);
        list.select_previous();
        assert_eq!(list.selected(), Some(2));
        list.select_previous();
        assert_eq!(list.selected(), Some(1));
        list.select_previous();
        list.select_previous();
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn selection_on_empty_list_is_a_noop() {
        let mut list = list_of(&[]);
        list.select_next();
        assert_eq!(list.selected(), None);
        list.select_previous();
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn viewport_scrolls_minimally() {
        let mut list = Config::from_value(value())
            .with_items((0..10).map(|i| format!("item {}", i)).collect())
            .with_height(3)
            .build()
            .unwrap();

        // Walking down within the window leaves the viewport alone.
        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));
        assert_eq!(list.viewport_start, 0);

        // One past the bottom edge scrolls a single row.
        list.select_next();
        assert_eq!(list.viewport_start, 1);

        // Jumping back above the top edge snaps the viewport to the row.
        list.select(Some(0));
        assert_eq!(list.viewport_start, 0);
    }

    #[test]
    fn wrap_to_top_rewinds_viewport() {
        let mut list = Config::from_value(value())
            .with_items((0..5).map(|i| format!("item {}", i)).collect())
            .with_height(2)
            .build()
            .unwrap();
        list.select(Some(4));
        assert_eq!(list.viewport_start, 3);
        list.select_next();
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.viewport_start, 0);
    }

    #[test]
    fn narrowing_filter_drops_stale_selection() {
        let mut list = list_of(&["Ann", "Ben", "Cara"]);
        list.select(Some(2));
        list.set_filter_text("ann");
        assert_eq!(list.len(), 1);
        assert_eq!(list.selected(), None);
    }
}
