//! View rendering for list components.
//!
//! Composes the visible rows (or the empty-state text) inside the frame.
//! A hidden list renders the empty string so the host can embed `view()`
//! output unconditionally.

use super::Model;

impl<M: 'static> Model<M> {
    /// Renders the list.
    ///
    /// While hidden this is the empty string. Otherwise the frame wraps
    /// either the delegate-rendered rows inside the viewport window or the
    /// "no matches" text when the visible set is empty.
    pub fn view(&self) -> String {
        if !self.visible {
            return String::new();
        }

        let body = if self.is_empty() {
            self.styles.no_items.clone().render("No matches.")
        } else {
            self.view_rows()
        };

        self.styles
            .frame
            .clone()
            .width(self.width as i32)
            .render(&body)
    }

    /// Renders the rows inside the viewport window, with delegate spacing
    /// between them.
    fn view_rows(&self) -> String {
        let end = (self.viewport_start + self.height).min(self.matches.len());
        let spacing = self.delegate.spacing();

        let mut rows = Vec::new();
        for row in self.viewport_start..end {
            let index = self.matches[row];
            if let Some(item) = self.items.get(index) {
                rows.push(self.delegate.render(self, row, item));
                for _ in 0..spacing {
                    rows.push(String::new());
                }
            }
        }

        // Drop trailing spacing lines so the frame hugs the last row.
        while rows.last().map(|r| r.is_empty()).unwrap_or(false) {
            rows.pop();
        }
        rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::super::{filters, Config};
    use crate::list::types::ValueFn;
    use std::sync::Arc;

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap_or_default()
    }

    fn value() -> ValueFn<String> {
        Arc::new(|s: &String| s.clone())
    }

    #[test]
    fn hidden_list_renders_nothing() {
        let list = Config::from_value(value())
            .with_items(vec!["Ann".to_string()])
            .build()
            .unwrap();
        assert_eq!(list.view(), "");
    }

    #[test]
    fn view_shows_matching_rows_only() {
        let mut list = Config::from_value(value())
            .with_items(vec!["Ann".into(), "Ben".into(), "Cara".into()])
            .with_filter(filters::substring(value()))
            .build()
            .unwrap();
        list.set_filter_text("a");
        let _ = list.render(false);

        let text = strip(&list.view());
        assert!(text.contains("Ann"));
        assert!(text.contains("Cara"));
        assert!(!text.contains("Ben"));
    }

    #[test]
    fn empty_visible_set_shows_no_matches_text() {
        let mut list = Config::from_value(value())
            .with_items(vec!["Ann".into()])
            .with_filter(filters::substring(value()))
            .build()
            .unwrap();
        list.set_filter_text("zz");
        let _ = list.render(false);

        assert!(strip(&list.view()).contains("No matches."));
    }

    #[test]
    fn viewport_limits_rendered_rows() {
        let mut list = Config::from_value(value())
            .with_items((0..10).map(|i| format!("row{}", i)).collect())
            .with_height(3)
            .build()
            .unwrap();
        let _ = list.render(false);

        let text = strip(&list.view());
        assert!(text.contains("row0"));
        assert!(text.contains("row2"));
        assert!(!text.contains("row3"));
    }
}
