//! Results list component with filtering, display limits, and a debounced
//! remote fallback.
//!
//! This module exposes a generic `Model<M>` plus supporting traits and
//! submodules:
//! - `ItemDelegate`: controls row `render`, `height`, and `spacing`
//! - `Filter`: predicate over a model and the current filter text
//! - `Source`: a remote location plus fetcher, used when local filtering
//!   comes up empty
//! - Submodules: `defaultitem`, `filters`, `keys`, and `style`
//!
//! ## Render lifecycle
//!
//! [`Model::render`] recomputes the visible set (working-set order, filter
//! predicate, display limit) and makes the list visible. Completion is
//! reported with exactly one message: [`NotFoundMsg`] when the visible set is
//! empty, [`RenderedMsg`] otherwise.
//!
//! When the visible set is empty, a [`Source`] is configured, the caller
//! allowed server fallback, and the source's location differs from the last
//! successfully fetched one, the render instead schedules a debounced fetch.
//! Every render bumps a fetch tag, so a previously scheduled fetch becomes
//! stale and its [`DebounceMsg`] is dropped; at most one scheduled fetch is
//! ever live. A dispatched fetch is not cancellable; its result is applied
//! when the instance id still matches, replacing the working set on success
//! or surfacing a [`FetchFailedMsg`] on error.
//!
//! ## Selection
//!
//! The selection marker lives in visible-set space and moves with
//! wrap-around: `select_next` from the last row returns to the first, and
//! entering with no marker picks the first (or, for `select_previous`, the
//! last) row. The viewport scrolls only as far as needed to keep the marker
//! in view.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_autocomplete::list::{filters, Config, ValueFn};
//! use std::sync::Arc;
//!
//! let value: ValueFn<String> = Arc::new(|s: &String| s.clone());
//! let mut list = Config::from_value(value.clone())
//!     .with_items(vec!["Ann".to_string(), "Ben".to_string(), "Cara".to_string()])
//!     .with_filter(filters::substring(value))
//!     .build()
//!     .unwrap();
//!
//! list.set_filter_text("a");
//! let _cmd = list.render(false);
//! assert_eq!(list.len(), 2); // "Ann" and "Cara"
//! ```

/// Default single-line row delegate and its styles.
pub mod defaultitem;

/// Ready-made substring and fuzzy filter predicates.
pub mod filters;

/// Key bindings for focused-list navigation.
pub mod keys;

/// Container-level styling (frame, empty state).
pub mod style;

mod fetch;
mod filtering;
mod model;
mod rendering;
mod types;

/// The list model and its configuration builder.
pub use model::{Config, Model, DEFAULT_DELAY};

/// Fetch lifecycle messages emitted by the debounced remote fallback.
pub use fetch::{DebounceMsg, FetchFailedMsg, FetchedMsg};

/// Key binding configuration for focused-list navigation.
pub use keys::ListKeyMap;

/// Container-level styling configuration.
pub use style::ListStyles;

/// Core traits, function aliases, and error types.
pub use types::{
    ConfigError, FetchError, FetchFn, FetchFuture, Filter, ItemDelegate, SelectFn, Source, ValueFn,
};

/// Ready-to-use row rendering.
pub use defaultitem::{DefaultDelegate, DefaultItemStyles};

use crate::{help, key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// Reports a completed render pass with at least one visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMsg {
    /// Id of the list that rendered.
    pub id: usize,
    /// Number of rows in the visible set.
    pub count: usize,
}

/// Reports a completed render pass with an empty visible set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundMsg {
    /// Id of the list that rendered.
    pub id: usize,
}

impl<M: Clone + Send + 'static> Model<M> {
    /// Recomputes the visible rows and redraws.
    ///
    /// Any pending debounced fetch is cancelled first (tag bump). If the
    /// recomputed visible set is empty and `allow_server` is set, a
    /// configured [`Source`] whose location differs from the last successful
    /// fetch schedules the debounced fallback instead of completing; the
    /// render then completes when the fetch result arrives via
    /// [`update`](Model::update).
    ///
    /// Completion makes the list visible, clears the selection marker,
    /// rewinds the viewport, and emits [`NotFoundMsg`] or [`RenderedMsg`].
    pub fn render(&mut self, allow_server: bool) -> Option<Cmd> {
        self.fetch_tag += 1;
        self.apply_filter();

        if self.is_empty() && allow_server {
            if let Some(source) = &self.source {
                let location = source.locate(&self.filter_text);
                if self.last_fetched.as_deref() != Some(location.as_str()) {
                    return Some(self.schedule_fetch());
                }
            }
        }
        Some(self.complete_render())
    }

    /// Finishes a render pass: shows the list, resets selection and
    /// viewport, and reports the outcome with a single message.
    fn complete_render(&mut self) -> Cmd {
        self.visible = true;
        self.selected = None;
        self.viewport_start = 0;

        let id = self.id;
        let count = self.len();
        Box::pin(async move {
            if count == 0 {
                Some(Box::new(NotFoundMsg { id }) as Msg)
            } else {
                Some(Box::new(RenderedMsg { id, count }) as Msg)
            }
        })
    }

    /// Handles runtime messages addressed to this list.
    ///
    /// - [`DebounceMsg`]: dispatched into the remote fetch when the id
    ///   matches and the tag is current; a stale tag identifies a cancelled
    ///   timer and the message is dropped.
    /// - [`FetchedMsg`]: records the fetched location, replaces the working
    ///   set, and completes the pending render.
    /// - [`FetchFailedMsg`]: leaves all state untouched; the message itself
    ///   is the error surface.
    /// - [`KeyMsg`]: while focused, moves the selection via the keymap and
    ///   confirms the marked row on the select binding.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(debounce) = msg.downcast_ref::<DebounceMsg>() {
            if debounce.id == self.id && debounce.tag == self.fetch_tag {
                return self.dispatch_fetch();
            }
            return None;
        }

        if let Some(fetched) = msg.downcast_ref::<FetchedMsg<M>>() {
            if fetched.id == self.id {
                self.last_fetched = Some(fetched.location.clone());
                self.items = fetched.models.clone();
                self.apply_filter();
                return Some(self.complete_render());
            }
            return None;
        }

        if self.focused() {
            if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
                if self.keymap.cursor_up.matches(key_msg) {
                    self.select_previous();
                } else if self.keymap.cursor_down.matches(key_msg) {
                    self.select_next();
                } else if self.keymap.select.matches(key_msg) {
                    return self.confirm();
                }
            }
        }
        None
    }

    /// Invokes the select handler with the marked row.
    ///
    /// A no-op unless a row is marked and a handler is configured. The
    /// handler receives the model and its position within the visible set.
    pub fn confirm(&mut self) -> Option<Cmd> {
        let row = self.selected?;
        let index = *self.matches.get(row)?;
        let item = self.items.get(index)?;
        let on_select = self.on_select.as_ref()?;
        on_select(item, row)
    }
}

impl<M: 'static> Component for Model<M> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<M: 'static> help::KeyMap for Model<M> {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.select,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.select,
        ]]
    }
}
