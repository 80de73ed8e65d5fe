#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-autocomplete/")]

//! # bubbletea-autocomplete
//!
//! Autocomplete input and filtered results-list widgets for
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs) terminal
//! applications, styled with
//! [lipgloss-extras](https://github.com/whit3rabbit/lipgloss).
//!
//! Two widgets make up the crate:
//!
//! - [`list::Model`] renders the filtered, limited subset of a collection of
//!   models, moves a selection marker with wrap-around, and can fall back to
//!   a debounced remote fetch when local filtering comes up empty.
//! - [`autocomplete::Model`] binds a text input to a results overlay: typing
//!   re-filters a snapshot of the collection, Down/Up cycle the selection,
//!   and Enter or Tab write the accepted model's value back into the input.
//!
//! Both follow the Elm Architecture: the host forwards runtime messages into
//! `update`, splices `view` output into its own, and executes any returned
//! commands. Widget lifecycle events arrive back as plain messages
//! ([`RenderedMsg`], [`NotFoundMsg`], [`FetchFailedMsg`], [`SelectedMsg`])
//! that the host can also observe.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{Config, SelectedMsg};
//! use bubbletea_autocomplete::{Autocomplete, Component};
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use std::sync::Arc;
//!
//! struct App {
//!     search: Autocomplete<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut search = Config::new()
//!             .with_collection(vec![
//!                 "Ann".to_string(),
//!                 "Ben".to_string(),
//!                 "Cara".to_string(),
//!             ])
//!             .with_value(Arc::new(|name: &String| name.clone()))
//!             .with_placeholder("search names…")
//!             .build()
//!             .expect("valid configuration");
//!         let focus = search.focus();
//!         (Self { search }, focus)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(selected) = msg.downcast_ref::<SelectedMsg<String>>() {
//!             // React to the accepted model here.
//!             let _chosen = &selected.model;
//!         }
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n{}", self.search.view(), self.search.overlay_view())
//!     }
//! }
//! ```
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bubbletea-autocomplete = "0.1"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! For convenience, the most commonly used types are available through the
//! prelude:
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! ```

pub mod autocomplete;
pub mod cursor;
pub mod help;
pub mod input;
pub mod key;
pub mod list;

use bubbletea_rs::Cmd;

/// Focus management shared by the widgets.
///
/// A focused widget handles key input; a blurred one ignores it. `focus` may
/// return a command for focus side effects; the text input uses it to start
/// the caret blinking.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::{input, Component};
/// use bubbletea_rs::Cmd;
///
/// fn cycle<C: Component>(widget: &mut C) {
///     let _cmd: Option<Cmd> = widget.focus();
///     assert!(widget.focused());
///     widget.blur();
///     assert!(!widget.focused());
/// }
///
/// let mut field = input::Model::new();
/// cycle(&mut field);
/// ```
pub trait Component {
    /// Grants focus, optionally returning a command for focus side effects.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the widget currently has focus.
    fn focused(&self) -> bool;
}

pub use autocomplete::{
    AutocompleteKeyMap, Config as AutocompleteConfig, Model as Autocomplete, SearchState,
    SelectedMsg,
};
pub use cursor::Model as Cursor;
pub use help::Model as HelpModel;
pub use input::{InputKeyMap, Model as TextInput, PasteErrMsg, PasteMsg};
pub use key::{
    matches_binding, new_binding, with_disabled, with_help_str, with_keys, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use list::{
    Config as ListConfig, ConfigError, DefaultDelegate, DefaultItemStyles, FetchError,
    FetchFailedMsg, FetchFn, FetchFuture, FetchedMsg, Filter, ItemDelegate, ListKeyMap, ListStyles,
    Model as List, NotFoundMsg, RenderedMsg, SelectFn, Source, ValueFn, DEFAULT_DELAY,
};

/// Prelude re-exporting the most commonly used types.
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autocomplete::{
        AutocompleteKeyMap, Config as AutocompleteConfig, Model as Autocomplete, SearchState,
        SelectedMsg,
    };
    pub use crate::cursor::Model as Cursor;
    pub use crate::help::Model as HelpModel;
    pub use crate::input::{InputKeyMap, Model as TextInput, PasteErrMsg, PasteMsg};
    pub use crate::key::{
        matches_binding, new_binding, with_disabled, with_help_str, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::list::{
        Config as ListConfig, ConfigError, DefaultDelegate, DefaultItemStyles, FetchError,
        FetchFailedMsg, FetchFn, FetchFuture, FetchedMsg, Filter, ItemDelegate, ListKeyMap,
        ListStyles, Model as List, NotFoundMsg, RenderedMsg, SelectFn, Source, ValueFn,
        DEFAULT_DELAY,
    };
    pub use crate::Component;
}
