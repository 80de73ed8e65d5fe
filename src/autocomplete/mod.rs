//! Autocomplete widget: a text input with a filtered results overlay.
//!
//! The widget owns an [`input::Model`](crate::input::Model) and a
//! [`list::Model`](crate::list::Model) and keeps a snapshot of the collection
//! taken at construction. Every change to the input's text resets the list's
//! working set to that snapshot, applies the filter against the new term, and
//! re-renders the overlay; non-content keys (arrows, modifiers) never
//! re-trigger a search.
//!
//! ## Key handling
//!
//! Keys run through two stages. The interception stage sees the key first:
//! Escape dismisses the overlay, Enter and Tab accept the marked row (falling
//! through when nothing is marked), Down and Up move the selection with
//! wrap-around. Anything not intercepted reaches the input, after which the
//! text is compared against the previous term to decide whether to search
//! again.
//!
//! ## Composition
//!
//! [`Model::view`] returns only the input line and [`Model::overlay_view`]
//! only the results block (empty while hidden). The host lays the overlay out
//! underneath the input line itself, which keeps the widget free of any
//! global positioning state.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::Config;
//! use bubbletea_autocomplete::Component;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use std::sync::Arc;
//!
//! let mut search = Config::new()
//!     .with_collection(vec!["Ann".to_string(), "Ben".to_string(), "Cara".to_string()])
//!     .with_value(Arc::new(|name: &String| name.clone()))
//!     .build()
//!     .unwrap();
//! let _ = search.focus();
//!
//! search.update(Box::new(KeyMsg {
//!     key: KeyCode::Char('a'),
//!     modifiers: KeyModifiers::NONE,
//! }));
//! assert_eq!(search.term(), "a");
//! assert_eq!(search.list().len(), 2); // "Ann" and "Cara"
//! ```

/// Key bindings intercepted ahead of the input.
pub mod keys;

/// Key binding configuration for the interception stage.
pub use keys::AutocompleteKeyMap;

use crate::list::{
    self, filters, ConfigError, Filter, NotFoundMsg, RenderedMsg, SelectFn, Source, ValueFn,
};
use crate::{help, input, key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::time::Duration;

/// Where the widget is in its search cycle.
///
/// Transitions are keystroke-driven: text changing to a non-empty term moves
/// to [`Searching`](SearchState::Searching); clearing the term, dismissing
/// with Escape, or accepting a row moves back to
/// [`Idle`](SearchState::Idle). A render completing after a debounced fetch
/// re-enters `Searching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// The overlay is dismissed and no search is live.
    #[default]
    Idle,
    /// A search is live: the overlay is shown (or a fetch is pending) and
    /// next/previous cycle the selection marker.
    Searching,
}

/// Emitted when a row is accepted, carrying the chosen model.
#[derive(Debug, Clone)]
pub struct SelectedMsg<M> {
    /// The model of the accepted row.
    pub model: M,
}

/// Builder for [`Model`].
///
/// The value extractor is the only required option; [`build`](Config::build)
/// rejects a configuration without one. When no filter is supplied, the
/// default is a case-insensitive substring match of the extractor's output
/// against the live term.
pub struct Config<M: 'static> {
    collection: Vec<M>,
    value: Option<ValueFn<M>>,
    filter: Option<Filter<M>>,
    limit: Option<usize>,
    on_select: Option<SelectFn<M>>,
    source: Option<Source<M>>,
    delay: Option<Duration>,
    min_length: usize,
    placeholder: String,
    width: Option<usize>,
    height: Option<usize>,
}

impl<M: 'static> Default for Config<M> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            value: None,
            filter: None,
            limit: None,
            on_select: None,
            source: None,
            delay: None,
            min_length: 0,
            placeholder: String::new(),
            width: None,
            height: None,
        }
    }
}

impl<M: 'static> Config<M> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collection to snapshot at construction.
    pub fn with_collection(mut self, collection: Vec<M>) -> Self {
        self.collection = collection;
        self
    }

    /// Sets the value extractor used for filtering and for writing the
    /// accepted model back into the input. Required.
    pub fn with_value(mut self, value: ValueFn<M>) -> Self {
        self.value = Some(value);
        self
    }

    /// Replaces the default substring filter.
    pub fn with_filter(mut self, filter: Filter<M>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Caps how many matching rows the overlay shows.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Replaces the default accept behavior with a custom handler, invoked
    /// with the model and its row within the visible set.
    pub fn with_on_select(mut self, on_select: SelectFn<M>) -> Self {
        self.on_select = Some(on_select);
        self
    }

    /// Configures the remote fallback used when local filtering comes up
    /// empty.
    pub fn with_source(mut self, source: Source<M>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the debounce delay for the remote fallback.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the minimum term length before a remote fetch is allowed.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the input's placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the overlay width in columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the overlay height in rows.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Validates the configuration and builds the widget.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingValue`] without a value extractor, plus any
    /// rejection from the embedded list build (zero limit, zero height, zero
    /// delay with a source).
    pub fn build(self) -> Result<Model<M>, ConfigError>
    where
        M: Clone,
    {
        let value = self.value.ok_or(ConfigError::MissingValue)?;
        let filter = self
            .filter
            .unwrap_or_else(|| filters::substring(value.clone()));

        let mut list_config = list::Config::from_value(value.clone())
            .with_items(self.collection.clone())
            .with_filter(filter);
        if let Some(limit) = self.limit {
            list_config = list_config.with_limit(limit);
        }
        if let Some(on_select) = self.on_select.clone() {
            list_config = list_config.with_on_select(on_select);
        }
        if let Some(source) = self.source {
            list_config = list_config.with_source(source);
        }
        if let Some(delay) = self.delay {
            list_config = list_config.with_delay(delay);
        }
        if let Some(width) = self.width {
            list_config = list_config.with_width(width);
        }
        if let Some(height) = self.height {
            list_config = list_config.with_height(height);
        }
        let list = list_config.build()?;

        let mut input = input::Model::new();
        input.set_placeholder(&self.placeholder);
        let term = input.value();

        Ok(Model {
            input,
            list,
            snapshot: self.collection,
            term,
            state: SearchState::Idle,
            min_length: self.min_length,
            value,
            custom_select: self.on_select.is_some(),
            keymap: AutocompleteKeyMap::default(),
        })
    }
}

/// Autocomplete state: the owned input and list, the snapshot, and the
/// current term.
pub struct Model<M: 'static> {
    /// Key bindings for the interception stage.
    pub keymap: AutocompleteKeyMap,

    input: input::Model,
    list: list::Model<M>,
    snapshot: Vec<M>,
    term: String,
    state: SearchState,
    min_length: usize,
    value: ValueFn<M>,
    custom_select: bool,
}

impl<M: 'static> Model<M> {
    /// The current search state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The term the current results were produced for.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The currently marked model, if any.
    pub fn selected_item(&self) -> Option<&M> {
        self.list.selected_item()
    }

    /// Advances the selection marker, wrapping from the last row to the
    /// first.
    pub fn next(&mut self) {
        self.list.select_next();
    }

    /// Retreats the selection marker, wrapping from the first row to the
    /// last.
    pub fn previous(&mut self) {
        self.list.select_previous();
    }

    /// Dismisses the overlay. The selection marker is left as it is, so a
    /// later render continues from a clean slate while callers inspecting
    /// the marker still see it.
    pub fn blur(&mut self) {
        self.list.hide();
        self.state = SearchState::Idle;
    }

    /// The owned text input.
    pub fn input(&self) -> &input::Model {
        &self.input
    }

    /// Mutable access to the owned text input, for styling and sizing.
    pub fn input_mut(&mut self) -> &mut input::Model {
        &mut self.input
    }

    /// The owned results list.
    pub fn list(&self) -> &list::Model<M> {
        &self.list
    }

    /// Mutable access to the owned results list, for styling and sizing.
    pub fn list_mut(&mut self) -> &mut list::Model<M> {
        &mut self.list
    }

    /// Renders the input line.
    pub fn view(&self) -> String {
        self.input.view()
    }

    /// Renders the results overlay, or an empty string while it is hidden.
    /// The host draws this directly under the input line.
    pub fn overlay_view(&self) -> String {
        self.list.view()
    }
}

impl<M: Clone + Send + 'static> Model<M> {
    /// Routes a runtime message through the widget.
    ///
    /// Key messages are ignored while the input is unfocused. Otherwise they
    /// pass the interception stage first and, when unconsumed, reach the
    /// input; a resulting text change updates the term, resets the working
    /// set to the snapshot, and re-renders (with the remote fallback allowed
    /// once the term meets the minimum length). A term cleared to empty
    /// dismisses the overlay without rendering.
    ///
    /// Render completions reported by the owned list re-enter
    /// [`SearchState::Searching`] and advance the selection to the first
    /// row. All other messages are forwarded to the owned list and input.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.input.focused() {
                return None;
            }
            if let Some(consumed) = self.keydown(key_msg) {
                return consumed;
            }
            let input_cmd = self.input.update(msg);
            return self.handle_term_change().or(input_cmd);
        }

        if let Some(rendered) = msg.downcast_ref::<RenderedMsg>() {
            if rendered.id == self.list.id() && self.list.visible() {
                self.state = SearchState::Searching;
                self.list.select(Some(0));
                return None;
            }
        }

        if let Some(not_found) = msg.downcast_ref::<NotFoundMsg>() {
            if not_found.id == self.list.id() && self.list.visible() {
                self.state = SearchState::Searching;
                return None;
            }
        }

        let list_cmd = self.list.update(&msg);
        let input_cmd = self.input.update(msg);
        let follow = self.handle_term_change();
        list_cmd.or(follow).or(input_cmd)
    }

    /// The interception stage. `Some` means the key was consumed.
    fn keydown(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        if self.keymap.cancel.matches(key_msg) {
            self.blur();
            return Some(None);
        }
        if self.keymap.confirm.matches(key_msg) {
            if self.list.selected().is_some() {
                return Some(self.confirm());
            }
            return None;
        }
        if self.keymap.next.matches(key_msg) {
            self.next();
            return Some(None);
        }
        if self.keymap.previous.matches(key_msg) {
            self.previous();
            return Some(None);
        }
        None
    }

    /// Compares the input's text against the previous term and reacts to a
    /// change.
    fn handle_term_change(&mut self) -> Option<Cmd> {
        let text = self.input.value();
        if text == self.term {
            return None;
        }

        self.term = text;
        self.list.set_items(self.snapshot.clone());
        self.list.set_filter_text(&self.term);

        if self.term.is_empty() {
            self.list.hide();
            self.state = SearchState::Idle;
            return None;
        }

        self.state = SearchState::Searching;
        let allow_server = self.term.chars().count() >= self.min_length;
        self.list.render(allow_server)
    }

    /// Accepts the marked row.
    ///
    /// With a custom handler configured, confirmation routes through the
    /// list and the handler fully replaces the default behavior. The
    /// default dismisses the overlay, clears the marker, writes the model's
    /// extracted value into the input (keeping focus), and emits
    /// [`SelectedMsg`].
    fn confirm(&mut self) -> Option<Cmd> {
        if self.custom_select {
            return self.list.confirm();
        }

        let model = self.list.selected_item()?.clone();
        self.list.hide();
        self.list.select(None);
        self.state = SearchState::Idle;

        let extracted = (self.value)(&model);
        self.input.set_value(&extracted);
        self.term = extracted;

        Some(Box::pin(async move {
            Some(Box::new(SelectedMsg { model }) as Msg)
        }))
    }
}

impl<M: 'static> std::fmt::Debug for Model<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("term", &self.term)
            .field("state", &self.state)
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

impl<M: 'static> Component for Model<M> {
    fn focus(&mut self) -> Option<Cmd> {
        Some(self.input.focus())
    }

    fn blur(&mut self) {
        self.input.blur();
        self.list.hide();
        self.state = SearchState::Idle;
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

impl<M: 'static> help::KeyMap for Model<M> {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap.next,
            &self.keymap.previous,
            &self.keymap.confirm,
            &self.keymap.cancel,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.keymap.next, &self.keymap.previous],
            vec![&self.keymap.confirm, &self.keymap.cancel],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{FetchError, FetchFuture};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn value() -> ValueFn<String> {
        Arc::new(|s: &String| s.clone())
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn search(collection: &[&str]) -> Model<String> {
        let mut model = Config::new()
            .with_collection(names(collection))
            .with_value(value())
            .build()
            .unwrap();
        let _ = model.focus();
        model
    }

    fn counting_source(count: Arc<AtomicUsize>, models: Vec<String>) -> Source<String> {
        Source::fixed(
            "/models",
            Arc::new(move |_loc: String| -> FetchFuture<String> {
                count.fetch_add(1, Ordering::SeqCst);
                let models = models.clone();
                Box::pin(async move { Ok(models) })
            }),
        )
    }

    fn press(model: &mut Model<String>, key: KeyCode) -> Option<Cmd> {
        model.update(Box::new(KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn type_str(model: &mut Model<String>, text: &str) -> Option<Cmd> {
        let mut last = None;
        for ch in text.chars() {
            last = press(model, KeyCode::Char(ch));
        }
        last
    }

    async fn deliver(cmd: Cmd) -> Msg {
        cmd.await.expect("command produced no message")
    }

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s.as_bytes())).unwrap_or_default()
    }

    #[test]
    fn build_rejects_missing_value_extractor() {
        let err = Config::<String>::new().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue);
    }

    #[test]
    fn typing_filters_snapshot_case_insensitively() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        let cmd = type_str(&mut model, "a");

        assert!(cmd.is_some());
        assert_eq!(model.term(), "a");
        assert_eq!(model.state(), SearchState::Searching);
        assert!(model.list().visible());
        assert_eq!(model.list().visible_indices(), &[0, 2]);

        let overlay = strip(&model.overlay_view());
        assert!(overlay.contains("Ann"));
        assert!(overlay.contains("Cara"));
        assert!(!overlay.contains("Ben"));
    }

    #[test]
    fn unchanged_text_is_a_noop() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a");

        // Arrow-left reaches the input but leaves the text alone: no new
        // term, no reset, no re-render.
        assert!(press(&mut model, KeyCode::Left).is_none());
        assert_eq!(model.term(), "a");
        assert_eq!(model.state(), SearchState::Searching);
        assert!(model.list().visible());
        assert_eq!(model.list().visible_indices(), &[0, 2]);
    }

    #[test]
    fn unfocused_widget_ignores_keys() {
        let mut model = Config::new()
            .with_collection(names(&["Ann"]))
            .with_value(value())
            .build()
            .unwrap();

        assert!(press(&mut model, KeyCode::Char('a')).is_none());
        assert_eq!(model.term(), "");
        assert_eq!(model.state(), SearchState::Idle);
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a"); // Ann, Cara

        model.next();
        assert_eq!(model.selected_item(), Some(&"Ann".to_string()));
        model.next();
        assert_eq!(model.selected_item(), Some(&"Cara".to_string()));
        model.next();
        assert_eq!(model.selected_item(), Some(&"Ann".to_string()));

        model.previous();
        assert_eq!(model.selected_item(), Some(&"Cara".to_string()));
    }

    #[test]
    fn down_and_up_keys_drive_selection() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a");

        assert!(press(&mut model, KeyCode::Down).is_none());
        assert_eq!(model.list().selected(), Some(0));
        press(&mut model, KeyCode::Up);
        assert_eq!(model.list().selected(), Some(1));
    }

    #[tokio::test]
    async fn render_completion_marks_first_row() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        let cmd = type_str(&mut model, "a").expect("render command");

        let rendered = deliver(cmd).await;
        assert!(model.update(rendered).is_none());
        assert_eq!(model.list().selected(), Some(0));
        assert_eq!(model.state(), SearchState::Searching);
    }

    #[tokio::test]
    async fn enter_accepts_the_marked_row() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        let cmd = type_str(&mut model, "a").expect("render command");
        let rendered = deliver(cmd).await;
        model.update(rendered);

        let cmd = press(&mut model, KeyCode::Enter).expect("selected command");
        let msg = deliver(cmd).await;
        let selected = msg.downcast_ref::<SelectedMsg<String>>().unwrap();

        assert_eq!(selected.model, "Ann");
        assert_eq!(model.input().value(), "Ann");
        assert_eq!(model.term(), "Ann");
        assert!(!model.list().visible());
        assert_eq!(model.list().selected(), None);
        assert_eq!(model.state(), SearchState::Idle);
        assert!(model.focused());
    }

    #[tokio::test]
    async fn tab_accepts_like_enter() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a");
        model.list_mut().select(Some(1));

        let cmd = press(&mut model, KeyCode::Tab).expect("selected command");
        let msg = deliver(cmd).await;
        let selected = msg.downcast_ref::<SelectedMsg<String>>().unwrap();
        assert_eq!(selected.model, "Cara");
        assert_eq!(model.input().value(), "Cara");
    }

    #[test]
    fn enter_without_selection_falls_through() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a");

        assert!(press(&mut model, KeyCode::Enter).is_none());
        assert!(model.list().visible());
        assert_eq!(model.state(), SearchState::Searching);
        assert_eq!(model.input().value(), "a");
    }

    #[test]
    fn custom_select_handler_replaces_default() {
        let hits = Arc::new(AtomicUsize::new(0));
        let recorded = hits.clone();
        let mut model = Config::new()
            .with_collection(names(&["Ann", "Ben", "Cara"]))
            .with_value(value())
            .with_on_select(Arc::new(move |_model: &String, row: usize| {
                recorded.store(row + 1, Ordering::SeqCst);
                None
            }))
            .build()
            .unwrap();
        let _ = model.focus();
        type_str(&mut model, "a");
        model.list_mut().select(Some(1));

        assert!(press(&mut model, KeyCode::Enter).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        // The default write-back and dismissal did not run.
        assert_eq!(model.input().value(), "a");
        assert!(model.list().visible());
    }

    #[test]
    fn escape_dismisses_but_keeps_marker() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a");
        model.list_mut().select(Some(1));

        assert!(press(&mut model, KeyCode::Esc).is_none());
        assert!(!model.list().visible());
        assert_eq!(model.state(), SearchState::Idle);
        assert_eq!(model.list().selected(), Some(1));
        // The input itself keeps focus and its text.
        assert!(model.focused());
        assert_eq!(model.input().value(), "a");
    }

    #[test]
    fn clearing_the_term_dismisses_without_rendering() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut model = Config::new()
            .with_collection(names(&["Ann"]))
            .with_value(value())
            .with_source(counting_source(count.clone(), Vec::new()))
            .build()
            .unwrap();
        let _ = model.focus();
        type_str(&mut model, "a");
        assert!(model.list().visible());

        // No command at all comes back: no render, nothing scheduled.
        assert!(press(&mut model, KeyCode::Backspace).is_none());
        assert_eq!(model.term(), "");
        assert!(!model.list().visible());
        assert_eq!(model.state(), SearchState::Idle);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn search_state_follows_the_term() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        assert_eq!(model.state(), SearchState::Idle);

        type_str(&mut model, "a");
        assert_eq!(model.state(), SearchState::Searching);

        press(&mut model, KeyCode::Backspace);
        assert_eq!(model.state(), SearchState::Idle);

        type_str(&mut model, "b");
        assert_eq!(model.state(), SearchState::Searching);

        press(&mut model, KeyCode::Esc);
        assert_eq!(model.state(), SearchState::Idle);
    }

    #[tokio::test]
    async fn min_length_gates_the_remote_fallback() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut model = Config::new()
            .with_value(value())
            .with_source(counting_source(count.clone(), names(&["Zara"])))
            .with_delay(Duration::from_millis(1))
            .with_min_length(2)
            .build()
            .unwrap();
        let _ = model.focus();

        // One character: below the minimum, the render completes locally.
        let cmd = type_str(&mut model, "z").expect("render command");
        let msg = deliver(cmd).await;
        assert!(msg.downcast_ref::<NotFoundMsg>().is_some());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        // Two characters: the fetch is scheduled, dispatched, and applied.
        let cmd = type_str(&mut model, "a").expect("debounce command");
        let debounce = deliver(cmd).await;
        let cmd = model.update(debounce).expect("fetch command");
        let fetched = deliver(cmd).await;
        let cmd = model.update(fetched).expect("completion command");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let rendered = deliver(cmd).await;
        model.update(rendered);
        assert_eq!(model.selected_item(), Some(&"Zara".to_string()));
        assert_eq!(model.state(), SearchState::Searching);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_overlay_hidden() {
        let mut model = Config::new()
            .with_value(value())
            .with_source(Source::fixed(
                "/models",
                Arc::new(|_loc: String| -> FetchFuture<String> {
                    Box::pin(async { Err(FetchError("connection refused".into())) })
                }),
            ))
            .with_delay(Duration::from_millis(1))
            .build()
            .unwrap();
        let _ = model.focus();

        let cmd = type_str(&mut model, "zz").expect("debounce command");
        let debounce = deliver(cmd).await;
        let cmd = model.update(debounce).expect("fetch command");
        let failure = deliver(cmd).await;

        assert!(model.update(failure).is_none());
        assert!(!model.list().visible());
        assert_eq!(model.term(), "zz");
        assert_eq!(model.state(), SearchState::Searching);
    }

    #[test]
    fn renders_from_other_lists_are_ignored() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        type_str(&mut model, "a");

        let foreign: Msg = Box::new(RenderedMsg {
            id: model.list().id() + 1,
            count: 3,
        });
        assert!(model.update(foreign).is_none());
        assert_eq!(model.list().selected(), None);
    }

    #[test]
    fn overlay_view_is_empty_while_hidden() {
        let mut model = search(&["Ann", "Ben", "Cara"]);
        assert_eq!(model.overlay_view(), "");

        type_str(&mut model, "a");
        assert!(!model.overlay_view().is_empty());

        model.blur();
        assert_eq!(model.overlay_view(), "");
    }
}
