//! Model struct, configuration, and accessors for the list component.
//!
//! This module contains the primary `Model` struct along with the `Config`
//! builder that validates a list before it exists. Filtering, selection
//! movement, remote fetching, and rendering live in the sibling modules.

use super::defaultitem::DefaultDelegate;
use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{ConfigError, Filter, ItemDelegate, SelectFn, Source, ValueFn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

/// Returns a process-unique id for a list instance, used to address
/// asynchronous messages back to the instance that scheduled them.
pub(super) fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Default debounce delay before a remote fetch is dispatched.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

const DEFAULT_WIDTH: usize = 40;
const DEFAULT_HEIGHT: usize = 5;

/// Builder for [`Model`].
///
/// Collects the working set and view options, then validates them in
/// [`build`](Config::build). Invalid combinations (a display limit of zero, a
/// zero height, a zero debounce delay alongside a remote source) are rejected
/// with a [`ConfigError`] instead of surfacing later as a list that renders
/// nothing.
///
/// # Examples
///
/// ```
/// use bubbletea_autocomplete::list::Config;
/// use std::sync::Arc;
///
/// let list = Config::from_value(Arc::new(|s: &String| s.clone()))
///     .with_items(vec!["alpha".to_string(), "beta".to_string()])
///     .with_height(4)
///     .build()
///     .unwrap();
/// assert_eq!(list.len(), 2);
/// ```
pub struct Config<M: 'static> {
    items: Vec<M>,
    delegate: Arc<dyn ItemDelegate<M> + Send + Sync>,
    filter: Option<Filter<M>>,
    limit: Option<usize>,
    on_select: Option<SelectFn<M>>,
    source: Option<Source<M>>,
    delay: Duration,
    width: usize,
    height: usize,
}

impl<M: 'static> Config<M> {
    /// Creates a configuration rendering rows through `delegate`.
    pub fn new(delegate: impl ItemDelegate<M> + Send + Sync + 'static) -> Self {
        Self {
            items: Vec::new(),
            delegate: Arc::new(delegate),
            filter: None,
            limit: None,
            on_select: None,
            source: None,
            delay: DEFAULT_DELAY,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Creates a configuration with the default single-line delegate over
    /// `value`.
    ///
    /// This is the defaulted-template path: the extractor decides what each
    /// row displays and [`DefaultDelegate`] decides how it looks.
    pub fn from_value(value: ValueFn<M>) -> Self {
        Self::new(DefaultDelegate::new(value))
    }

    /// Sets the initial working set.
    pub fn with_items(mut self, items: Vec<M>) -> Self {
        self.items = items;
        self
    }

    /// Sets the filter predicate. Without one, every item passes.
    pub fn with_filter(mut self, filter: Filter<M>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Caps the number of rendered rows. Zero is rejected at build time.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the handler invoked when a row is confirmed. It receives the
    /// model and its position within the filtered set.
    pub fn with_on_select(mut self, on_select: SelectFn<M>) -> Self {
        self.on_select = Some(on_select);
        self
    }

    /// Binds the list to a remote source used as a fallback when local
    /// filtering finds nothing.
    pub fn with_source(mut self, source: Source<M>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the debounce delay before a fallback fetch fires.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the row width in terminal columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the number of visible rows.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Validates the configuration and constructs the list.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroLimit`] when the display limit is zero.
    /// - [`ConfigError::ZeroHeight`] when the visible height is zero.
    /// - [`ConfigError::ZeroDelay`] when a source is configured with a zero
    ///   debounce delay.
    pub fn build(self) -> Result<Model<M>, ConfigError> {
        if self.limit == Some(0) {
            return Err(ConfigError::ZeroLimit);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.source.is_some() && self.delay.is_zero() {
            return Err(ConfigError::ZeroDelay);
        }

        let mut model = Model {
            items: self.items,
            delegate: self.delegate,
            filter: self.filter,
            filter_text: String::new(),
            limit: self.limit,
            on_select: self.on_select,
            source: self.source,
            delay: self.delay,
            last_fetched: None,
            matches: Vec::new(),
            selected: None,
            viewport_start: 0,
            visible: false,
            focus: false,
            width: self.width,
            height: self.height,
            id: next_id(),
            fetch_tag: 0,
            styles: ListStyles::default(),
            keymap: ListKeyMap::default(),
        };
        model.apply_filter();
        Ok(model)
    }
}

/// A filtered, selectable results list.
///
/// The list owns an ordered working set of models and keeps a set of
/// *matches*: the indices of items passing the filter predicate under the
/// current filter text, truncated to the display limit. Rows, the selection
/// marker, and the viewport all live in match space: index 0 is the first
/// visible row, regardless of where that item sits in the working set.
///
/// Construction goes through [`Config`]; the widget lifecycle (rendering,
/// debounced remote fallback, message handling) is driven by
/// [`render`](Model::render), [`update`](Model::update), and
/// [`view`](Model::view).
pub struct Model<M: 'static> {
    pub(super) items: Vec<M>,
    pub(super) delegate: Arc<dyn ItemDelegate<M> + Send + Sync>,
    pub(super) filter: Option<Filter<M>>,
    pub(super) filter_text: String,
    pub(super) limit: Option<usize>,
    pub(super) on_select: Option<SelectFn<M>>,
    pub(super) source: Option<Source<M>>,
    pub(super) delay: Duration,
    pub(super) last_fetched: Option<String>,

    pub(super) matches: Vec<usize>,
    pub(super) selected: Option<usize>,
    pub(super) viewport_start: usize,
    pub(super) visible: bool,
    pub(super) focus: bool,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) id: usize,
    pub(super) fetch_tag: usize,

    /// Styling for the frame and the empty state.
    pub styles: ListStyles,
    /// Key bindings used while the list has focus.
    pub keymap: ListKeyMap,
}

impl<M: 'static> Model<M> {
    /// This instance's id, carried by every message it emits.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of rows in the visible (filtered and limited) set.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the visible set has no rows.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The full working set, unfiltered.
    pub fn items(&self) -> &[M] {
        &self.items
    }

    /// Indices into the working set for each visible row, in row order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.matches
    }

    /// The current filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Position of the selection marker within the visible set.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The currently marked model, if any.
    pub fn selected_item(&self) -> Option<&M> {
        self.selected
            .and_then(|row| self.matches.get(row))
            .and_then(|&index| self.items.get(index))
    }

    /// Whether the list is currently shown. [`view`](Model::view) renders the
    /// empty string while hidden.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Hides the list without touching the selection marker.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Row width in terminal columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets the row width in terminal columns.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Sets the number of visible rows, keeping at least one.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.sync_viewport();
    }

    /// The source location of the last successful fetch, if any.
    pub fn last_fetched(&self) -> Option<&str> {
        self.last_fetched.as_deref()
    }

    /// Replaces the working set and recomputes the visible rows.
    ///
    /// The selection marker is kept only if it still points at a row.
    pub fn set_items(&mut self, items: Vec<M>) {
        self.items = items;
        self.apply_filter();
    }

    /// Sets the filter text and recomputes the visible rows.
    pub fn set_filter_text(&mut self, text: &str) {
        self.filter_text = text.to_string();
        self.apply_filter();
    }
}

impl<M: 'static> std::fmt::Debug for Model<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("len", &self.matches.len())
            .field("selected", &self.selected)
            .field("visible", &self.visible)
            .field("filter_text", &self.filter_text)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::ConfigError;
    use super::*;

    fn value() -> ValueFn<String> {
        Arc::new(|s: &String| s.clone())
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = next_id();
        let b = next_id();
        assert!(b > a);
    }

    #[test]
    fn build_rejects_zero_limit() {
        let err = Config::from_value(value()).with_limit(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroLimit);
    }

    #[test]
    fn build_rejects_zero_height() {
        let err = Config::from_value(value())
            .with_height(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroHeight);
    }

    #[test]
    fn build_rejects_zero_delay_with_source() {
        let source = super::super::Source::fixed(
            "/models",
            Arc::new(|_loc: String| -> super::super::FetchFuture<String> {
                Box::pin(async { Ok(Vec::new()) })
            }),
        );
        let err = Config::from_value(value())
            .with_source(source)
            .with_delay(Duration::ZERO)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroDelay);
    }

    #[test]
    fn build_starts_hidden_with_all_items_matching() {
        let list = Config::from_value(value())
            .with_items(names(&["Ann", "Ben", "Cara"]))
            .build()
            .unwrap();
        assert!(!list.visible());
        assert_eq!(list.len(), 3);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn set_items_refreshes_matches() {
        let mut list = Config::from_value(value())
            .with_items(names(&["Ann"]))
            .build()
            .unwrap();
        list.set_items(names(&["Ann", "Ben"]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn selected_item_resolves_through_matches() {
        let mut list = Config::from_value(value())
            .with_items(names(&["Ann", "Ben", "Cara"]))
            .with_filter(super::super::filters::substring(value()))
            .build()
            .unwrap();
        list.set_filter_text("a");
        // "Ann" and "Cara" match; selecting row 1 must resolve to "Cara".
        assert_eq!(list.len(), 2);
        list.select(Some(1));
        assert_eq!(list.selected_item().map(String::as_str), Some("Cara"));
    }
}
