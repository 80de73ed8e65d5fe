//! Core types for the results list.
//!
//! This module holds the pieces the list is configured with:
//! - function aliases for value extraction, filtering, selection callbacks,
//!   and remote fetching
//! - the [`ItemDelegate`] trait for row rendering
//! - [`Source`], pairing a fetch function with its location
//! - the error types reported at construction and on fetch failure

use super::Model;
use bubbletea_rs::Cmd;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Extracts the display text for a model.
pub type ValueFn<M> = Arc<dyn Fn(&M) -> String + Send + Sync>;

/// Predicate deciding whether a model matches the given filter text.
/// A list without a filter treats every model as matching.
pub type Filter<M> = Arc<dyn Fn(&M, &str) -> bool + Send + Sync>;

/// Callback invoked when a row is confirmed, with the model and its position
/// within the rendered set. May return a follow-up command.
pub type SelectFn<M> = Arc<dyn Fn(&M, usize) -> Option<Cmd> + Send + Sync>;

/// Future returned by a fetch function.
pub type FetchFuture<M> = Pin<Box<dyn Future<Output = Result<Vec<M>, FetchError>> + Send>>;

/// Asynchronous fetch collaborator: resolves a location to a batch of models.
/// Transport is entirely the caller's concern.
pub type FetchFn<M> = Arc<dyn Fn(String) -> FetchFuture<M> + Send + Sync>;

/// A remote source: where to fetch from and how.
///
/// The location is a function of the current filter text, re-evaluated on
/// every refresh, so sources whose target depends on the query (the common
/// case) fetch again when the query moves the target. [`Source::fixed`]
/// covers locations that never change.
#[derive(Clone)]
pub struct Source<M: 'static> {
    locate: Arc<dyn Fn(&str) -> String + Send + Sync>,
    fetch: FetchFn<M>,
}

impl<M: 'static> Source<M> {
    /// Creates a source whose location is derived from the filter text.
    pub fn new<L>(locate: L, fetch: FetchFn<M>) -> Self
    where
        L: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            locate: Arc::new(locate),
            fetch,
        }
    }

    /// Creates a source with a constant location.
    pub fn fixed(location: impl Into<String>, fetch: FetchFn<M>) -> Self {
        let location = location.into();
        Self::new(move |_| location.clone(), fetch)
    }

    /// The location for the given filter text.
    pub fn locate(&self, filter_text: &str) -> String {
        (self.locate)(filter_text)
    }

    pub(super) fn fetch(&self, location: String) -> FetchFuture<M> {
        (self.fetch)(location)
    }
}

impl<M: 'static> std::fmt::Debug for Source<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source").finish_non_exhaustive()
    }
}

/// Configuration rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No value extractor was supplied where one is required.
    #[error("value extractor is required")]
    MissingValue,
    /// A display limit of zero would never render anything.
    #[error("display limit must be at least 1")]
    ZeroLimit,
    /// A visible height of zero would never show anything.
    #[error("visible height must be at least 1")]
    ZeroHeight,
    /// A zero debounce delay with a configured source defeats debouncing.
    #[error("fetch delay must be non-zero when a source is configured")]
    ZeroDelay,
}

/// A failed remote fetch, surfaced to the host as
/// [`FetchFailedMsg`](super::FetchFailedMsg).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("fetch failed: {0}")]
pub struct FetchError(pub String);

/// Renders individual rows of the list.
///
/// The delegate is the list's template: it turns one model into one rendered
/// row (of a fixed height), with access to the list for its styles, current
/// selection, and filter text.
pub trait ItemDelegate<M: 'static> {
    /// Renders one row. `index` is the row's position within the rendered
    /// (filtered and limited) set, the same space [`Model::selected`] uses.
    fn render(&self, m: &Model<M>, index: usize, item: &M) -> String;

    /// Height of one row in lines.
    fn height(&self) -> usize {
        1
    }

    /// Blank lines between rows.
    fn spacing(&self) -> usize {
        0
    }
}
