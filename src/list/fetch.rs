//! Debounced single-flight remote fallback for list components.
//!
//! When local filtering comes up empty, the list can fall back to a remote
//! [`Source`](super::Source). The fallback is debounced: a render schedules a
//! [`DebounceMsg`] after the configured delay, and every render bumps the
//! fetch tag so that at most one scheduled fetch is live. A stale tag means
//! the timer was cancelled and the message is dropped. Once dispatched, a
//! fetch is not cancellable; its completion is applied if the instance id
//! still matches.

use super::types::FetchError;
use super::Model;
use bubbletea_rs::{tick, Cmd, Msg};

/// Fires when the debounce delay for a remote fetch has elapsed.
///
/// Carries the scheduling list's id and the fetch tag current at scheduling
/// time. A tag older than the list's current one identifies a cancelled
/// timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceMsg {
    /// Id of the list that scheduled the fetch.
    pub id: usize,
    /// Fetch tag at scheduling time.
    pub tag: usize,
}

/// Carries the models returned by a successful remote fetch.
#[derive(Debug, Clone)]
pub struct FetchedMsg<M> {
    /// Id of the list that dispatched the fetch.
    pub id: usize,
    /// Source location the models were fetched from.
    pub location: String,
    /// The fetched working set.
    pub models: Vec<M>,
}

/// Reports a failed remote fetch.
///
/// The list's state is left untouched when this fires; the message itself is
/// the error surface and the host owns any retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailedMsg {
    /// Id of the list that dispatched the fetch.
    pub id: usize,
    /// What the fetcher reported.
    pub error: FetchError,
}

impl<M: Send + 'static> Model<M> {
    /// Schedules the debounced fallback fetch.
    ///
    /// The returned command delivers a [`DebounceMsg`] stamped with the
    /// current fetch tag after the configured delay. The caller has already
    /// bumped the tag, so any previously scheduled fetch is now stale.
    pub(super) fn schedule_fetch(&self) -> Cmd {
        let id = self.id;
        let tag = self.fetch_tag;
        tick(self.delay, move |_| Box::new(DebounceMsg { id, tag }) as Msg)
    }

    /// Dispatches the remote fetch for the current filter text.
    ///
    /// Returns `None` when no source is configured. The future resolves to
    /// [`FetchedMsg`] on success and [`FetchFailedMsg`] on error.
    pub(super) fn dispatch_fetch(&self) -> Option<Cmd> {
        let source = self.source.as_ref()?;
        let location = source.locate(&self.filter_text);
        let fut = source.fetch(location.clone());
        let id = self.id;
        Some(Box::pin(async move {
            match fut.await {
                Ok(models) => Some(Box::new(FetchedMsg { id, location, models }) as Msg),
                Err(error) => Some(Box::new(FetchFailedMsg { id, error }) as Msg),
            }
        }))
    }
}
