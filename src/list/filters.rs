//! Ready-made filter predicates.
//!
//! Both constructors close over a value extractor and produce a
//! [`Filter`](super::Filter) suitable for
//! [`Config::with_filter`](super::Config::with_filter). An empty filter term
//! passes every item, so an unfiltered list shows the whole working set.

use super::types::{Filter, ValueFn};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;

/// Case-insensitive substring match over the extractor output.
///
/// This is the autocomplete's default: the item passes when the lowercased
/// filter term occurs anywhere in the lowercased display value.
pub fn substring<M: 'static>(value: ValueFn<M>) -> Filter<M> {
    Arc::new(move |item: &M, term: &str| {
        if term.is_empty() {
            return true;
        }
        value(item).to_lowercase().contains(&term.to_lowercase())
    })
}

/// Skim-style fuzzy match over the extractor output.
///
/// A fresh matcher is constructed per call.
pub fn fuzzy<M: 'static>(value: ValueFn<M>) -> Filter<M> {
    Arc::new(move |item: &M, term: &str| {
        if term.is_empty() {
            return true;
        }
        let matcher = SkimMatcherV2::default();
        matcher.fuzzy_match(&value(item), term).is_some()
    })
}
