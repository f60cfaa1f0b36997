//! The collection organization engine.
//!
//! `organize` runs a fixed pipeline over a borrowed collection:
//! filter, then search, then sort, then categorize into `Section`s. Every
//! stage is a pure function and is exported on its own for callers that need
//! only part of the pipeline.

mod categorize;
mod filter;
mod search;
mod sort;

pub use categorize::categorize;
pub use filter::{Filter, filter};
pub use search::search;
pub use sort::{Sort, sort};

use crate::collection::Media;

/// A titled, ordered group of items borrowed from the input collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: String,
    pub content: Vec<&'a Media>,
}

impl<'a> Section<'a> {
    pub fn new(title: impl Into<String>, content: Vec<&'a Media>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// Produce the sectioned view of `collection` for the given parameters.
///
/// Never returns an empty vector: when nothing survives filter and search the
/// result is a single empty section titled after `sort`.
pub fn organize<'a>(
    collection: &'a [Media],
    filter_by: Filter,
    sort_by: Sort,
    search_term: Option<&str>,
) -> Vec<Section<'a>> {
    let items = filter(collection.iter(), filter_by);
    let items = search(items, search_term.unwrap_or(""));
    let items = sort(items, sort_by);
    let matched = items.len();
    let sections = categorize(items, sort_by);

    tracing::debug!(
        filter = %filter_by,
        sort = %sort_by,
        input = collection.len(),
        matched,
        sections = sections.len(),
        "organized collection"
    );
    sections
}

/// Total number of items across `sections`.
pub fn item_count(sections: &[Section<'_>]) -> usize {
    sections.iter().map(Section::len).sum()
}
