use std::cmp::Ordering;
use std::fmt;

use crate::collection::Media;

/// Ordering applied to the visible items. Also decides how they are grouped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Sort {
    /// Newest additions first.
    #[default]
    RecentlyAddedDesc,
    /// Oldest additions first.
    RecentlyAddedAsc,
    Type,
    Condition,
    Title,
    Artist,
}

impl Sort {
    pub const ALL: [Sort; 6] = [
        Sort::RecentlyAddedDesc,
        Sort::RecentlyAddedAsc,
        Sort::Type,
        Sort::Condition,
        Sort::Title,
        Sort::Artist,
    ];

    pub fn compare(self, a: &Media, b: &Media) -> Ordering {
        match self {
            Sort::RecentlyAddedDesc => b.date_added.cmp(&a.date_added),
            Sort::RecentlyAddedAsc => a.date_added.cmp(&b.date_added),
            Sort::Type => a.media_type.cmp(&b.media_type),
            Sort::Condition => a.condition.cmp(&b.condition),
            Sort::Title => a.title.cmp(&b.title),
            Sort::Artist => a.artist.cmp(&b.artist),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Sort::RecentlyAddedDesc => "Recently Added",
            Sort::RecentlyAddedAsc => "Oldest First",
            Sort::Type => "Type",
            Sort::Condition => "Condition",
            Sort::Title => "Title",
            Sort::Artist => "Artist",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Stable sort: items comparing equal keep their input order.
pub fn sort<'a>(mut items: Vec<&'a Media>, by: Sort) -> Vec<&'a Media> {
    items.sort_by(|a, b| by.compare(a, b));
    items
}
