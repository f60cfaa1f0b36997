use std::fmt;

use crate::collection::{Media, MediaType};

/// Which part of the collection is visible. Exactly one is active at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    Owned,
    Wanted,
    Type(MediaType),
}

impl Filter {
    pub fn matches(self, media: &Media) -> bool {
        match self {
            Filter::All => true,
            Filter::Favorites => media.favorite,
            Filter::Owned => media.owned,
            Filter::Wanted => media.is_wanted(),
            Filter::Type(t) => media.media_type == t,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Favorites => "Favorites",
            Filter::Owned => "Owned",
            Filter::Wanted => "Wanted",
            Filter::Type(t) => t.display_name(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Keep the items matching `by`, in input order.
pub fn filter<'a>(items: impl IntoIterator<Item = &'a Media>, by: Filter) -> Vec<&'a Media> {
    items.into_iter().filter(|m| by.matches(m)).collect()
}
