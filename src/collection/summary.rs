use super::model::{Media, MediaType};

/// Headline counts for a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub total: usize,
    pub owned: usize,
    pub wanted: usize,
    pub favorites: usize,
    /// Per-type counts in canonical type order, zero counts included.
    pub by_type: Vec<(MediaType, usize)>,
}

impl CollectionSummary {
    pub fn of(media: &[Media]) -> Self {
        let wanted = media.iter().filter(|m| m.is_wanted()).count();
        let by_type = MediaType::ALL
            .iter()
            .map(|&t| (t, media.iter().filter(|m| m.media_type == t).count()))
            .collect();

        Self {
            total: media.len(),
            owned: media.len() - wanted,
            wanted,
            favorites: media.iter().filter(|m| m.favorite).count(),
            by_type,
        }
    }

    /// One-line rendering, e.g. `12 items (10 owned, 2 wanted, 3 favorites) | Vinyl 8 | CD 4 | Cassette 0`.
    pub fn headline(&self) -> String {
        let mut line = format!(
            "{} items ({} owned, {} wanted, {} favorites)",
            self.total, self.owned, self.wanted, self.favorites
        );
        for (t, n) in &self.by_type {
            line.push_str(&format!(" | {} {}", t.display_name(), n));
        }
        line
    }
}
