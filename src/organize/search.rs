use crate::collection::Media;

/// Keep the items whose title or artist contains `term`.
///
/// Matching is a case-sensitive substring test. An empty `term` keeps
/// everything.
// TODO: revisit case-sensitive matching once the product decides whether
// "bjork" should find "Bjork".
pub fn search<'a>(items: Vec<&'a Media>, term: &str) -> Vec<&'a Media> {
    if term.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|m| m.title.contains(term) || m.artist.contains(term))
        .collect()
}
