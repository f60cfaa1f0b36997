use crate::collection::{Condition, Media, MediaType};

use super::Section;
use super::sort::Sort;

/// Section title for items whose grouping key is blank (no title, no artist).
const BLANK_SECTION: &str = "#";

/// Split an already sorted sequence into sections according to `by`.
///
/// - `Type` / `Condition`: one section per enum value in canonical order,
///   empty ones included.
/// - `Title`: a new section whenever the lower-cased first character changes.
/// - `Artist`: a new section whenever the artist string changes (exact match),
///   so non-adjacent runs of one artist give separate sections.
///   Blank titles and blank artists are grouped under `#`.
/// - anything else: a single section titled after the sort.
///
/// An empty input always yields one empty section titled after the sort.
pub fn categorize<'a>(items: Vec<&'a Media>, by: Sort) -> Vec<Section<'a>> {
    if items.is_empty() {
        return vec![Section::new(by.display_name(), Vec::new())];
    }

    match by {
        Sort::Type => partition_by_type(&items),
        Sort::Condition => partition_by_condition(&items),
        Sort::Title => group_by_initial(items),
        Sort::Artist => group_by_artist(items),
        Sort::RecentlyAddedDesc | Sort::RecentlyAddedAsc => {
            vec![Section::new(by.display_name(), items)]
        }
    }
}

fn partition_by_type<'a>(items: &[&'a Media]) -> Vec<Section<'a>> {
    MediaType::ALL
        .iter()
        .map(|&t| {
            let content = items.iter().copied().filter(|m| m.media_type == t).collect();
            Section::new(t.display_name(), content)
        })
        .collect()
}

fn partition_by_condition<'a>(items: &[&'a Media]) -> Vec<Section<'a>> {
    Condition::ALL
        .iter()
        .map(|&c| {
            let content = items.iter().copied().filter(|m| m.condition == c).collect();
            Section::new(c.display_name(), content)
        })
        .collect()
}

/// Lower-cased first character, compared as a string since lowering may
/// expand to several chars.
fn initial_key(title: &str) -> Option<String> {
    title.chars().next().map(|c| c.to_lowercase().collect())
}

fn initial_title(title: &str) -> String {
    match title.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => BLANK_SECTION.to_string(),
    }
}

fn group_by_initial<'a>(items: Vec<&'a Media>) -> Vec<Section<'a>> {
    group_on_change(items, |m| initial_key(&m.title), |m| initial_title(&m.title))
}

fn artist_title(artist: &str) -> String {
    if artist.is_empty() {
        BLANK_SECTION.to_string()
    } else {
        artist.to_string()
    }
}

fn group_by_artist<'a>(items: Vec<&'a Media>) -> Vec<Section<'a>> {
    group_on_change(items, |m| m.artist.clone(), |m| artist_title(&m.artist))
}

/// Change-detection grouping: start a new section each time `key` differs
/// from the previous item's key. The section is titled from its first item.
fn group_on_change<'a, K: PartialEq>(
    items: Vec<&'a Media>,
    key: impl Fn(&Media) -> K,
    title: impl Fn(&Media) -> String,
) -> Vec<Section<'a>> {
    let mut sections: Vec<Section<'a>> = Vec::new();
    let mut current: Option<K> = None;

    for m in items {
        let k = key(m);
        if current.as_ref() == Some(&k) {
            if let Some(section) = sections.last_mut() {
                section.content.push(m);
            }
        } else {
            sections.push(Section::new(title(m), vec![m]));
            current = Some(k);
        }
    }

    sections
}
