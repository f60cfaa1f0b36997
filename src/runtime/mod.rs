use std::env;
use std::path::PathBuf;

use crate::collection::{CollectionSummary, load_collection};
use crate::config::Settings;
use crate::error::{Result, ShelfError};
use crate::organize::organize;

mod render;
mod settings;

pub use render::render;
pub use settings::load_settings;

/// Entry point for the `mediashelf` binary.
///
/// Usage: `mediashelf [COLLECTION] [SEARCH]`
pub fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();
    let out = run_with(env::args().skip(1), &settings)?;
    print!("{out}");
    Ok(())
}

/// Load the collection named by `args` (or `collection.path`), organize it
/// with the configured view and render it to text.
pub fn run_with(args: impl IntoIterator<Item = String>, settings: &Settings) -> Result<String> {
    let mut args = args.into_iter();

    let path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| settings.collection.path.clone())
        .ok_or(ShelfError::MissingCollection)?;
    let search_term = args.next();

    let media = load_collection(&path)?;
    let sections = organize(
        &media,
        settings.view.filter.into(),
        settings.view.sort.into(),
        search_term.as_deref(),
    );

    Ok(render(&CollectionSummary::of(&media), &sections, settings))
}
