//! Collection data model and snapshot loading.
//!
//! A collection is a flat list of `Media` records owned by whoever loaded it.
//! Everything downstream borrows from that list and never mutates it.

mod dates;
mod display;
mod load;
mod model;
mod summary;

pub use display::display_from_fields;
pub use load::{load_collection, parse_collection};
pub use model::*;
pub use summary::CollectionSummary;
