//! Organize a personal vinyl, CD and cassette collection into sectioned views.
//!
//! The heart of the crate is [`organize::organize`], a pure function that
//! filters, searches, sorts and groups a borrowed collection. The remaining
//! modules load collection snapshots and settings for the `mediashelf` binary.

pub mod collection;
pub mod config;
pub mod error;
pub mod logging;
pub mod organize;
pub mod runtime;

pub use collection::{Condition, Media, MediaId, MediaType};
pub use error::{Result, ShelfError};
pub use organize::{Filter, Section, Sort, organize};
