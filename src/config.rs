//! Configuration loader and schema types.
//!
//! This module exposes the settings that pick the default view (filter, sort)
//! and how items are rendered, plus helpers to load them from disk and env.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
