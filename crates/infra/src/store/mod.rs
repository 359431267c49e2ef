//! Durable storage boundary for the catalog.
//!
//! A [`BookStore`] holds the persisted snapshot the unit of work loads on
//! entry and overwrites on commit. Media are interchangeable: handlers never
//! see which one is in use.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::BookStore;
