//! Library application facade.
//!
//! This folder is structured like:
//! - `services.rs`: the [`LibraryApi`] facade over one message bus
//! - `dto.rs`: request schemes and their mapping to commands
//! - `errors.rs`: how failures are reported at this boundary

pub mod dto;
pub mod errors;
pub mod services;

pub use dto::{
    CreateBookScheme, DeleteBookScheme, ReadAllBookScheme, ReadBookScheme, UpdateBookScheme,
};
pub use services::LibraryApi;
