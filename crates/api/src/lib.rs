//! Presentation boundary: the library facade and its console front end.

pub mod app;
pub mod console;

pub use app::LibraryApi;
