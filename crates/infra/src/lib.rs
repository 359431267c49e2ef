//! Infrastructure layer: storage, unit of work, handlers, config.

pub mod bootstrap;
pub mod config;
pub mod handlers;
pub mod repository;
pub mod store;
pub mod uow;

pub use config::Settings;
pub use repository::{BooksRepository, InMemoryBooksRepository};
pub use store::{BookStore, InMemoryStore, JsonFileStore};
pub use uow::{BooksUnitOfWork, InMemoryBooksUnitOfWork, JsonBooksUnitOfWork, StoreUnitOfWork};

mod integration_tests;
