//! `bibliotheca-catalog`: the book catalog domain.
//!
//! Pure domain logic (no IO): validated value objects, the [`Book`] entity and
//! the commands that describe catalog operations. Persistence and handlers
//! live in `bibliotheca-infra`.

pub mod book;
pub mod commands;
pub mod values;

pub use book::{Book, BookRecord};
pub use commands::{
    CreateBook, DeleteBook, GetAllBooks, GetBookById, GetBookByTitle, GetBookByTitleAndAuthor,
    UpdateBook,
};
pub use values::{Author, BookStatus, Status, Title, Year};

pub use bibliotheca_core::ValueObject;
