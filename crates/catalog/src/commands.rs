//! Catalog commands.
//!
//! Every command carries raw primitives only. Handlers coerce them into value
//! objects, so a malformed field surfaces as a [`ValidationError`] from the
//! handler rather than from command construction.
//!
//! [`ValidationError`]: bibliotheca_core::ValidationError

use serde::{Deserialize, Serialize};

use bibliotheca_events::Command;

use crate::book::Book;
use crate::values::BookStatus;

fn default_status() -> String {
    BookStatus::InStock.as_str().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default = "default_status")]
    pub status: String,
}

impl CreateBook {
    /// A create command for a book that is in stock.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            status: default_status(),
        }
    }
}

impl Command for CreateBook {
    type Output = Book;

    fn command_type(&self) -> &'static str {
        "books.create"
    }
}

/// Replace every field of the book identified by `oid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBook {
    pub oid: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: String,
}

impl Command for UpdateBook {
    type Output = Book;

    fn command_type(&self) -> &'static str {
        "books.update"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBook {
    pub oid: String,
}

impl Command for DeleteBook {
    type Output = ();

    fn command_type(&self) -> &'static str {
        "books.delete"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBookById {
    pub oid: String,
}

impl Command for GetBookById {
    type Output = Book;

    fn command_type(&self) -> &'static str {
        "books.get_by_id"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBookByTitle {
    pub title: String,
}

impl Command for GetBookByTitle {
    type Output = Book;

    fn command_type(&self) -> &'static str {
        "books.get_by_title"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBookByTitleAndAuthor {
    pub title: String,
    pub author: String,
}

impl Command for GetBookByTitleAndAuthor {
    type Output = Book;

    fn command_type(&self) -> &'static str {
        "books.get_by_title_and_author"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllBooks {}

impl Command for GetAllBooks {
    type Output = Vec<Book>;

    fn command_type(&self) -> &'static str {
        "books.get_all"
    }
}
