use serde::{Deserialize, Serialize};

use bibliotheca_catalog::{CreateBook, DeleteBook, GetAllBooks, GetBookById, UpdateBook};

// -------------------------
// Request schemes
// -------------------------

/// New book; always created in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookScheme {
    pub title: String,
    pub author: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookScheme {
    pub oid: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadBookScheme {
    pub oid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookScheme {
    pub oid: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadAllBookScheme {}

// -------------------------
// Scheme → command
// -------------------------

impl From<CreateBookScheme> for CreateBook {
    fn from(s: CreateBookScheme) -> Self {
        CreateBook::new(s.title, s.author, s.year)
    }
}

impl From<UpdateBookScheme> for UpdateBook {
    fn from(s: UpdateBookScheme) -> Self {
        UpdateBook {
            oid: s.oid,
            title: s.title,
            author: s.author,
            year: s.year,
            status: s.status,
        }
    }
}

impl From<ReadBookScheme> for GetBookById {
    fn from(s: ReadBookScheme) -> Self {
        GetBookById { oid: s.oid }
    }
}

impl From<DeleteBookScheme> for DeleteBook {
    fn from(s: DeleteBookScheme) -> Self {
        DeleteBook { oid: s.oid }
    }
}

impl From<ReadAllBookScheme> for GetAllBooks {
    fn from(_: ReadAllBookScheme) -> Self {
        GetAllBooks {}
    }
}
