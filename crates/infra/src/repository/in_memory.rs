use bibliotheca_catalog::Book;
use bibliotheca_core::{AppResult, InfrastructureError};

use super::BooksRepository;

/// Repository over an owned, ordered working set.
///
/// The unit of work holds one of these as its working set and swaps the
/// contents wholesale on enter and rollback.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBooksRepository {
    books: Vec<Book>,
}

impl InMemoryBooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrowed view of the working set.
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Replace the whole working set.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    fn position(&self, oid: &str) -> Option<usize> {
        self.books.iter().position(|b| b.oid().as_str() == oid)
    }
}

impl BooksRepository for InMemoryBooksRepository {
    fn add(&mut self, book: Book) -> Book {
        self.books.push(book.clone());
        book
    }

    fn get(&self, oid: &str) -> Option<Book> {
        self.books.iter().find(|b| b.oid().as_str() == oid).cloned()
    }

    fn get_by_title(&self, title: &str) -> Option<Book> {
        self.books
            .iter()
            .find(|b| b.title().as_str() == title)
            .cloned()
    }

    fn get_by_title_and_author(&self, title: &str, author: &str) -> Option<Book> {
        self.books
            .iter()
            .find(|b| b.title().as_str() == title && b.author().as_str() == author)
            .cloned()
    }

    fn update(&mut self, oid: &str, book: Book) -> AppResult<Book> {
        let idx = self
            .position(oid)
            .ok_or_else(|| InfrastructureError::not_found(oid))?;
        self.books[idx] = book.clone();
        Ok(book)
    }

    fn delete(&mut self, oid: &str) -> AppResult<()> {
        let idx = self
            .position(oid)
            .ok_or_else(|| InfrastructureError::not_found(oid))?;
        self.books.remove(idx);
        Ok(())
    }

    fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
