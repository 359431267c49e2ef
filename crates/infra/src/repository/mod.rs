//! Repository boundary over one unit of work's working set.

pub mod in_memory;

pub use in_memory::InMemoryBooksRepository;

use bibliotheca_catalog::Book;
use bibliotheca_core::AppResult;

/// Collection-like access to the books of the working set.
///
/// Lookups take raw strings so a query never fails validation: a title that
/// could not exist simply matches nothing.
///
/// ## Ordering
///
/// The working set keeps insertion order. `update` replaces in place, so
/// positions are stable; `delete` shifts the remaining books down.
///
/// Uniqueness is not enforced here. Policies such as "one book per title"
/// belong to the command handlers.
pub trait BooksRepository {
    /// Append `book` and return it.
    fn add(&mut self, book: Book) -> Book;

    fn get(&self, oid: &str) -> Option<Book>;

    fn get_by_title(&self, title: &str) -> Option<Book>;

    fn get_by_title_and_author(&self, title: &str, author: &str) -> Option<Book>;

    /// Replace the book identified by `oid` with `book`, keeping its position.
    ///
    /// Fails with `NotFound(oid)` if no book has that identifier.
    fn update(&mut self, oid: &str, book: Book) -> AppResult<Book>;

    /// Remove the book identified by `oid`.
    ///
    /// Fails with `NotFound(oid)` if no book has that identifier.
    fn delete(&mut self, oid: &str) -> AppResult<()>;

    /// Detached copy of every book, in order.
    fn list(&self) -> Vec<Book>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
