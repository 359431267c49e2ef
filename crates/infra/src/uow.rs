//! Unit of work over a [`BookStore`].
//!
//! ## Scope lifecycle
//!
//! ```text
//! enter     store.load() → working set, backup = working set
//! work      handlers go through books()
//! commit    store.save(working set), backup = working set
//! rollback  working set = backup, undrained events dropped
//! close     scope ends, events kept for the bus
//! ```
//!
//! Single-threaded: the unit of work is borrowed `&mut` by exactly one handler
//! at a time, and scopes do not nest.

use bibliotheca_catalog::{Book, BookRecord};
use bibliotheca_core::{AppResult, InfrastructureError};
use bibliotheca_events::{Event, UnitOfWork};

use crate::repository::{BooksRepository, InMemoryBooksRepository};
use crate::store::{BookStore, InMemoryStore, JsonFileStore};

/// A unit of work that also exposes the catalog repository.
pub trait BooksUnitOfWork: UnitOfWork {
    /// Repository bound to this unit of work's working set.
    fn books(&mut self) -> &mut dyn BooksRepository;
}

/// [`UnitOfWork`] that snapshots a [`BookStore`] into an in-memory working set.
#[derive(Debug)]
pub struct StoreUnitOfWork<S> {
    store: S,
    books: InMemoryBooksRepository,
    backup: Vec<Book>,
    events: Vec<Box<dyn Event>>,
    open: bool,
}

pub type JsonBooksUnitOfWork = StoreUnitOfWork<JsonFileStore>;

pub type InMemoryBooksUnitOfWork = StoreUnitOfWork<InMemoryStore>;

impl<S: BookStore> StoreUnitOfWork<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            books: InMemoryBooksRepository::new(),
            backup: Vec::new(),
            events: Vec::new(),
            open: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The working set as of the last scope.
    pub fn working_set(&self) -> &[Book] {
        self.books.as_slice()
    }

    fn records(&self) -> Vec<BookRecord> {
        self.books.as_slice().iter().map(Book::to_record).collect()
    }
}

impl<S: BookStore> UnitOfWork for StoreUnitOfWork<S> {
    fn enter(&mut self) -> AppResult<()> {
        if self.open {
            return Err(InfrastructureError::ScopeAlreadyOpen.into());
        }

        let books = self
            .store
            .load()?
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(books = books.len(), "unit of work entered");
        self.backup = books.clone();
        self.books.replace_all(books);
        self.open = true;
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        let current = self.books.as_slice();
        current.len() != self.backup.len()
            || current
                .iter()
                .zip(&self.backup)
                .any(|(now, before)| !now.same_fields_as(before))
    }

    fn commit(&mut self) -> AppResult<()> {
        let records = self.records();
        self.store.save(&records)?;
        self.backup = self.books.list();
        tracing::debug!(books = records.len(), "unit of work committed");
        Ok(())
    }

    fn rollback(&mut self) {
        self.books.replace_all(self.backup.clone());
        let dropped = self.events.len();
        self.events.clear();
        tracing::debug!(dropped_events = dropped, "unit of work rolled back");
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn add_event(&mut self, event: Box<dyn Event>) {
        self.events.push(event);
    }

    fn collect_new_events(&mut self) -> Vec<Box<dyn Event>> {
        std::mem::take(&mut self.events)
    }
}

impl<S: BookStore> BooksUnitOfWork for StoreUnitOfWork<S> {
    fn books(&mut self) -> &mut dyn BooksRepository {
        &mut self.books
    }
}
