use bibliotheca_catalog::{
    Book, CreateBook, DeleteBook, GetAllBooks, GetBookById, GetBookByTitle,
    GetBookByTitleAndAuthor, UpdateBook,
};
use bibliotheca_events::MessageBus;
use bibliotheca_infra::bootstrap::message_bus;
use bibliotheca_infra::{
    BooksUnitOfWork, JsonBooksUnitOfWork, JsonFileStore, Settings, StoreUnitOfWork,
};

use super::dto::{
    CreateBookScheme, DeleteBookScheme, ReadAllBookScheme, ReadBookScheme, UpdateBookScheme,
};
use super::errors::report;

/// Presentation-facing entry point to the catalog.
///
/// Owns one message bus (and through it one unit of work) for its whole
/// lifetime. Every operation returns `None` when it did not complete; the
/// reason has already been logged.
pub struct LibraryApi<U: BooksUnitOfWork + 'static> {
    bus: MessageBus<U>,
}

impl LibraryApi<JsonBooksUnitOfWork> {
    /// Catalog stored in the JSON file named by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        tracing::info!(path = %settings.database_path().display(), "opening library");
        Self::new(StoreUnitOfWork::new(JsonFileStore::new(settings.database_path())))
    }
}

impl<U: BooksUnitOfWork + 'static> LibraryApi<U> {
    pub fn new(uow: U) -> Self {
        Self::with_bus(message_bus(uow))
    }

    /// Use a bus wired by the caller (e.g. with extra event handlers).
    pub fn with_bus(bus: MessageBus<U>) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &MessageBus<U> {
        &self.bus
    }

    pub fn create(&mut self, scheme: CreateBookScheme) -> Option<Book> {
        let book = report("create", self.bus.execute(CreateBook::from(scheme)))?;
        tracing::info!(oid = %book.oid(), title = book.title().as_str(), "book created");
        Some(book)
    }

    pub fn update(&mut self, scheme: UpdateBookScheme) -> Option<Book> {
        let book = report("update", self.bus.execute(UpdateBook::from(scheme)))?;
        tracing::info!(oid = %book.oid(), "book updated");
        Some(book)
    }

    pub fn delete(&mut self, scheme: DeleteBookScheme) -> Option<()> {
        let oid = scheme.oid.clone();
        report("delete", self.bus.execute(DeleteBook::from(scheme)))?;
        tracing::info!(oid = %oid, "book deleted");
        Some(())
    }

    pub fn read(&mut self, scheme: ReadBookScheme) -> Option<Book> {
        report("read", self.bus.execute(GetBookById::from(scheme)))
    }

    pub fn read_by_title(&mut self, title: &str) -> Option<Book> {
        report(
            "read_by_title",
            self.bus.execute(GetBookByTitle {
                title: title.to_string(),
            }),
        )
    }

    pub fn read_by_title_and_author(&mut self, title: &str, author: &str) -> Option<Book> {
        report(
            "read_by_title_and_author",
            self.bus.execute(GetBookByTitleAndAuthor {
                title: title.to_string(),
                author: author.to_string(),
            }),
        )
    }

    pub fn read_all(&mut self, scheme: ReadAllBookScheme) -> Option<Vec<Book>> {
        report("read_all", self.bus.execute(GetAllBooks::from(scheme)))
    }
}
