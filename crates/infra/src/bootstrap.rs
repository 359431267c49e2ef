//! Wiring of the default catalog bus.
//!
//! The registry is an explicit value built here and handed to the bus; nothing
//! is registered globally.

use bibliotheca_catalog::{
    CreateBook, DeleteBook, GetAllBooks, GetBookById, GetBookByTitle, GetBookByTitleAndAuthor,
    UpdateBook,
};
use bibliotheca_events::{HandlerRegistry, MessageBus};

use crate::handlers::{
    CreateBookHandler, DeleteBookHandler, GetAllBooksHandler, GetBookByIdHandler,
    GetBookByTitleAndAuthorHandler, GetBookByTitleHandler, UpdateBookHandler,
};
use crate::uow::BooksUnitOfWork;

/// Registry with every catalog command routed to its handler.
///
/// No event handlers are registered: catalog commands emit no events. Callers
/// may add their own before building the bus.
pub fn command_handlers<U: BooksUnitOfWork + 'static>() -> HandlerRegistry<U> {
    HandlerRegistry::new()
        .with_command::<CreateBook, _>(CreateBookHandler)
        .with_command::<UpdateBook, _>(UpdateBookHandler)
        .with_command::<DeleteBook, _>(DeleteBookHandler)
        .with_command::<GetBookById, _>(GetBookByIdHandler)
        .with_command::<GetBookByTitle, _>(GetBookByTitleHandler)
        .with_command::<GetBookByTitleAndAuthor, _>(GetBookByTitleAndAuthorHandler)
        .with_command::<GetAllBooks, _>(GetAllBooksHandler)
}

/// Bus over `uow` with the default catalog registry.
pub fn message_bus<U: BooksUnitOfWork + 'static>(uow: U) -> MessageBus<U> {
    MessageBus::new(uow, command_handlers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    use crate::store::InMemoryStore;
    use crate::uow::{InMemoryBooksUnitOfWork, StoreUnitOfWork};

    #[test]
    fn every_catalog_command_is_routed() {
        let registry = command_handlers::<InMemoryBooksUnitOfWork>();

        for type_id in [
            TypeId::of::<CreateBook>(),
            TypeId::of::<UpdateBook>(),
            TypeId::of::<DeleteBook>(),
            TypeId::of::<GetBookById>(),
            TypeId::of::<GetBookByTitle>(),
            TypeId::of::<GetBookByTitleAndAuthor>(),
            TypeId::of::<GetAllBooks>(),
        ] {
            assert!(registry.handles_command(type_id));
        }
        assert_eq!(registry.command_types().len(), 7);
        assert!(registry.event_types().is_empty());
    }

    #[test]
    fn bus_executes_catalog_commands() {
        let mut bus = message_bus(StoreUnitOfWork::new(InMemoryStore::new()));

        let book = bus.execute(CreateBook::new("1984", "George Orwell", 1949)).unwrap();
        let all = bus.execute(GetAllBooks {}).unwrap();

        assert_eq!(all, vec![book]);
    }
}
