//! Integration tests for the full catalog pipeline.
//!
//! Tests: Command → MessageBus → Handler → UnitOfWork → JsonFileStore
//!
//! Verifies:
//! - Commands persist through the JSON data file
//! - Failed pre-conditions and failed handlers leave the file untouched
//! - A data file with malformed records is never overwritten
//! - Events recorded by handlers are drained through the same unit of work

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    use bibliotheca_catalog::{
        Book, BookRecord, BookStatus, CreateBook, DeleteBook, GetAllBooks, GetBookById,
        UpdateBook,
    };
    use bibliotheca_core::{AppError, AppResult, InfrastructureError, LogicError};
    use bibliotheca_events::{
        Command, CommandHandler, Event, EventHandler, MessageBus, UnitOfWork, atomically,
    };

    use crate::bootstrap::{command_handlers, message_bus};
    use crate::store::{BookStore, JsonFileStore};
    use crate::uow::{BooksUnitOfWork, JsonBooksUnitOfWork, StoreUnitOfWork};

    fn setup() -> (TempDir, PathBuf, MessageBus<JsonBooksUnitOfWork>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("database.json");
        let bus = message_bus(StoreUnitOfWork::new(JsonFileStore::new(&path)));
        (dir, path, bus)
    }

    fn stored(path: &Path) -> Vec<BookRecord> {
        JsonFileStore::new(path).load().unwrap()
    }

    fn orwell() -> CreateBook {
        CreateBook::new("1984", "George Orwell", 1949)
    }

    #[test]
    fn create_on_empty_library_persists_fresh_book() {
        let (_dir, path, mut bus) = setup();

        let book = bus.execute(orwell()).unwrap();

        assert!(!book.oid().as_str().is_empty());
        assert_eq!(book.status().kind(), BookStatus::InStock);
        assert_eq!(stored(&path), vec![book.to_record()]);
    }

    #[test]
    fn duplicate_title_is_rejected_and_count_unchanged() {
        let (_dir, path, mut bus) = setup();
        bus.execute(orwell()).unwrap();

        let err = bus
            .execute(CreateBook::new("1984", "Someone Else", 1990))
            .unwrap_err();

        assert_eq!(err, AppError::Logic(LogicError::AlreadyExists("1984".into())));
        assert_eq!(stored(&path).len(), 1);
    }

    #[test]
    fn deleting_unknown_book_leaves_file_byte_for_byte_unchanged() {
        let (_dir, path, mut bus) = setup();
        bus.execute(orwell()).unwrap();
        let before = fs::read(&path).unwrap();

        let err = bus
            .execute(DeleteBook {
                oid: "no-such-book".into(),
            })
            .unwrap_err();

        assert_eq!(err, AppError::Logic(LogicError::NotExists));
        assert_eq!(fs::read(&path).unwrap(), before);
        assert_eq!(bus.unit_of_work().working_set().len(), 1);
    }

    #[test]
    fn malformed_record_blocks_commands_and_keeps_the_file() {
        let (_dir, path, mut bus) = setup();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let raw = r#"[
    {"oid": "b-1", "title": "Emma", "author": "Jane Austen", "year": 1815, "status": "in stock"},
    {"oid": "b-2", "title": "Dune", "author": "Frank Herbert", "year": "1965", "status": "in stock"}
]"#;
        fs::write(&path, raw).unwrap();

        let err = bus.execute(orwell()).unwrap_err();

        assert!(matches!(
            err,
            AppError::Infrastructure(InfrastructureError::Serialization(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), raw);
        assert!(!bus.unit_of_work().is_open());
    }

    #[test]
    fn get_all_on_empty_library_then_after_one_create() {
        let (_dir, _path, mut bus) = setup();

        let err = bus.execute(GetAllBooks {}).unwrap_err();
        assert_eq!(err, AppError::Logic(LogicError::EmptyLibrary));

        let book = bus.execute(orwell()).unwrap();
        let all = bus.execute(GetAllBooks {}).unwrap();

        assert_eq!(all.len(), 1);
        assert!(all[0].same_fields_as(&book));
    }

    #[test]
    fn update_then_reopen_sees_committed_state() {
        let (_dir, path, mut bus) = setup();
        let book = bus.execute(orwell()).unwrap();

        bus.execute(UpdateBook {
            oid: book.oid().to_string(),
            title: "1984".into(),
            author: "George Orwell".into(),
            year: 1949,
            status: "issued".into(),
        })
        .unwrap();

        let mut reopened = message_bus(StoreUnitOfWork::new(JsonFileStore::new(&path)));
        let found = reopened
            .execute(GetBookById {
                oid: book.oid().to_string(),
            })
            .unwrap();

        assert!(found.is_issued());
        assert_eq!(found, book);
    }

    /// Removes every book, then fails.
    #[derive(Debug)]
    struct PurgeThenFail;

    impl Command for PurgeThenFail {
        type Output = ();

        fn command_type(&self) -> &'static str {
            "test.purge_then_fail"
        }
    }

    struct PurgeThenFailHandler;

    impl<U: BooksUnitOfWork> CommandHandler<PurgeThenFail, U> for PurgeThenFailHandler {
        fn handle(&self, _command: PurgeThenFail, uow: &mut U) -> AppResult<()> {
            atomically(uow, |uow| {
                let books = uow.books();
                for book in books.list() {
                    books.delete(book.oid().as_str())?;
                }
                Err(LogicError::EmptyLibrary.into())
            })
        }
    }

    #[test]
    fn failure_after_partial_mutation_leaves_durable_store_untouched() {
        let (_dir, path, _) = setup();
        let registry =
            command_handlers().with_command::<PurgeThenFail, _>(PurgeThenFailHandler);
        let mut bus = MessageBus::new(StoreUnitOfWork::new(JsonFileStore::new(&path)), registry);
        bus.execute(orwell()).unwrap();
        bus.execute(CreateBook::new("Animal Farm", "George Orwell", 1945))
            .unwrap();
        let before = fs::read(&path).unwrap();

        let err = bus.execute(PurgeThenFail).unwrap_err();

        assert_eq!(err, AppError::Logic(LogicError::EmptyLibrary));
        assert_eq!(fs::read(&path).unwrap(), before);
        assert_eq!(bus.unit_of_work().working_set().len(), 2);
    }

    /// Creates a book and announces it.
    #[derive(Debug)]
    struct ShelveBook(CreateBook);

    impl Command for ShelveBook {
        type Output = Book;

        fn command_type(&self) -> &'static str {
            "test.shelve"
        }
    }

    #[derive(Debug)]
    struct BookShelved {
        oid: String,
    }

    impl Event for BookShelved {
        fn event_type(&self) -> &'static str {
            "test.book_shelved"
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    #[derive(Debug)]
    struct BookIssued {
        title: String,
    }

    impl Event for BookIssued {
        fn event_type(&self) -> &'static str {
            "test.book_issued"
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    struct ShelveBookHandler;

    impl CommandHandler<ShelveBook, JsonBooksUnitOfWork> for ShelveBookHandler {
        fn handle(&self, command: ShelveBook, uow: &mut JsonBooksUnitOfWork) -> AppResult<Book> {
            let CreateBook {
                title,
                author,
                year,
                status,
            } = command.0;
            atomically(uow, |uow| {
                let book = uow
                    .books()
                    .add(Book::from_raw(&title, &author, year, &status)?);
                uow.record(BookShelved {
                    oid: book.oid().to_string(),
                });
                Ok(book)
            })
        }
    }

    /// Issues every freshly shelved book.
    struct IssueOnShelved;

    impl EventHandler<BookShelved, JsonBooksUnitOfWork> for IssueOnShelved {
        fn handle(&self, event: &BookShelved, uow: &mut JsonBooksUnitOfWork) -> AppResult<()> {
            atomically(uow, |uow| {
                let books = uow.books();
                let Some(book) = books.get(&event.oid) else {
                    return Err(LogicError::NotExists.into());
                };
                let issued = Book::from_raw_with_oid(
                    book.oid().clone(),
                    book.title().as_str(),
                    book.author().as_str(),
                    book.year().value(),
                    "issued",
                )?;
                books.update(&event.oid, issued)?;
                uow.record(BookIssued {
                    title: book.title().as_str().to_string(),
                });
                Ok(())
            })
        }
    }

    /// Shelves a companion volume for every issued book.
    struct CompanionOnIssued;

    impl EventHandler<BookIssued, JsonBooksUnitOfWork> for CompanionOnIssued {
        fn handle(&self, event: &BookIssued, uow: &mut JsonBooksUnitOfWork) -> AppResult<()> {
            atomically(uow, |uow| {
                let title = format!("{} Companion", event.title);
                uow.books()
                    .add(Book::from_raw(&title, "Anonymous Editor", 2000, "in stock")?);
                Ok(())
            })
        }
    }

    #[test]
    fn events_are_drained_transitively_through_the_store() {
        let (_dir, path, _) = setup();
        let registry = command_handlers()
            .with_command::<ShelveBook, _>(ShelveBookHandler)
            .with_event::<BookShelved, _>(IssueOnShelved)
            .with_event::<BookIssued, _>(CompanionOnIssued);
        let mut bus = MessageBus::new(StoreUnitOfWork::new(JsonFileStore::new(&path)), registry);

        let book = bus.execute(ShelveBook(orwell())).unwrap();

        assert_eq!(bus.pending(), 0);
        assert!(!book.is_issued());

        let records = stored(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].oid, book.oid().as_str());
        assert_eq!(records[0].status, "issued");
        assert_eq!(records[1].title, "1984 Companion");
        assert!(bus.unit_of_work_mut().collect_new_events().is_empty());
    }
}
