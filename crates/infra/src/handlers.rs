//! Command handlers for the catalog.
//!
//! Every handler runs its work inside [`atomically`], checks its
//! pre-condition through the repository before mutating anything, and fails
//! with a [`LogicError`] when that pre-condition does not hold. A failed
//! pre-condition therefore leaves the working set untouched, and the scope
//! rolls back cleanly.
//!
//! Handlers are stateless unit structs: the unit of work is lent to them per
//! invocation by the bus.

use bibliotheca_catalog::{
    Book, CreateBook, DeleteBook, GetAllBooks, GetBookById, GetBookByTitle,
    GetBookByTitleAndAuthor, UpdateBook,
};
use bibliotheca_core::{AppResult, LogicError, Oid};
use bibliotheca_events::{CommandHandler, atomically};

use crate::uow::BooksUnitOfWork;

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateBookHandler;

impl<U: BooksUnitOfWork> CommandHandler<CreateBook, U> for CreateBookHandler {
    fn handle(&self, command: CreateBook, uow: &mut U) -> AppResult<Book> {
        atomically(uow, |uow| {
            let books = uow.books();
            if books.get_by_title(&command.title).is_some() {
                return Err(LogicError::AlreadyExists(command.title).into());
            }

            let book = Book::from_raw(
                &command.title,
                &command.author,
                command.year,
                &command.status,
            )?;
            Ok(books.add(book))
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateBookHandler;

impl<U: BooksUnitOfWork> CommandHandler<UpdateBook, U> for UpdateBookHandler {
    fn handle(&self, command: UpdateBook, uow: &mut U) -> AppResult<Book> {
        atomically(uow, |uow| {
            let books = uow.books();
            if books.get(&command.oid).is_none() {
                return Err(LogicError::NotExists.into());
            }

            let book = Book::from_raw_with_oid(
                Oid::from(command.oid.as_str()),
                &command.title,
                &command.author,
                command.year,
                &command.status,
            )?;
            books.update(&command.oid, book)
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteBookHandler;

impl<U: BooksUnitOfWork> CommandHandler<DeleteBook, U> for DeleteBookHandler {
    fn handle(&self, command: DeleteBook, uow: &mut U) -> AppResult<()> {
        atomically(uow, |uow| {
            let books = uow.books();
            if books.get(&command.oid).is_none() {
                return Err(LogicError::NotExists.into());
            }

            books.delete(&command.oid)
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetBookByIdHandler;

impl<U: BooksUnitOfWork> CommandHandler<GetBookById, U> for GetBookByIdHandler {
    fn handle(&self, command: GetBookById, uow: &mut U) -> AppResult<Book> {
        atomically(uow, |uow| {
            uow.books()
                .get(&command.oid)
                .ok_or_else(|| LogicError::NotExists.into())
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetBookByTitleHandler;

impl<U: BooksUnitOfWork> CommandHandler<GetBookByTitle, U> for GetBookByTitleHandler {
    fn handle(&self, command: GetBookByTitle, uow: &mut U) -> AppResult<Book> {
        atomically(uow, |uow| {
            uow.books()
                .get_by_title(&command.title)
                .ok_or_else(|| LogicError::NotExists.into())
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetBookByTitleAndAuthorHandler;

impl<U: BooksUnitOfWork> CommandHandler<GetBookByTitleAndAuthor, U>
    for GetBookByTitleAndAuthorHandler
{
    fn handle(&self, command: GetBookByTitleAndAuthor, uow: &mut U) -> AppResult<Book> {
        atomically(uow, |uow| {
            uow.books()
                .get_by_title_and_author(&command.title, &command.author)
                .ok_or_else(|| LogicError::NotExists.into())
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllBooksHandler;

impl<U: BooksUnitOfWork> CommandHandler<GetAllBooks, U> for GetAllBooksHandler {
    fn handle(&self, _command: GetAllBooks, uow: &mut U) -> AppResult<Vec<Book>> {
        atomically(uow, |uow| {
            let library = uow.books().list();
            if library.is_empty() {
                return Err(LogicError::EmptyLibrary.into());
            }
            Ok(library)
        })
    }
}
