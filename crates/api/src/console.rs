//! Interactive console menu over a [`LibraryApi`].
//!
//! Reads one answer per line from `input` and writes prompts and results to
//! `output`. End of input behaves like choosing "Exit".

use std::io::{self, BufRead, Write};

use bibliotheca_catalog::Book;
use bibliotheca_infra::BooksUnitOfWork;

use crate::app::{
    CreateBookScheme, DeleteBookScheme, LibraryApi, ReadAllBookScheme, ReadBookScheme,
    UpdateBookScheme,
};

const MENU: &[&str] = &[
    "",
    "--- Menu of Library ---",
    "1. Add book",
    "2. Delete book",
    "3. Find book",
    "4. Show all books",
    "5. Update book",
    "6. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Create,
    Delete,
    Find,
    ShowAll,
    Update,
    Exit,
}

impl Action {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Action::Create),
            "2" => Some(Action::Delete),
            "3" => Some(Action::Find),
            "4" => Some(Action::ShowAll),
            "5" => Some(Action::Update),
            "6" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// Prompt/answer session over line-oriented IO.
struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Print `prompt` and read one trimmed answer. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_year(&mut self, prompt: &str) -> io::Result<Option<Option<i32>>> {
        let Some(answer) = self.ask(prompt)? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(year) => Ok(Some(Some(year))),
            Err(_) => {
                writeln!(self.output, "Year must be a whole number.")?;
                Ok(Some(None))
            }
        }
    }

    fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    fn show(&mut self, book: &Book) -> io::Result<()> {
        writeln!(
            self.output,
            "{} | {} | {} | {} | {}",
            book.oid(),
            book.title().as_str(),
            book.author().as_str(),
            book.year().value(),
            book.status().as_str()
        )
    }
}

/// Run the menu loop until the user exits or input ends.
pub fn run<U, R, W>(api: &mut LibraryApi<U>, input: R, output: W) -> io::Result<()>
where
    U: BooksUnitOfWork + 'static,
    R: BufRead,
    W: Write,
{
    let mut session = Session { input, output };

    loop {
        for line in MENU {
            session.say(line)?;
        }

        let Some(choice) = session.ask("Select an action (1-6): ")? else {
            return Ok(());
        };
        let Some(action) = Action::parse(&choice) else {
            session.say("Invalid choice! Please select a valid option (1-6).")?;
            continue;
        };

        let finished = match action {
            Action::Create => create(api, &mut session)?,
            Action::Delete => delete(api, &mut session)?,
            Action::Find => find(api, &mut session)?,
            Action::ShowAll => show_all(api, &mut session)?,
            Action::Update => update(api, &mut session)?,
            Action::Exit => return Ok(()),
        };
        if finished {
            return Ok(());
        }
    }
}

// Each action returns Ok(true) when input ended mid-dialogue.

fn create<U, R, W>(api: &mut LibraryApi<U>, session: &mut Session<R, W>) -> io::Result<bool>
where
    U: BooksUnitOfWork + 'static,
    R: BufRead,
    W: Write,
{
    let Some(author) = session.ask("Please write name of the author: ")? else {
        return Ok(true);
    };
    let Some(title) = session.ask("Please write name of the book: ")? else {
        return Ok(true);
    };
    let Some(year) = session.ask_year("Please write the year: ")? else {
        return Ok(true);
    };
    let Some(year) = year else {
        return Ok(false);
    };

    match api.create(CreateBookScheme {
        title,
        author,
        year,
    }) {
        Some(book) => {
            session.say("Book added:")?;
            session.show(&book)?;
        }
        None => session.say("Book was not added.")?,
    }
    Ok(false)
}

fn delete<U, R, W>(api: &mut LibraryApi<U>, session: &mut Session<R, W>) -> io::Result<bool>
where
    U: BooksUnitOfWork + 'static,
    R: BufRead,
    W: Write,
{
    let Some(oid) = session.ask("Please write id of the book: ")? else {
        return Ok(true);
    };

    match api.delete(DeleteBookScheme { oid }) {
        Some(()) => session.say("Book deleted.")?,
        None => session.say("Book was not deleted.")?,
    }
    Ok(false)
}

fn find<U, R, W>(api: &mut LibraryApi<U>, session: &mut Session<R, W>) -> io::Result<bool>
where
    U: BooksUnitOfWork + 'static,
    R: BufRead,
    W: Write,
{
    let Some(oid) = session.ask("Please write id of the book: ")? else {
        return Ok(true);
    };

    match api.read(ReadBookScheme { oid }) {
        Some(book) => session.show(&book)?,
        None => session.say("Book not found.")?,
    }
    Ok(false)
}

fn show_all<U, R, W>(api: &mut LibraryApi<U>, session: &mut Session<R, W>) -> io::Result<bool>
where
    U: BooksUnitOfWork + 'static,
    R: BufRead,
    W: Write,
{
    match api.read_all(ReadAllBookScheme {}) {
        Some(books) => {
            for book in &books {
                session.show(book)?;
            }
        }
        None => session.say("The library is empty.")?,
    }
    Ok(false)
}

fn update<U, R, W>(api: &mut LibraryApi<U>, session: &mut Session<R, W>) -> io::Result<bool>
where
    U: BooksUnitOfWork + 'static,
    R: BufRead,
    W: Write,
{
    let Some(oid) = session.ask("Please write id of the book: ")? else {
        return Ok(true);
    };
    let Some(author) = session.ask("Please write name of the author: ")? else {
        return Ok(true);
    };
    let Some(title) = session.ask("Please write name of the book: ")? else {
        return Ok(true);
    };
    let Some(year) = session.ask_year("Please write the year: ")? else {
        return Ok(true);
    };
    let Some(status) = session.ask("Please write status (in stock / issued): ")? else {
        return Ok(true);
    };
    let Some(year) = year else {
        return Ok(false);
    };

    match api.update(UpdateBookScheme {
        oid,
        title,
        author,
        year,
        status,
    }) {
        Some(book) => {
            session.say("Book updated:")?;
            session.show(&book)?;
        }
        None => session.say("Book was not updated.")?,
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibliotheca_infra::{InMemoryBooksUnitOfWork, InMemoryStore, StoreUnitOfWork};

    fn api() -> LibraryApi<InMemoryBooksUnitOfWork> {
        LibraryApi::new(StoreUnitOfWork::new(InMemoryStore::new()))
    }

    fn session(api: &mut LibraryApi<InMemoryBooksUnitOfWork>, script: &str) -> String {
        let mut out = Vec::new();
        run(api, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_show_all() {
        let mut api = api();

        let out = session(&mut api, "1\nGeorge Orwell\n1984\n1949\n4\n6\n");

        assert!(out.contains("Book added:"));
        assert!(out.contains("| 1984 | George Orwell | 1949 | in stock"));
        assert_eq!(api.bus().unit_of_work().store().records().len(), 1);
    }

    #[test]
    fn invalid_choices_and_years_return_to_the_menu() {
        let mut api = api();

        let out = session(&mut api, "9\n1\nGeorge Orwell\n1984\nnineteen\n6\n");

        assert!(out.contains("Invalid choice!"));
        assert!(out.contains("Year must be a whole number."));
        assert!(api.bus().unit_of_work().store().records().is_empty());
    }

    #[test]
    fn failed_operations_are_reported_not_fatal() {
        let mut api = api();

        let out = session(&mut api, "4\n2\nghost\n3\nghost\n");

        assert!(out.contains("The library is empty."));
        assert!(out.contains("Book was not deleted."));
        assert!(out.contains("Book not found."));
    }

    #[test]
    fn update_changes_status() {
        let mut api = api();
        session(&mut api, "1\nGeorge Orwell\n1984\n1949\n6\n");
        let oid = api.bus().unit_of_work().store().records()[0].oid.clone();

        let out = session(
            &mut api,
            &format!("5\n{oid}\nGeorge Orwell\n1984\n1949\nissued\n6\n"),
        );

        assert!(out.contains("Book updated:"));
        assert_eq!(api.bus().unit_of_work().store().records()[0].status, "issued");
    }

    #[test]
    fn end_of_input_mid_dialogue_exits_cleanly() {
        let mut api = api();

        let out = session(&mut api, "1\nGeorge Orwell\n");

        assert!(out.ends_with("Please write name of the book: "));
        assert!(api.bus().unit_of_work().store().records().is_empty());
    }
}
