use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use bibliotheca_core::{
    AppResult, Entity, InfrastructureError, Oid, ValidationError, ValueObject,
};

use crate::values::{Author, BookStatus, Status, Title, Year};

/// Entity: a book in the library catalog.
///
/// Identity is the [`Oid`] assigned at creation. Equality and hashing use the
/// oid alone: two books with identical fields but different oids are distinct.
#[derive(Debug, Clone)]
pub struct Book {
    oid: Oid,
    title: Title,
    author: Author,
    year: Year,
    status: Status,
}

impl Book {
    /// Create a new book with a fresh identifier.
    pub fn new(title: Title, author: Author, year: Year, status: Status) -> Self {
        Self::with_oid(Oid::new(), title, author, year, status)
    }

    /// Rebuild a book that already has an identifier.
    pub fn with_oid(oid: Oid, title: Title, author: Author, year: Year, status: Status) -> Self {
        Self {
            oid,
            title,
            author,
            year,
            status,
        }
    }

    /// Create a new book from raw fields, validating each one.
    ///
    /// Fails with the first [`ValidationError`] raised by a field, checked in
    /// the order title, author, year, status.
    pub fn from_raw(
        title: &str,
        author: &str,
        year: i32,
        status: &str,
    ) -> Result<Self, ValidationError> {
        Self::from_raw_with_oid(Oid::new(), title, author, year, status)
    }

    pub fn from_raw_with_oid(
        oid: Oid,
        title: &str,
        author: &str,
        year: i32,
        status: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::with_oid(
            oid,
            Title::new(title)?,
            Author::new(author)?,
            Year::new(year)?,
            Status::new(status)?,
        ))
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_issued(&self) -> bool {
        self.status.kind() == BookStatus::Issued
    }

    /// Persistence projection of this book.
    pub fn to_record(&self) -> BookRecord {
        BookRecord {
            oid: self.oid.to_string(),
            title: self.title.as_str().to_string(),
            author: self.author.as_str().to_string(),
            year: self.year.value(),
            status: self.status.as_str().to_string(),
        }
    }

    /// Field-by-field projection, with `exclude`d keys removed and `include`d
    /// keys added or overriding existing ones.
    pub fn to_dict(
        &self,
        exclude: &[&str],
        include: Option<Map<String, JsonValue>>,
    ) -> Map<String, JsonValue> {
        let mut data = Map::new();
        data.insert("oid".into(), self.oid.as_str().into());
        data.insert("title".into(), self.title.as_str().into());
        data.insert("author".into(), self.author.as_str().into());
        data.insert("year".into(), self.year.value().into());
        data.insert("status".into(), self.status.as_str().into());

        for key in exclude {
            data.remove(*key);
        }
        if let Some(include) = include {
            data.extend(include);
        }

        data
    }

    /// Rebuild a book from a [`Book::to_dict`]-shaped object.
    pub fn from_dict(data: Map<String, JsonValue>) -> AppResult<Self> {
        let record: BookRecord = serde_json::from_value(JsonValue::Object(data))
            .map_err(|e| InfrastructureError::serialization(e.to_string()))?;
        Ok(Book::try_from(record)?)
    }

    /// Whether every field (not just the identity) matches `other`.
    pub fn same_fields_as(&self, other: &Book) -> bool {
        self.oid == other.oid
            && self.title == other.title
            && self.author == other.author
            && self.year == other.year
            && self.status == other.status
    }
}

impl Entity for Book {
    type Id = Oid;

    fn id(&self) -> &Self::Id {
        &self.oid
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl Eq for Book {}

impl core::hash::Hash for Book {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.oid.hash(state);
    }
}

/// One persisted book, as stored in the JSON data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub oid: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    BookStatus::InStock.as_str().to_string()
}

impl TryFrom<BookRecord> for Book {
    type Error = ValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Book::from_raw_with_oid(
            Oid::from(record.oid),
            &record.title,
            &record.author,
            record.year,
            &record.status,
        )
    }
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        book.to_record()
    }
}
