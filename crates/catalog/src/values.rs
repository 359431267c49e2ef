//! Value objects describing a book.

use chrono::{DateTime, Datelike, Local, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use bibliotheca_core::{ValidationError, ValueObject};

/// Maximum length, in characters, of titles and author names.
pub const MAX_TEXT_LEN: usize = 100;

/// Earliest accepted publication year.
pub const MIN_YEAR: i32 = 1000;

// Full name: "First Last" or "First Middle Last", every part capitalized and
// optionally hyphen-joined. Latin and Cyrillic are not mixed within a name.
static AUTHOR_FULL_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"[А-ЯЁ][а-яё]+(?:-[А-ЯЁ][а-яё]+)?(?:\s+[А-ЯЁ][а-яё]+(?:-[А-ЯЁ][а-яё]+)?){1,2}",
        r"|",
        r"[A-Z][a-z]+(?:-[A-Z][a-z]+)?(?:\s+[A-Z][a-z]+(?:-[A-Z][a-z]+)?){1,2}",
        r")$",
    ))
    .expect("author name pattern is valid")
});

static CYRILLIC_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[а-яё]+").expect("cyrillic word pattern is valid"));

// Matched against a single lowercased Cyrillic word. Negated classes spell
// out the letters that may follow a stem, e.g. "еб" not followed by "ор",
// "ой" or "рач", and "хули" not followed by "ган".
static OBSCENE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        // ёб / ебать with verbal prefixes and compounds (долбоёб, заебись)
        r"(?:у|[нз]а|(?:хитро|не)?вз?[ыьъ]|с[ьъ]|(?:и|ра)[зс]ъ?",
        r"|(?:о[тб]|п[оа]д)[ьъ]?|[а-яё]+?[оаеи])?",
        r"(?:[её](?:б(?:[а-нпс-яё][а-яё]*|о(?:[а-ик-пс-яё][а-яё]*)?",
        r"|р(?:[б-яё][а-яё]*|а(?:[а-цш-яё][а-яё]*)?)?)?|п[уа](?:ц|тс)[а-яё]*)",
        r"|и[пб][ае][тцд][ьъ][а-яё]*)",
        // ху… with prefixes (охуенный, ахуеть, нихуя, хули)
        r"|(?:н[иеа]|(?:ра|и)[зс]|[зд]?[ао](?:т|дн[оа])?|с(?:м[еи])?|а[пб]ч|в[ъы]?|пр[еи])?",
        r"ху(?:[яйиеёю][а-яё]*",
        r"|л+и(?:[а-вд-яё][а-яё]*|г(?:[б-яё][а-яё]*|а(?:[а-мо-яё][а-яё]*)?)?)?)",
        r"|бл(?:[эя]|еа?)(?:[дт][ьъ]?)?",
        // stems allowed anywhere inside the word
        r"|[а-яё]*?(?:(?:п(?:[иеё]зд|ид[аое]?р|ед(?:[аое]р|ик)|охую)|бля(?:[дбц]|тс)",
        r"|[ое]ху[яйиеё]|хуйн)[а-яё]*|педр(?:[а-нп-яё][а-яё]*)?)",
        r"|(?:о[тб]?|про|на|вы)?м(?:анд(?:[ауеыи](?:л(?:и[сзщ])?[ауеиы])?|ой|[ао]в[а-яё]*",
        r"|юк(?:ов|[ауи])?|е[нт]ь|ища)|уд(?:[яаиое][а-яё]+|е?н(?:[ьюия]|ей))",
        r"|[ао]л[ао]ф[ьъ](?:[яиюе]|[еёо]й))",
        r"|елд[ауые][а-яё]*",
        r"|ля[тд]ь",
        r"|(?:[нз]а|по)х",
        r")$",
    ))
    .expect("obscene word pattern is valid")
});

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_too_long(value: &str) -> bool {
    value.chars().count() > MAX_TEXT_LEN
}

fn contains_obscenity(value: &str) -> bool {
    let lowered = value.to_lowercase();
    CYRILLIC_WORD
        .find_iter(&lowered)
        .any(|word| OBSCENE_WORD.is_match(word.as_str()))
}

/// Name of a book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl ValueObject for Title {
    type Raw = String;

    fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if is_blank(&raw) {
            return Err(ValidationError::EmptyText);
        }
        if is_too_long(&raw) {
            return Err(ValidationError::too_long(raw));
        }
        if contains_obscenity(&raw) {
            return Err(ValidationError::obscene(raw));
        }
        Ok(Self(raw))
    }

    fn as_generic_type(&self) -> &String {
        &self.0
    }
}

impl Title {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Full name of a book's author.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author(String);

impl ValueObject for Author {
    type Raw = String;

    fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if is_blank(&raw) {
            return Err(ValidationError::EmptyText);
        }
        if is_too_long(&raw) {
            return Err(ValidationError::too_long(raw));
        }
        if !AUTHOR_FULL_NAME.is_match(&raw) {
            return Err(ValidationError::bad_name(raw));
        }
        Ok(Self(raw))
    }

    fn as_generic_type(&self) -> &String {
        &self.0
    }
}

impl Author {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Year the book was written, between [`MIN_YEAR`] and the current local year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl ValueObject for Year {
    type Raw = i32;

    fn new(raw: impl Into<i32>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !(MIN_YEAR..=current_year()).contains(&raw) {
            return Err(ValidationError::FakeYear { value: raw });
        }
        Ok(Self(raw))
    }

    fn as_generic_type(&self) -> &i32 {
        &self.0
    }
}

impl Year {
    pub fn value(self) -> i32 {
        self.0
    }
}

/// Current calendar year in the local time zone; the upper bound for [`Year`].
pub fn current_year() -> i32 {
    calendar_year(&Local::now())
}

fn calendar_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

/// Whether a copy of the book is on the shelf.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "in stock")]
    InStock,
    #[serde(rename = "issued")]
    Issued,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::InStock, BookStatus::Issued];

    pub fn as_str(self) -> &'static str {
        match self {
            BookStatus::InStock => "in stock",
            BookStatus::Issued => "issued",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl core::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book status as a validated string, one of [`BookStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Status(String);

impl ValueObject for Status {
    type Raw = String;

    fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if BookStatus::parse(&raw).is_none() {
            return Err(ValidationError::invalid_status(raw));
        }
        Ok(Self(raw))
    }

    fn as_generic_type(&self) -> &String {
        &self.0
    }
}

impl Status {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> BookStatus {
        // Only constructible from a valid enumeration member.
        BookStatus::parse(&self.0).unwrap_or_default()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::from(BookStatus::InStock)
    }
}

impl From<BookStatus> for Status {
    fn from(value: BookStatus) -> Self {
        Self(value.as_str().to_string())
    }
}
