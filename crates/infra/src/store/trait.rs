use bibliotheca_catalog::BookRecord;
use bibliotheca_core::AppResult;

/// Durable medium holding the whole catalog as one snapshot.
///
/// A store knows nothing about scopes or dirtiness: it hands out the current
/// snapshot and replaces it wholesale. Snapshot / commit / rollback semantics
/// belong to the unit of work sitting on top of it.
///
/// ## Contract
///
/// - `load` returns records in their persisted order.
/// - `save` overwrites the whole snapshot. It never appends.
/// - A medium that holds nothing yet loads as an empty snapshot.
pub trait BookStore {
    fn load(&self) -> AppResult<Vec<BookRecord>>;

    fn save(&mut self, records: &[BookRecord]) -> AppResult<()>;
}

impl<S: BookStore + ?Sized> BookStore for Box<S> {
    fn load(&self) -> AppResult<Vec<BookRecord>> {
        (**self).load()
    }

    fn save(&mut self, records: &[BookRecord]) -> AppResult<()> {
        (**self).save(records)
    }
}
