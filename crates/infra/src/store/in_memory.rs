use bibliotheca_catalog::BookRecord;
use bibliotheca_core::AppResult;

use super::r#trait::BookStore;

/// In-memory book store.
///
/// Intended for tests/dev. Counts saves so callers can tell whether a scope
/// actually committed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<BookRecord>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `records`.
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Number of successful `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> AppResult<Vec<BookRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[BookRecord]) -> AppResult<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(oid: &str) -> BookRecord {
        BookRecord {
            oid: oid.to_string(),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
            status: "in stock".to_string(),
        }
    }

    #[test]
    fn save_overwrites_the_whole_snapshot() {
        let mut store = InMemoryStore::with_records(vec![record("a"), record("b")]);

        store.save(&[record("c")]).unwrap();

        assert_eq!(store.load().unwrap(), vec![record("c")]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn empty_store_loads_empty_snapshot() {
        assert!(InMemoryStore::new().load().unwrap().is_empty());
    }
}
