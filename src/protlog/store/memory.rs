use super::RecordStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: Record) -> Result<Vec<Record>> {
        self.records.push(record);
        Ok(self.records.clone())
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Record::new(
                    format!("SEQUENCE{}", i + 1),
                    "7.0",
                    "25",
                    format!("solvent {}", i + 1),
                );
                self.store.append(record).unwrap();
            }
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            self.store.append(record).unwrap();
            self
        }
    }
}
