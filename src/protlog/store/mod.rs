//! # Storage Layer
//!
//! This module defines the storage abstraction for protlog. The
//! [`RecordStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All records in a single JSON array file
//!   - Pretty-printed (2-space indent) so the file stays diffable and
//!     readable in any text editor
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Contract
//!
//! The on-disk file is the single source of truth. The store keeps an
//! in-memory mirror ([`RecordStore::records`]) that reflects the last
//! successfully loaded or appended state; a failed write leaves both the
//! file and the mirror untouched.
//!
//! Every append is a full-file rewrite: load, push, serialize the whole
//! sequence back. There is no locking or write-ahead log; the process model
//! guarantees a single logical writer, and a crash between load and write
//! loses only the pending record.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── protein_stability_data.json           # JSON array of records
//! ├── protein_stability_data_download.json  # last exported snapshot
//! └── config.json                           # configuration
//! ```

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for observation storage.
///
/// Implementations must preserve insertion order: the order records were
/// appended is the order `load` returns them in.
pub trait RecordStore {
    /// Reload all records from the backing store.
    ///
    /// A store that does not exist yet yields an empty sequence and must
    /// not create it.
    fn load(&mut self) -> Result<Vec<Record>>;

    /// Append a record and persist the full updated sequence, returning it.
    ///
    /// On failure the store's previous state (and [`records`](Self::records))
    /// is left unchanged.
    fn append(&mut self, record: Record) -> Result<Vec<Record>>;

    /// The last successfully loaded or appended sequence.
    fn records(&self) -> &[Record];
}
