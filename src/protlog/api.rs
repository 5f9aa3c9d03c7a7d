//! # API Facade
//!
//! A **thin facade** over the command layer: one entry point for every
//! protlog operation, regardless of the UI driving it.
//!
//! The facade dispatches to `commands/*.rs` and returns structured
//! `Result<CmdResult>` values. It holds no business logic and performs no
//! terminal I/O.
//!
//! `ProtlogApi<S, F>` is generic over both collaborators:
//! - Production: `ProtlogApi<FileStore, UniProtClient>`
//! - Testing: `ProtlogApi<InMemoryStore, FixedSource>`
//!
//! This keeps every layer above the store testable without a filesystem or
//! a network.

use crate::commands;
use crate::error::Result;
use crate::fetch::SequenceSource;
use crate::model::Record;
use crate::store::RecordStore;

/// The main API facade for protlog operations.
pub struct ProtlogApi<S: RecordStore, F: SequenceSource> {
    store: S,
    source: F,
    paths: commands::ProtlogPaths,
}

impl<S: RecordStore, F: SequenceSource> ProtlogApi<S, F> {
    pub fn new(store: S, source: F, paths: commands::ProtlogPaths) -> Self {
        Self {
            store,
            source,
            paths,
        }
    }

    pub fn fetch_sequence(&self, id: &str) -> Result<commands::CmdResult> {
        commands::fetch::run(&self.source, id)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn list_records(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    /// Export the current in-memory copy, reloading from disk first so a
    /// fresh process exports what is actually stored.
    pub fn export_records(&mut self) -> Result<commands::CmdResult> {
        let records = self.store.load()?;
        commands::export::run(&records, &self.paths.export_file())
    }

    pub fn share_export(&self) -> Result<commands::CmdResult> {
        commands::share::run(&self.paths.export_file())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::ProtlogPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ProtlogPaths};
