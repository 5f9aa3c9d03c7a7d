use super::RecordStore;
use crate::error::{ProtlogError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Production store: one JSON array file holding every record.
///
/// The file is created lazily on first append. `load` on a missing file
/// returns an empty sequence without writing anything.
pub struct FileStore {
    data_file: PathBuf,
    // Mirror of the last successfully persisted state.
    records: Vec<Record>,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
            records: Vec::new(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Read and parse the backing file without touching the mirror.
    fn read_records(&self) -> Result<Vec<Record>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(ProtlogError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(ProtlogError::CorruptStore)?;
        Ok(records)
    }

    fn write_records(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ProtlogError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(records).map_err(ProtlogError::CorruptStore)?;
        fs::write(&self.data_file, content).map_err(ProtlogError::Io)?;
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        let records = self.read_records()?;
        self.records = records.clone();
        Ok(records)
    }

    fn append(&mut self, record: Record) -> Result<Vec<Record>> {
        let mut records = self.read_records()?;
        records.push(record);

        // Persist first; the mirror only advances once the file has the
        // new state, so a failed write leaves both consistent.
        self.write_records(&records)?;
        self.records = records.clone();
        Ok(records)
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}
