use crate::config::ProtlogConfig;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod fetch;
pub mod list;
pub mod share;

pub const DATA_FILENAME: &str = "protein_stability_data.json";
pub const EXPORT_FILENAME: &str = "protein_stability_data_download.json";

/// The directory every file this tool owns lives under.
#[derive(Debug, Clone)]
pub struct ProtlogPaths {
    pub data_dir: PathBuf,
}

impl ProtlogPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    pub fn export_file(&self) -> PathBuf {
        self.data_dir.join(EXPORT_FILENAME)
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub sequence: Option<String>,
    pub export_path: Option<PathBuf>,
    pub config: Option<ProtlogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_sequence(mut self, sequence: String) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ProtlogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
