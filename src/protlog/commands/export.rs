use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ProtlogError, Result};
use crate::model::Record;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a snapshot of `records` to `dest`, fully replacing any previous
/// export. The snapshot is whatever sequence the caller passes in — it may
/// lag the store if the caller holds an older in-memory copy.
pub fn run(records: &[Record], dest: &Path) -> Result<CmdResult> {
    let file = File::create(dest).map_err(ProtlogError::Io)?;
    write_snapshot(file, records)?;

    let mut result = CmdResult::default().with_export_path(dest.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Data downloaded to {}",
        dest.display()
    )));
    Ok(result)
}

fn write_snapshot<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    let content = serde_json::to_string_pretty(records).map_err(ProtlogError::CorruptStore)?;
    writer.write_all(content.as_bytes()).map_err(ProtlogError::Io)?;
    Ok(())
}
