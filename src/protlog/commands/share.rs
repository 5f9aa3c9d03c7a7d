use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::share::share_file;
use std::path::Path;

pub fn run(export_path: &Path) -> Result<CmdResult> {
    share_file(export_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Handed {} to the system share dialog",
        export_path.display()
    )));
    Ok(result)
}
