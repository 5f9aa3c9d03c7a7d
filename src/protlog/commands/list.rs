use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let records = store.load()?;

    let mut result = CmdResult::default().with_records(records);
    if result.records.is_empty() {
        result.add_message(CmdMessage::info("No saved data."));
    }
    Ok(result)
}
