use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let records = store.append(record)?;

    let count = records.len();
    let mut result = CmdResult::default().with_records(records);
    result.add_message(CmdMessage::success(format!(
        "Data saved successfully ({} entr{})",
        count,
        if count == 1 { "y" } else { "ies" }
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_and_returns_the_updated_sequence() {
        let mut store = InMemoryStore::new();

        let record = Record::new("ABCDE", "7.4", "25", "water");
        let result = run(&mut store, record.clone()).unwrap();

        assert_eq!(result.records, vec![record]);
    }

    #[test]
    fn accepts_records_with_empty_fields() {
        // The original form never validated its inputs; neither do we.
        let mut store = InMemoryStore::new();

        let result = run(&mut store, Record::new("", "", "", "")).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].ph, "");
    }

    #[test]
    fn reports_the_running_count() {
        let mut store = InMemoryStore::new();
        run(&mut store, Record::new("A", "7", "25", "water")).unwrap();
        let result = run(&mut store, Record::new("B", "7", "25", "water")).unwrap();

        assert!(result.messages[0].content.contains("2 entries"));
    }
}
