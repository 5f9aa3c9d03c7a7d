use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ProtlogError, Result};
use crate::fetch::SequenceSource;

pub fn run<F: SequenceSource>(source: &F, id: &str) -> Result<CmdResult> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ProtlogError::Api(
            "Please enter a valid UniProt ID".to_string(),
        ));
    }

    let sequence = source.fetch(id)?;

    let mut result = CmdResult::default().with_sequence(sequence.clone());
    if sequence.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "UniProt ID {} returned an empty sequence",
            id
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Fetched {} residues for {}",
            sequence.len(),
            id
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    /// Canned source so tests never touch the network.
    pub struct FixedSource(pub String);

    impl SequenceSource for FixedSource {
        fn fetch(&self, _id: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    pub struct FailingSource;

    impl SequenceSource for FailingSource {
        fn fetch(&self, id: &str) -> Result<String> {
            Err(ProtlogError::NotFound(format!(
                "No sequence for UniProt ID '{}'",
                id
            )))
        }
    }

    #[test]
    fn returns_the_cleaned_sequence() {
        let source = FixedSource("ABCDE".to_string());
        let result = run(&source, "P12345").unwrap();
        assert_eq!(result.sequence.as_deref(), Some("ABCDE"));
    }

    #[test]
    fn rejects_blank_id_without_calling_the_source() {
        struct PanicSource;
        impl SequenceSource for PanicSource {
            fn fetch(&self, _id: &str) -> Result<String> {
                panic!("source must not be called for a blank id");
            }
        }

        let err = run(&PanicSource, "   ").unwrap_err();
        assert!(matches!(err, ProtlogError::Api(_)));
    }

    #[test]
    fn propagates_lookup_failure() {
        let err = run(&FailingSource, "NOPE").unwrap_err();
        assert!(matches!(err, ProtlogError::NotFound(_)));
    }

    #[test]
    fn warns_on_empty_sequence() {
        let source = FixedSource(String::new());
        let result = run(&source, "P12345").unwrap();
        assert_eq!(result.sequence.as_deref(), Some(""));
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    // The fetched sequence feeds straight into a record; make sure the two
    // shapes stay compatible.
    #[test]
    fn fetched_sequence_slots_into_a_record() {
        let source = FixedSource("MKVL".to_string());
        let result = run(&source, "P1").unwrap();
        let record = Record::new(result.sequence.unwrap(), "7.4", "25", "water");
        assert_eq!(record.sequence, "MKVL");
    }
}
