use serde::{Deserialize, Serialize};

/// A single stability observation: a protein sequence plus the conditions it
/// was measured under.
///
/// All four fields are stored exactly as the user typed them. pH and
/// temperature are deliberately NOT parsed as numbers; the file must
/// round-trip whatever text was entered, including empty strings.
///
/// Records carry no identifier or timestamp. The store is append-only, so a
/// record's identity is its position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub sequence: String,
    // On-disk key is "pH", matching the persisted format contract.
    #[serde(rename = "pH")]
    pub ph: String,
    pub temperature: String,
    pub solvent: String,
}

impl Record {
    pub fn new(
        sequence: impl Into<String>,
        ph: impl Into<String>,
        temperature: impl Into<String>,
        solvent: impl Into<String>,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            ph: ph.into(),
            temperature: temperature.into(),
            solvent: solvent.into(),
        }
    }
}
