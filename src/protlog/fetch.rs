use crate::error::{ProtlogError, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.uniprot.org/uniprot";

/// Abstract interface for sequence lookup.
///
/// Implementations return the cleaned sequence only (see [`clean_fasta`]);
/// callers can assume the result contains nothing but letters.
pub trait SequenceSource {
    fn fetch(&self, id: &str) -> Result<String>;
}

/// Looks up sequences via the UniProt FASTA endpoint.
pub struct UniProtClient {
    base_url: String,
}

impl UniProtClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for UniProtClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for UniProtClient {
    fn fetch(&self, id: &str) -> Result<String> {
        let url = format!("{}/{}.fasta", self.base_url, id);
        let response = reqwest::blocking::get(&url)?;

        if !response.status().is_success() {
            return Err(ProtlogError::NotFound(format!(
                "No sequence for UniProt ID '{}'",
                id
            )));
        }

        let fasta = response.text()?;
        Ok(clean_fasta(&fasta))
    }
}

/// Reduce FASTA text to a bare sequence: drop header lines (starting with
/// `>`) and every non-alphabetic character.
pub fn clean_fasta(fasta: &str) -> String {
    fasta
        .lines()
        .filter(|line| !line.starts_with('>'))
        .flat_map(|line| line.chars())
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}
