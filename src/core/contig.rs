use serde::{Deserialize, Serialize};

/// A single contig/sequence in the reference the synthetic variants are placed on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContigEntry {
    /// Sequence name (ID in `##contig` lines, CHROM column in records)
    pub name: String,

    /// Sequence length, 1-based (valid positions are `1..=length`)
    pub length: u64,
}

impl ContigEntry {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Check whether a 1-based position lies on this contig
    #[must_use]
    pub fn contains(&self, position: u64) -> bool {
        (1..=self.length).contains(&position)
    }

    /// Render the `##contig` meta-information line for this entry
    #[must_use]
    pub fn to_header_line(&self) -> String {
        format!("##contig=<ID={},length={}>", self.name, self.length)
    }
}
