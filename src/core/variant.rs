use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::{InfoValue, Nucleotide};

/// A per-sample genotype call: allele indices into `[reference, alternates...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    /// Allele indices, 0 = reference, 1.. = alternates
    pub alleles: Vec<usize>,

    /// Rendered with `|` instead of `/` when set
    #[serde(default)]
    pub phased: bool,
}

impl Genotype {
    #[must_use]
    pub fn unphased(alleles: Vec<usize>) -> Self {
        Self {
            alleles,
            phased: false,
        }
    }

    /// Heterozygous reference/first-alternate call (`0/1`)
    #[must_use]
    pub fn het() -> Self {
        Self::unphased(vec![0, 1])
    }

    /// Parse a `GT` value such as `0/1` or `1|0`. Missing calls (`.`) are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let phased = s.contains('|');
        let alleles = s
            .split(['/', '|'])
            .map(|a| a.parse::<usize>().ok())
            .collect::<Option<Vec<_>>>()?;

        if alleles.is_empty() {
            return None;
        }

        Some(Self { alleles, phased })
    }

    /// Check that every allele index refers to an allele of a record with
    /// `allele_count` alleles (reference included)
    #[must_use]
    pub fn is_valid_for(&self, allele_count: usize) -> bool {
        !self.alleles.is_empty() && self.alleles.iter().all(|&a| a < allele_count)
    }
}

impl std::fmt::Display for Genotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = if self.phased { "|" } else { "/" };
        let rendered: Vec<String> = self.alleles.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(separator))
    }
}

/// A single-nucleotide variant record
///
/// The allele set is `[reference, alternates...]`; generated records carry exactly
/// one alternate, but nothing here assumes that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Name of the contig the variant lies on
    pub contig: String,

    /// 1-based position
    pub position: u64,

    pub reference: Nucleotide,

    pub alternates: Vec<Nucleotide>,

    /// INFO values keyed by field ID
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub info: BTreeMap<String, InfoValue>,

    /// Genotype calls keyed by sample name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub genotypes: BTreeMap<String, Genotype>,
}

impl Variant {
    pub fn new(
        contig: impl Into<String>,
        position: u64,
        reference: Nucleotide,
        alternate: Nucleotide,
    ) -> Self {
        Self {
            contig: contig.into(),
            position,
            reference,
            alternates: vec![alternate],
            info: BTreeMap::new(),
            genotypes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_info(mut self, id: impl Into<String>, value: InfoValue) -> Self {
        self.info.insert(id.into(), value);
        self
    }

    #[must_use]
    pub fn with_genotype(mut self, sample: impl Into<String>, genotype: Genotype) -> Self {
        self.genotypes.insert(sample.into(), genotype);
        self
    }

    /// 0-based start of the variant
    #[must_use]
    pub fn start(&self) -> u64 {
        self.position.saturating_sub(1)
    }

    /// 1-based inclusive end of the variant (single-base alleles span one base)
    #[must_use]
    pub fn end(&self) -> u64 {
        self.position
    }

    /// Number of alleles, reference included
    #[must_use]
    pub fn allele_count(&self) -> usize {
        1 + self.alternates.len()
    }

    /// Check that there is at least one alternate and none equals the reference
    #[must_use]
    pub fn has_distinct_alleles(&self) -> bool {
        !self.alternates.is_empty() && self.alternates.iter().all(|&alt| alt != self.reference)
    }

    /// Depth stored under INFO `DP`, if present
    #[must_use]
    pub fn depth(&self) -> Option<i64> {
        self.info.get("DP").and_then(InfoValue::as_integer)
    }
}
