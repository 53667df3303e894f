//! Centralized validation and helper functions.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::catalog::{CatalogError, ContigCatalog};
use crate::generation::is_sorted;
use crate::parsing::vcf::ParsedVcf;

/// A written file that does not hold what was expected
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Expected {expected} records, found {found}")]
    RecordCount { expected: usize, found: usize },

    #[error("Expected samples {expected:?}, found {found:?}")]
    Samples {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Header contigs are malformed: {0}")]
    Contigs(#[from] CatalogError),

    #[error("Record {index} ({contig}:{position}) is invalid: {reason}")]
    InvalidRecord {
        index: usize,
        contig: String,
        position: u64,
        reason: String,
    },

    #[error("Records are not in canonical (contig, position) order")]
    Unsorted,
}

/// Summary of a verified file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifySummary {
    pub records: usize,
    pub contigs_used: usize,
}

/// Check a parsed VCF for the structural properties every synthesized file has:
/// the expected record count and samples, positions within declared contig
/// lengths, distinct alleles, in-range genotype indices, and canonical order.
///
/// # Errors
///
/// Returns the first [`VerifyError`] found.
pub fn verify_parsed_vcf(
    parsed: &ParsedVcf,
    expected_records: usize,
    expected_samples: &[String],
) -> Result<VerifySummary, VerifyError> {
    if parsed.records.len() != expected_records {
        return Err(VerifyError::RecordCount {
            expected: expected_records,
            found: parsed.records.len(),
        });
    }

    if parsed.samples != expected_samples {
        return Err(VerifyError::Samples {
            expected: expected_samples.to_vec(),
            found: parsed.samples.clone(),
        });
    }

    // Header contig order is the canonical order
    let catalog = ContigCatalog::from_entries(parsed.contigs.clone())?;

    let mut contigs_used = HashSet::new();
    for (index, record) in parsed.records.iter().enumerate() {
        let invalid = |reason: String| VerifyError::InvalidRecord {
            index,
            contig: record.contig.clone(),
            position: record.position,
            reason,
        };

        let contig = catalog
            .get(&record.contig)
            .ok_or_else(|| invalid("contig not declared in header".to_string()))?;
        if !contig.contains(record.position) {
            return Err(invalid(format!(
                "position outside 1..={}",
                contig.length
            )));
        }
        if !record.has_distinct_alleles() {
            return Err(invalid("alternate equals reference".to_string()));
        }
        for (sample, genotype) in &record.genotypes {
            if !genotype.is_valid_for(record.allele_count()) {
                return Err(invalid(format!("genotype {genotype} for {sample}")));
            }
        }

        contigs_used.insert(record.contig.as_str());
    }

    if !is_sorted(&parsed.records, &catalog) {
        return Err(VerifyError::Unsorted);
    }

    Ok(VerifySummary {
        records: parsed.records.len(),
        contigs_used: contigs_used.len(),
    })
}

/// Compute the MD5 digest of a file's bytes as lowercase hex.
///
/// Runs with the same seed, sample and count produce the same digest.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn file_md5(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut context = md5::Context::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        context.consume(&buffer[..n]);
    }

    Ok(format!("{:x}", context.compute()))
}

/// Validate that a string is a valid MD5 checksum (32 hex characters).
///
/// # Examples
///
/// ```
/// use varsynth::utils::validation::is_valid_md5;
///
/// assert!(is_valid_md5("6aef897c3d6ff0c78aff06ac189178dd"));
/// assert!(!is_valid_md5("not-an-md5"));
/// assert!(!is_valid_md5("6aef897c3d6ff0c78aff06ac189178d")); // 31 chars
/// ```
#[must_use]
pub fn is_valid_md5(s: &str) -> bool {
    s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit())
}
