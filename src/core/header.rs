use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::catalog::ContigCatalog;
use crate::core::contig::ContigEntry;
use crate::core::types::{FieldType, Number};
use crate::core::variant::Variant;

/// VCF version declared in `##fileformat`
pub const FILE_FORMAT: &str = "VCFv4.2";

/// Value of the `##source` line
pub const SOURCE: &str = "varsynth";

/// Sample name used when the caller does not supply one
pub const DEFAULT_SAMPLE: &str = "SAMPLE1";

/// FORMAT key carrying the genotype call
pub const GENOTYPE_KEY: &str = "GT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeaderError {
    #[error("At least one sample name is required")]
    NoSamples,

    #[error("Sample names must not be empty")]
    EmptySampleName,

    #[error("Sample name '{0}' contains whitespace")]
    InvalidSampleName(String),

    #[error("Duplicate sample name: {0}")]
    DuplicateSample(String),
}

/// A record that does not agree with the header it is written under
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Contig '{0}' is not declared in the header")]
    UndeclaredContig(String),

    #[error("Position {position} is outside contig '{contig}' (length {length})")]
    PositionOutOfRange {
        contig: String,
        position: u64,
        length: u64,
    },

    #[error("Variant at {contig}:{position} has no alternate distinct from the reference")]
    IdenticalAlleles { contig: String, position: u64 },

    #[error("INFO field '{0}' is not declared in the header")]
    UndeclaredInfo(String),

    #[error("INFO field '{id}' is declared as {declared} but holds a {actual} value")]
    InfoTypeMismatch {
        id: String,
        declared: FieldType,
        actual: FieldType,
    },

    #[error("FORMAT field '{0}' is not declared in the header")]
    UndeclaredFormat(String),

    #[error("Sample '{0}' is not declared in the header")]
    UndeclaredSample(String),

    #[error("Genotype {genotype} for sample '{sample}' references an allele outside 0..{allele_count}")]
    InvalidGenotype {
        sample: String,
        genotype: String,
        allele_count: usize,
    },
}

/// Definition of a single INFO or FORMAT field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub number: Number,
    pub ty: FieldType,
    pub description: String,
}

impl FieldDefinition {
    pub fn new(
        id: impl Into<String>,
        number: Number,
        ty: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            ty,
            description: description.into(),
        }
    }

    /// Render as a `##INFO` or `##FORMAT` line, `key` being `INFO` or `FORMAT`
    #[must_use]
    pub fn to_header_line(&self, key: &str) -> String {
        format!(
            "##{key}=<ID={},Number={},Type={},Description=\"{}\">",
            self.id,
            self.number,
            self.ty,
            self.description.replace('"', "\\\"")
        )
    }
}

/// The VCF meta-information block plus the sample list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub file_format: String,

    pub source: String,

    /// Written as `##fileDate` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_date: Option<NaiveDate>,

    /// Declared contigs, in canonical order
    pub contigs: Vec<ContigEntry>,

    /// INFO definitions, in declaration order
    pub infos: Vec<FieldDefinition>,

    /// FORMAT definitions, in declaration order
    pub formats: Vec<FieldDefinition>,

    /// Sample names, in column order
    pub samples: Vec<String>,
}

impl Header {
    #[must_use]
    pub fn with_file_date(mut self, date: NaiveDate) -> Self {
        self.file_date = Some(date);
        self
    }

    #[must_use]
    pub fn contig(&self, name: &str) -> Option<&ContigEntry> {
        self.contigs.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn info(&self, id: &str) -> Option<&FieldDefinition> {
        self.infos.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn format(&self, id: &str) -> Option<&FieldDefinition> {
        self.formats.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn has_sample(&self, name: &str) -> bool {
        self.samples.iter().any(|s| s == name)
    }

    /// Check that a record only references contigs, fields and samples declared here,
    /// and that its coordinates and genotype indices are structurally valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] found.
    pub fn check_variant(&self, variant: &Variant) -> Result<(), RecordError> {
        let contig = self
            .contig(&variant.contig)
            .ok_or_else(|| RecordError::UndeclaredContig(variant.contig.clone()))?;

        if !contig.contains(variant.position) {
            return Err(RecordError::PositionOutOfRange {
                contig: contig.name.clone(),
                position: variant.position,
                length: contig.length,
            });
        }

        if !variant.has_distinct_alleles() {
            return Err(RecordError::IdenticalAlleles {
                contig: variant.contig.clone(),
                position: variant.position,
            });
        }

        for (id, value) in &variant.info {
            let definition = self
                .info(id)
                .ok_or_else(|| RecordError::UndeclaredInfo(id.clone()))?;
            if definition.ty != value.field_type() {
                return Err(RecordError::InfoTypeMismatch {
                    id: id.clone(),
                    declared: definition.ty,
                    actual: value.field_type(),
                });
            }
        }

        if !variant.genotypes.is_empty() && self.format(GENOTYPE_KEY).is_none() {
            return Err(RecordError::UndeclaredFormat(GENOTYPE_KEY.to_string()));
        }

        let allele_count = variant.allele_count();
        for (sample, genotype) in &variant.genotypes {
            if !self.has_sample(sample) {
                return Err(RecordError::UndeclaredSample(sample.clone()));
            }
            if !genotype.is_valid_for(allele_count) {
                return Err(RecordError::InvalidGenotype {
                    sample: sample.clone(),
                    genotype: genotype.to_string(),
                    allele_count,
                });
            }
        }

        Ok(())
    }
}

/// Build the header for the human catalog with the given samples
///
/// # Errors
///
/// Returns a [`HeaderError`] if the sample list is empty or contains an empty,
/// whitespace-bearing or duplicate name.
pub fn build_header<S: AsRef<str>>(sample_names: &[S]) -> Result<Header, HeaderError> {
    build_header_with_catalog(sample_names, &ContigCatalog::human())
}

/// Build a header declaring every contig of `catalog`, INFO `DP`, FORMAT `GT`
/// and the given samples
///
/// # Errors
///
/// Same as [`build_header`].
pub fn build_header_with_catalog<S: AsRef<str>>(
    sample_names: &[S],
    catalog: &ContigCatalog,
) -> Result<Header, HeaderError> {
    let samples = validate_sample_names(sample_names)?;

    Ok(Header {
        file_format: FILE_FORMAT.to_string(),
        source: SOURCE.to_string(),
        file_date: None,
        contigs: catalog.contigs().to_vec(),
        infos: vec![FieldDefinition::new(
            "DP",
            Number::Count(1),
            FieldType::Integer,
            "Total Depth",
        )],
        formats: vec![FieldDefinition::new(
            GENOTYPE_KEY,
            Number::Count(1),
            FieldType::String,
            "Genotype",
        )],
        samples,
    })
}

fn validate_sample_names<S: AsRef<str>>(sample_names: &[S]) -> Result<Vec<String>, HeaderError> {
    if sample_names.is_empty() {
        return Err(HeaderError::NoSamples);
    }

    let mut seen = HashSet::new();
    let mut samples = Vec::with_capacity(sample_names.len());

    for name in sample_names {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(HeaderError::EmptySampleName);
        }
        // Sample names become tab-delimited column headers
        if name.chars().any(char::is_whitespace) {
            return Err(HeaderError::InvalidSampleName(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(HeaderError::DuplicateSample(name.to_string()));
        }
        samples.push(name.to_string());
    }

    Ok(samples)
}
