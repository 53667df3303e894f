use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::catalog::human::GRCH38_PRIMARY;
use crate::core::contig::ContigEntry;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate contig in catalog: {0}")]
    DuplicateContig(String),

    #[error("Contig '{0}' has zero length")]
    ZeroLength(String),

    #[error("Contig names must not be empty")]
    EmptyName,

    #[error("Contig name '{0}' contains whitespace or one of ',<>='")]
    InvalidName(String),
}

/// Characters that would break a `##contig` line or the tab-delimited columns
fn is_valid_contig_name(name: &str) -> bool {
    !name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, ',' | '<' | '>' | '='))
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub contigs: Vec<ContigEntry>,
}

/// An ordered, immutable set of contigs
///
/// The position of a contig in the catalog is its rank in canonical sort order.
#[derive(Debug, Clone)]
pub struct ContigCatalog {
    contigs: Vec<ContigEntry>,

    /// Index: contig name -> rank
    name_to_rank: HashMap<String, usize>,
}

impl ContigCatalog {
    /// The built-in GRCh38 catalog: chr1-chr22, chrX, chrY
    #[must_use]
    pub fn human() -> Self {
        let contigs: Vec<ContigEntry> = GRCH38_PRIMARY
            .iter()
            .map(|&(name, length)| ContigEntry::new(name, length))
            .collect();
        let name_to_rank = contigs
            .iter()
            .enumerate()
            .map(|(rank, contig)| (contig.name.clone(), rank))
            .collect();

        Self {
            contigs,
            name_to_rank,
        }
    }

    /// Build a catalog from entries given in canonical order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateContig`, `CatalogError::ZeroLength`,
    /// `CatalogError::EmptyName` or `CatalogError::InvalidName` for malformed entries.
    pub fn from_entries(contigs: Vec<ContigEntry>) -> Result<Self, CatalogError> {
        let mut name_to_rank = HashMap::with_capacity(contigs.len());

        for (rank, contig) in contigs.iter().enumerate() {
            if contig.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !is_valid_contig_name(&contig.name) {
                return Err(CatalogError::InvalidName(contig.name.clone()));
            }
            if contig.length == 0 {
                return Err(CatalogError::ZeroLength(contig.name.clone()));
            }
            if name_to_rank.insert(contig.name.clone(), rank).is_some() {
                return Err(CatalogError::DuplicateContig(contig.name.clone()));
            }
        }

        Ok(Self {
            contigs,
            name_to_rank,
        })
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or holds
    /// malformed entries.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded {} contigs from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Same as [`ContigCatalog::from_entries`], plus JSON parse errors.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_entries(data.contigs)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            contigs: self.contigs.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Get a contig by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ContigEntry> {
        self.name_to_rank.get(name).map(|&idx| &self.contigs[idx])
    }

    /// Canonical sort rank of a contig
    #[must_use]
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.name_to_rank.get(name).copied()
    }

    #[must_use]
    pub fn contigs(&self) -> &[ContigEntry] {
        &self.contigs
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContigEntry> {
        self.contigs.iter()
    }

    /// Number of contigs in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }
}

impl Default for ContigCatalog {
    fn default() -> Self {
        Self::human()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_catalog() {
        let catalog = ContigCatalog::human();
        assert_eq!(catalog.len(), 24);
        assert!(!catalog.is_empty());

        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names[0], "chr1");
        assert_eq!(names[9], "chr10");
        assert_eq!(names[21], "chr22");
        assert_eq!(names[22], "chrX");
        assert_eq!(names[23], "chrY");
    }

    #[test]
    fn test_catalog_get_by_name() {
        let catalog = ContigCatalog::human();
        let chr1 = catalog.get("chr1").unwrap();
        assert_eq!(chr1.length, 248_956_422);
        assert_eq!(catalog.get("chrY").unwrap().length, 57_227_415);
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = ContigCatalog::human();
        assert!(catalog.get("chrM").is_none());
        assert!(catalog.get("1").is_none());
        assert!(catalog.rank("chrM").is_none());
    }

    #[test]
    fn test_rank_is_catalog_order() {
        let catalog = ContigCatalog::human();
        for (idx, contig) in catalog.iter().enumerate() {
            assert_eq!(catalog.rank(&contig.name), Some(idx));
        }
        // Natural order, not lexicographic
        assert!(catalog.rank("chr2") < catalog.rank("chr10"));
    }

    #[test]
    fn test_from_entries_rejects_malformed() {
        let duplicate = vec![ContigEntry::new("a", 1), ContigEntry::new("a", 2)];
        assert!(matches!(
            ContigCatalog::from_entries(duplicate),
            Err(CatalogError::DuplicateContig(name)) if name == "a"
        ));

        let zero = vec![ContigEntry::new("a", 0)];
        assert!(matches!(
            ContigCatalog::from_entries(zero),
            Err(CatalogError::ZeroLength(_))
        ));

        let unnamed = vec![ContigEntry::new("", 10)];
        assert!(matches!(
            ContigCatalog::from_entries(unnamed),
            Err(CatalogError::EmptyName)
        ));
    }

    #[test]
    fn test_from_entries_rejects_unsafe_names() {
        for name in ["chr\t1", "chr 1", "chr1,2", "<chr1>", "chr=1"] {
            assert!(
                matches!(
                    ContigCatalog::from_entries(vec![ContigEntry::new(name, 10)]),
                    Err(CatalogError::InvalidName(n)) if n == name
                ),
                "{name:?} accepted"
            );
        }

        // Common real-world names stay valid
        let catalog = ContigCatalog::from_entries(vec![
            ContigEntry::new("HLA-A*01:01:01:01", 10),
            ContigEntry::new("chrUn_KI270302v1", 10),
            ContigEntry::new("NC_000001.11", 10),
        ]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_catalog_json() {
        let catalog = ContigCatalog::human();
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"contigs\""));
        assert!(json.contains("chrX"));

        let restored = ContigCatalog::from_json(&json).unwrap();
        assert_eq!(restored.contigs(), catalog.contigs());
    }

    #[test]
    fn test_catalog_from_json_invalid() {
        assert!(matches!(
            ContigCatalog::from_json("{\"contigs\": 3}"),
            Err(CatalogError::ParseError(_))
        ));
    }
}
