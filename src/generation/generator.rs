use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::debug;

use crate::catalog::ContigCatalog;
use crate::core::header::Header;
use crate::core::types::{InfoValue, Nucleotide, NUCLEOTIDES};
use crate::core::variant::{Genotype, Variant};

/// Inclusive range INFO `DP` values are drawn from
pub const DEFAULT_DEPTH_RANGE: RangeInclusive<i64> = 10..=100;

/// Upper bound on alternate-allele redraws for a single record.
/// With four nucleotides the expected number of draws is 4/3.
pub const MAX_ALLELE_DRAWS: usize = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Cannot place {0} variants on an empty catalog")]
    EmptyCatalog(usize),

    #[error("Depth range {start}..={end} is empty")]
    EmptyDepthRange { start: i64, end: i64 },

    #[error("Position {position} drawn outside contig '{contig}' (length {length})")]
    PositionOutOfRange {
        contig: String,
        position: u64,
        length: u64,
    },

    #[error("No alternate distinct from reference {reference} after {draws} draws")]
    AlleleRejection { reference: Nucleotide, draws: usize },
}

/// Configuration for the variant generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Inclusive range INFO `DP` is drawn from
    pub depth_range: RangeInclusive<i64>,
    /// Genotype assigned to every sample of every record
    pub genotype: Genotype,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            depth_range: DEFAULT_DEPTH_RANGE,
            genotype: Genotype::het(),
        }
    }
}

/// Build a deterministic random source from a seed
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws random single-nucleotide variants on the contigs of a catalog
pub struct VariantGenerator<'a> {
    catalog: &'a ContigCatalog,
    header: &'a Header,
    config: GeneratorConfig,
}

impl<'a> VariantGenerator<'a> {
    pub fn new(catalog: &'a ContigCatalog, header: &'a Header) -> Self {
        Self::with_config(catalog, header, GeneratorConfig::default())
    }

    pub fn with_config(
        catalog: &'a ContigCatalog,
        header: &'a Header,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            catalog,
            header,
            config,
        }
    }

    /// Generate exactly `count` records in no particular order.
    ///
    /// Every record is drawn independently; identical (contig, position) pairs
    /// are allowed.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::EmptyCatalog` if there is nothing to place records
    /// on, `GenerateError::EmptyDepthRange` for an unusable configuration, and
    /// `GenerateError::PositionOutOfRange` / `GenerateError::AlleleRejection` if
    /// a drawn record breaks a structural constraint.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Result<Vec<Variant>, GenerateError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.catalog.is_empty() {
            return Err(GenerateError::EmptyCatalog(count));
        }
        if self.config.depth_range.is_empty() {
            return Err(GenerateError::EmptyDepthRange {
                start: *self.config.depth_range.start(),
                end: *self.config.depth_range.end(),
            });
        }

        let records = (0..count)
            .map(|_| self.generate_one(rng))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Generated {} variants across {} candidate contigs",
            records.len(),
            self.catalog.len()
        );

        Ok(records)
    }

    fn generate_one<R: Rng>(&self, rng: &mut R) -> Result<Variant, GenerateError> {
        let contig = &self.catalog.contigs()[rng.random_range(0..self.catalog.len())];

        let position = rng.random_range(1..=contig.length);
        if !contig.contains(position) {
            return Err(GenerateError::PositionOutOfRange {
                contig: contig.name.clone(),
                position,
                length: contig.length,
            });
        }

        let reference = draw_nucleotide(rng);
        let alternate = draw_alternate(rng, reference)?;
        let depth = rng.random_range(self.config.depth_range.clone());

        let mut variant = Variant::new(contig.name.clone(), position, reference, alternate)
            .with_info("DP", InfoValue::Integer(depth));
        for sample in &self.header.samples {
            variant = variant.with_genotype(sample.clone(), self.config.genotype.clone());
        }

        Ok(variant)
    }
}

fn draw_nucleotide<R: Rng>(rng: &mut R) -> Nucleotide {
    NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())]
}

/// Redraw until the allele differs from `reference`, at most `MAX_ALLELE_DRAWS` times
fn draw_alternate<R: Rng>(rng: &mut R, reference: Nucleotide) -> Result<Nucleotide, GenerateError> {
    for _ in 0..MAX_ALLELE_DRAWS {
        let alternate = draw_nucleotide(rng);
        if alternate != reference {
            return Ok(alternate);
        }
    }

    Err(GenerateError::AlleleRejection {
        reference,
        draws: MAX_ALLELE_DRAWS,
    })
}
