//! # varsynth
//!
//! A library for synthesizing well-formed VCF files filled with random but
//! structurally valid variant records, for use as fixtures when testing
//! genomics tooling.
//!
//! The pipeline is: a [`ContigCatalog`] describes the reference, [`build_header`]
//! declares the contigs, fields and samples, a [`VariantGenerator`] draws records,
//! [`sort_variants`] puts them in canonical (contig, position) order and
//! [`write_vcf_file`] writes them out.
//!
//! ## Guarantees
//!
//! - **Valid coordinates**: every position lies in `1..=length` of its contig
//! - **Real substitutions**: the alternate allele always differs from the reference
//! - **Declared fields only**: records only use contigs, INFO/FORMAT fields and
//!   samples declared in the header
//! - **Canonical order**: records are sorted by catalog rank, then position
//! - **Reproducible**: the same seed, samples and count give byte-identical files
//!
//! ## Example
//!
//! ```rust,no_run
//! use varsynth::{build_header, sort_variants, write_vcf_file, ContigCatalog, VariantGenerator};
//! use varsynth::generation::seeded_rng;
//! use std::path::Path;
//!
//! let catalog = ContigCatalog::human();
//! let header = build_header(&["SAMPLE1"]).unwrap();
//!
//! let mut rng = seeded_rng(42);
//! let records = VariantGenerator::new(&catalog, &header)
//!     .generate(100, &mut rng)
//!     .unwrap();
//! let records = sort_variants(records, &catalog).unwrap();
//!
//! write_vcf_file(Path::new("synthetic.vcf"), &header, &records).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Contig catalog and canonical contig order
//! - [`core`]: Core data types for contigs, headers and variants
//! - [`generation`]: Random variant generation and sorting
//! - [`output`]: VCF serialization
//! - [`parsing`]: Reading written files back for verification
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod generation;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::ContigCatalog;
pub use core::contig::ContigEntry;
pub use core::header::{build_header, build_header_with_catalog, Header};
pub use core::types::*;
pub use core::variant::{Genotype, Variant};
pub use generation::{sort_variants, GeneratorConfig, VariantGenerator};
pub use output::{write_vcf, write_vcf_file};
