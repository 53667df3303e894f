//! Random variant generation and canonical ordering.
//!
//! - [`VariantGenerator`]: draws records constrained to a catalog and header
//! - [`sort_variants`]: stable sort by (contig rank, position)
//!
//! ## Example
//!
//! ```rust
//! use varsynth::{build_header, ContigCatalog, VariantGenerator};
//! use varsynth::generation::{seeded_rng, sort_variants};
//!
//! let catalog = ContigCatalog::human();
//! let header = build_header(&["SAMPLE1"]).unwrap();
//!
//! let mut rng = seeded_rng(42);
//! let generator = VariantGenerator::new(&catalog, &header);
//! let records = generator.generate(10, &mut rng).unwrap();
//! let records = sort_variants(records, &catalog).unwrap();
//! assert_eq!(records.len(), 10);
//! ```

pub mod generator;
pub mod sorter;

pub use generator::{seeded_rng, GenerateError, GeneratorConfig, VariantGenerator};
pub use sorter::{is_sorted, sort_variants, SortError};
