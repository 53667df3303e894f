//! Contig catalog: the reference sequences variants are placed on.
//!
//! The catalog is an ordered list of contig names and lengths. Order matters:
//! a contig's index is its rank in canonical sort order, so records on `chr2`
//! sort before records on `chr10`.
//!
//! ## Built-in Catalog
//!
//! [`ContigCatalog::human`] covers the GRCh38 primary chromosomes with UCSC
//! names: `chr1`-`chr22`, `chrX`, `chrY`.
//!
//! ## Custom Catalogs
//!
//! Custom catalogs can be created by exporting and modifying the built-in one:
//!
//! ```rust,no_run
//! use varsynth::ContigCatalog;
//! use std::path::Path;
//!
//! // Export to JSON
//! let json = ContigCatalog::human().to_json().unwrap();
//!
//! // Load from custom file
//! let custom = ContigCatalog::load_from_file(Path::new("my_contigs.json")).unwrap();
//! ```

pub mod human;
pub mod store;

pub use store::{CatalogError, ContigCatalog};
