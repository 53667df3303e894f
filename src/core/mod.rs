//! Core data types for synthetic variant files.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ContigEntry`]: A named reference sequence with its length
//! - [`Header`]: The VCF meta-information block and sample list, built by [`build_header`]
//! - [`Variant`], [`Genotype`]: A variant record and its per-sample calls
//! - [`Nucleotide`], [`InfoValue`], [`Number`], [`FieldType`]: Field-level types
//!
//! ## Coordinates
//!
//! Positions are 1-based everywhere they are stored or written. [`Variant::start`]
//! gives the 0-based start for callers that need half-open intervals.
//!
//! [`ContigEntry`]: contig::ContigEntry
//! [`Header`]: header::Header
//! [`build_header`]: header::build_header
//! [`Variant`]: variant::Variant
//! [`Variant::start`]: variant::Variant::start
//! [`Genotype`]: variant::Genotype
//! [`Nucleotide`]: types::Nucleotide
//! [`InfoValue`]: types::InfoValue
//! [`Number`]: types::Number
//! [`FieldType`]: types::FieldType

pub mod contig;
pub mod header;
pub mod types;
pub mod variant;
