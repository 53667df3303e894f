//! Readers for VCF files produced by this crate.
//!
//! - **VCF**: header via noodles, data lines into [`Variant`](crate::Variant)s
//!
//! ## Example
//!
//! ```rust,no_run
//! use varsynth::parsing::vcf::parse_vcf_file;
//! use std::path::Path;
//!
//! let parsed = parse_vcf_file(Path::new("synthetic.vcf")).unwrap();
//! println!("{} records on {} contigs", parsed.records.len(), parsed.contigs.len());
//! ```

pub mod vcf;
