//! VCF serialization.
//!
//! [`VcfWriter`] renders a [`Header`](crate::Header) and records as VCF text to
//! any [`std::io::Write`] sink. [`write_vcf_file`] wraps it for files: output goes
//! to a temporary file next to the destination and is renamed into place only
//! once fully written, so a failed run never leaves a truncated VCF behind.
//! Destinations ending in `.gz` are gzip-compressed.
//!
//! ## Output Layout
//!
//! ```text
//! ##fileformat=VCFv4.2
//! ##source=varsynth
//! ##contig=<ID=chr1,length=248956422>
//! ...
//! ##INFO=<ID=DP,Number=1,Type=Integer,Description="Total Depth">
//! ##FORMAT=<ID=GT,Number=1,Type=String,Description="Genotype">
//! #CHROM  POS       ID  REF  ALT  QUAL  FILTER  INFO   FORMAT  SAMPLE1
//! chr1    1234567   .   A    G    .     .       DP=42  GT      0/1
//! ```

pub mod writer;

pub use writer::{is_gzip_path, write_vcf, write_vcf_file, VcfWriter, WriteError};
