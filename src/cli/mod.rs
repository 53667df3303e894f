//! Command-line interface for varsynth.
//!
//! Flags map one-to-one onto the library pipeline: the output path and record
//! count go to the writer and generator, the seed seeds the random source.
//!
//! ## Usage
//!
//! ```text
//! # 100 records (the default) to a plain VCF
//! varsynth -o synthetic.vcf
//!
//! # Reproducible, gzip-compressed, checked after writing
//! varsynth -o synthetic.vcf.gz -n 5000 --seed 42 --verify
//!
//! # JSON run summary for scripting
//! varsynth -o synthetic.vcf --format json
//! ```

use clap::Parser;

pub mod generate;

#[derive(Parser)]
#[command(name = "varsynth")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Generate a synthetic VCF file")]
#[command(
    long_about = "varsynth writes a well-formed VCF file filled with random single-nucleotide variants.\n\nRecords are placed uniformly on the GRCh38 primary chromosomes (or a custom contig catalog), carry a random INFO/DP depth and a heterozygous genotype, and are written in canonical (contig, position) order. Runs with the same --seed produce byte-identical files."
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run summary format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
