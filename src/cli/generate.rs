use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::ContigCatalog;
use crate::cli::OutputFormat;
use crate::core::header::{build_header_with_catalog, DEFAULT_SAMPLE};
use crate::core::variant::Variant;
use crate::generation::{seeded_rng, sort_variants, VariantGenerator};
use crate::output::write_vcf_file;
use crate::parsing::vcf::parse_vcf_file;
use crate::utils::validation::{file_md5, verify_parsed_vcf};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the output VCF file ('.gz' suffix for gzip)
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Number of variants to generate
    #[arg(
        short = 'n',
        long = "num_variants",
        visible_alias = "num-variants",
        default_value = "100"
    )]
    pub num_variants: usize,

    /// Random seed; drawn from the OS and reported in the summary when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sample name for the genotype column
    #[arg(long, default_value = DEFAULT_SAMPLE)]
    pub sample: String,

    /// Path to a custom contig catalog (JSON, as produced by `ContigCatalog::to_json`)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Stamp a ##fileDate line with today's date (output then varies by day)
    #[arg(long)]
    pub date: bool,

    /// Re-read the written file and check every record
    #[arg(long)]
    pub verify: bool,
}

/// What a run produced
#[derive(Debug, Serialize)]
struct RunSummary {
    output: String,
    variants: usize,
    sample: String,
    seed: u64,
    contigs_used: usize,
    md5: String,
    verified: bool,
}

/// Generate, sort and write a synthetic VCF, then report on it
///
/// # Errors
///
/// Returns an error if the catalog or sample name is invalid, generation fails,
/// the output cannot be written, or `--verify` finds a problem.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenerateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => ContigCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => ContigCatalog::human(),
    };

    let mut header = build_header_with_catalog(&[args.sample.as_str()], &catalog)?;
    if args.date {
        header = header.with_file_date(chrono::Local::now().date_naive());
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {seed}");

    let mut rng = seeded_rng(seed);
    let records = VariantGenerator::new(&catalog, &header).generate(args.num_variants, &mut rng)?;
    let records = sort_variants(records, &catalog)?;

    write_vcf_file(&args.output, &header, &records)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.verify {
        let parsed = parse_vcf_file(&args.output)
            .with_context(|| format!("Failed to re-read {}", args.output.display()))?;
        let verified = verify_parsed_vcf(&parsed, records.len(), &header.samples)?;
        debug!(
            "Verified {} records on {} contigs",
            verified.records, verified.contigs_used
        );
    }

    let summary = RunSummary {
        output: args.output.display().to_string(),
        variants: records.len(),
        sample: args.sample.clone(),
        seed,
        contigs_used: count_contigs(&records),
        md5: file_md5(&args.output)?,
        verified: args.verify,
    };

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn count_contigs(records: &[Variant]) -> usize {
    records
        .iter()
        .map(|r| r.contig.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn print_text_summary(summary: &RunSummary) {
    println!("Synthetic VCF");
    println!("{}", "=".repeat(60));
    println!("  Output: {}", summary.output);
    println!("  Variants: {}", summary.variants);
    println!("  Contigs used: {}", summary.contigs_used);
    println!("  Sample: {}", summary.sample);
    println!("  Seed: {}", summary.seed);
    println!("  MD5: {}", summary.md5);
    if summary.verified {
        println!("  Verified: yes");
    }
}

fn print_tsv_summary(summary: &RunSummary) {
    println!("output\tvariants\tcontigs_used\tsample\tseed\tmd5\tverified");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        summary.output,
        summary.variants,
        summary.contigs_used,
        summary.sample,
        summary.seed,
        summary.md5,
        summary.verified,
    );
}
