//! End-to-end tests of the generate -> sort -> write -> re-read pipeline.

use std::path::Path;

use varsynth::generation::{is_sorted, seeded_rng};
use varsynth::parsing::vcf::{parse_vcf_file, parse_vcf_text};
use varsynth::utils::validation::{file_md5, verify_parsed_vcf};
use varsynth::{
    build_header, sort_variants, write_vcf, write_vcf_file, ContigCatalog, Header, Variant,
    VariantGenerator,
};

fn synthesize(count: usize, seed: u64) -> (ContigCatalog, Header, Vec<Variant>) {
    let catalog = ContigCatalog::human();
    let header = build_header(&["SAMPLE1"]).unwrap();
    let records = VariantGenerator::new(&catalog, &header)
        .generate(count, &mut seeded_rng(seed))
        .unwrap();
    let records = sort_variants(records, &catalog).unwrap();
    (catalog, header, records)
}

fn data_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.starts_with('#')).collect()
}

#[test]
fn test_round_trip_recovers_records() {
    let (_, header, records) = synthesize(300, 2024);

    let bytes = write_vcf(Vec::new(), &header, &records).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let parsed = parse_vcf_text(&text).unwrap();

    assert_eq!(parsed.file_format, "VCFv4.2");
    assert_eq!(parsed.contigs, header.contigs);
    assert_eq!(parsed.samples, header.samples);
    assert_eq!(parsed.info_ids, vec!["DP"]);
    assert_eq!(parsed.format_ids, vec!["GT"]);

    // Contig, position, alleles, depth and genotype all survive exactly
    assert_eq!(parsed.records, records);
}

#[test]
fn test_zero_records_writes_header_only() {
    let (_, header, records) = synthesize(0, 1);
    assert!(records.is_empty());

    let text = String::from_utf8(write_vcf(Vec::new(), &header, &records).unwrap()).unwrap();
    assert!(data_lines(&text).is_empty());

    let lines: Vec<&str> = text.lines().collect();
    // fileformat + source + 24 contigs + INFO + FORMAT + column line
    assert_eq!(lines.len(), 29);
    assert_eq!(
        lines.last().unwrap(),
        &"#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE1"
    );
}

#[test]
fn test_five_records_over_human_catalog() {
    let (catalog, header, records) = synthesize(5, 77);
    assert_eq!(catalog.len(), 24);

    let text = String::from_utf8(write_vcf(Vec::new(), &header, &records).unwrap()).unwrap();
    let lines = data_lines(&text);
    assert_eq!(lines.len(), 5);

    let mut previous: Option<(usize, u64)> = None;
    for line in lines {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 10);

        let contig = catalog.get(fields[0]).unwrap();
        let position: u64 = fields[1].parse().unwrap();
        assert!((1..=contig.length).contains(&position));

        assert_eq!(fields[2], ".");
        assert_eq!(fields[3].len(), 1);
        assert_eq!(fields[4].len(), 1);
        assert_ne!(fields[3], fields[4]);
        assert_eq!(fields[5], ".");
        assert_eq!(fields[6], ".");

        let depth: i64 = fields[7].strip_prefix("DP=").unwrap().parse().unwrap();
        assert!((10..=100).contains(&depth));

        assert_eq!(fields[8], "GT");
        assert_eq!(fields[9], "0/1");

        let key = (catalog.rank(fields[0]).unwrap(), position);
        if let Some(previous) = previous {
            assert!(previous <= key, "{previous:?} > {key:?}");
        }
        previous = Some(key);
    }
}

#[test]
fn test_sorted_output_respects_catalog_order() {
    let (catalog, _, records) = synthesize(1_000, 5);
    assert!(is_sorted(&records, &catalog));

    for pair in records.windows(2) {
        let a = (catalog.rank(&pair[0].contig).unwrap(), pair[0].position);
        let b = (catalog.rank(&pair[1].contig).unwrap(), pair[1].position);
        assert!(a <= b);
    }
}

#[test]
fn test_fixed_seed_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.vcf");
    let second = dir.path().join("second.vcf");

    for path in [&first, &second] {
        let (_, header, records) = synthesize(250, 99);
        write_vcf_file(path, &header, &records).unwrap();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
    assert_eq!(file_md5(&first).unwrap(), file_md5(&second).unwrap());
}

#[test]
fn test_different_seeds_differ() {
    let (_, _, a) = synthesize(50, 1);
    let (_, _, b) = synthesize(50, 2);
    assert_ne!(a, b);
}

#[test]
fn test_written_file_verifies() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["plain.vcf", "compressed.vcf.gz"] {
        let path = dir.path().join(name);
        let (_, header, records) = synthesize(400, 8);
        write_vcf_file(&path, &header, &records).unwrap();

        let parsed = parse_vcf_file(&path).unwrap();
        let summary = verify_parsed_vcf(&parsed, 400, &header.samples).unwrap();
        assert_eq!(summary.records, 400);
        assert!(summary.contigs_used > 1);
        assert_eq!(parsed.records, records);
    }
}

#[test]
fn test_parse_missing_file() {
    assert!(parse_vcf_file(Path::new("/nonexistent/synthetic.vcf")).is_err());
}
