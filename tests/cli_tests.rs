//! Command-line behavior of the `varsynth` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn varsynth() -> Command {
    Command::cargo_bin("varsynth").unwrap()
}

fn data_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.starts_with('#')).count()
}

#[test]
fn test_default_count_is_100() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args(["-o", output.to_str().unwrap(), "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variants: 100"));

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(data_lines(&text), 100);
}

#[test]
fn test_num_variants_flag_is_honored() {
    let dir = tempfile::tempdir().unwrap();

    for flag in ["-n", "--num_variants", "--num-variants"] {
        let output = dir.path().join(format!("out{flag}.vcf"));
        varsynth()
            .args(["-o", output.to_str().unwrap(), flag, "7", "--seed", "3"])
            .assert()
            .success();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(data_lines(&text), 7, "flag {flag}");
    }
}

#[test]
fn test_zero_variants() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.vcf");

    varsynth()
        .args(["--output", output.to_str().unwrap(), "-n", "0", "--verify"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(data_lines(&text), 0);
    assert!(text.lines().last().unwrap().starts_with("#CHROM\t"));
}

#[test]
fn test_same_seed_same_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.vcf");
    let second = dir.path().join("b.vcf");

    for path in [&first, &second] {
        varsynth()
            .args(["-o", path.to_str().unwrap(), "-n", "500", "-s", "12345"])
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf");

    let assert = varsynth()
        .args([
            "-o",
            output.to_str().unwrap(),
            "-n",
            "25",
            "--seed",
            "42",
            "--sample",
            "NA12878",
            "--verify",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["variants"], 25);
    assert_eq!(summary["seed"], 42);
    assert_eq!(summary["sample"], "NA12878");
    assert_eq!(summary["verified"], true);
    assert_eq!(summary["md5"].as_str().unwrap().len(), 32);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("\tFORMAT\tNA12878\n"));
}

#[test]
fn test_tsv_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args(["-o", output.to_str().unwrap(), "-n", "3", "-s", "9", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "output\tvariants\tcontigs_used\tsample\tseed\tmd5\tverified\n",
        ));
}

#[test]
fn test_gzip_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf.gz");

    varsynth()
        .args(["-o", output.to_str().unwrap(), "-n", "10", "--verify"])
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    // gzip magic
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
}

#[test]
fn test_custom_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("contigs.json");
    std::fs::write(
        &catalog,
        r#"{"contigs": [{"name": "ctgA", "length": 50}, {"name": "ctgB", "length": 20}]}"#,
    )
    .unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args([
            "-o",
            output.to_str().unwrap(),
            "-n",
            "40",
            "--catalog",
            catalog.to_str().unwrap(),
            "--verify",
        ])
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("##contig=<ID=ctgA,length=50>\n##contig=<ID=ctgB,length=20>\n"));
    assert!(!text.contains("chr1"));
}

#[test]
fn test_catalog_with_unsafe_contig_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("contigs.json");
    std::fs::write(&catalog, r#"{"contigs": [{"name": "chr\t1", "length": 10}]}"#).unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args([
            "-o",
            output.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
    assert!(!output.exists());
}

#[test]
fn test_date_flag_adds_file_date() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args(["-o", output.to_str().unwrap(), "-n", "1", "--date"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    let second_line = text.lines().nth(1).unwrap();
    assert!(second_line.starts_with("##fileDate="));
    assert_eq!(second_line.len(), "##fileDate=YYYYMMDD".len());
}

#[test]
fn test_output_is_required() {
    varsynth()
        .args(["-n", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_invalid_count_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args(["-o", output.to_str().unwrap(), "-n", "-3"])
        .assert()
        .failure();
    assert!(!output.exists());
}

#[test]
fn test_unwritable_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing/dir/out.vcf");

    varsynth()
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_empty_sample_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.vcf");

    varsynth()
        .args(["-o", output.to_str().unwrap(), "--sample", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sample names must not be empty"));
    assert!(!output.exists());
}
