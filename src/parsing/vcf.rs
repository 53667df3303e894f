//! Reader for VCF files written by this crate.
//!
//! The header is parsed with noodles; data lines are parsed by hand into
//! [`Variant`] values so a written file can be compared record-for-record with
//! what was generated.

use noodles::vcf;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::core::contig::ContigEntry;
use crate::core::types::{InfoValue, Nucleotide};
use crate::core::variant::{Genotype, Variant};
use crate::output::is_gzip_path;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid VCF format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Line {line}: {message}")]
    InvalidRecord { line: usize, message: String },
}

/// A VCF file read back into the crate's types
#[derive(Debug, Clone)]
pub struct ParsedVcf {
    /// e.g. `VCFv4.2`
    pub file_format: String,
    pub contigs: Vec<ContigEntry>,
    pub info_ids: Vec<String>,
    pub format_ids: Vec<String>,
    pub samples: Vec<String>,
    /// Data lines in file order
    pub records: Vec<Variant>,
}

/// Parse a plain or gzip-compressed (`.gz`) VCF file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, otherwise the same errors
/// as [`parse_vcf_text`].
pub fn parse_vcf_file(path: &Path) -> Result<ParsedVcf, ParseError> {
    let content = if is_gzip_path(path) {
        let file = std::fs::File::open(path)?;
        let mut content = String::new();
        flate2::read::MultiGzDecoder::new(file).read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path)?
    };
    parse_vcf_text(&content)
}

/// Parse VCF text: header via noodles, data lines into [`Variant`]s
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the `#CHROM` line is missing,
/// `ParseError::Noodles` if the header is rejected, and
/// `ParseError::InvalidRecord` for malformed data lines.
pub fn parse_vcf_text(text: &str) -> Result<ParsedVcf, ParseError> {
    let mut header_text = String::new();
    let mut data_lines = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if data_lines.is_empty() && line.starts_with('#') {
            header_text.push_str(line);
            header_text.push('\n');
        } else if !line.is_empty() {
            data_lines.push((idx + 1, line));
        }
    }

    if !header_text.lines().any(|l| l.starts_with("#CHROM")) {
        return Err(ParseError::InvalidFormat(
            "No #CHROM header line found".to_string(),
        ));
    }

    let header = vcf::io::Reader::new(header_text.as_bytes())
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    let file_format = {
        let fmt = header.file_format();
        format!("VCFv{}.{}", fmt.major(), fmt.minor())
    };

    let mut contigs = Vec::with_capacity(header.contigs().len());
    for (name, map) in header.contigs() {
        let length = map.length().ok_or_else(|| {
            ParseError::InvalidFormat(format!("Contig '{name}' missing length"))
        })?;
        contigs.push(ContigEntry::new(name.clone(), length as u64));
    }

    let samples: Vec<String> = header.sample_names().iter().cloned().collect();

    let records = data_lines
        .into_iter()
        .map(|(line_number, line)| {
            parse_record_line(line, &samples).map_err(|message| ParseError::InvalidRecord {
                line: line_number,
                message,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedVcf {
        file_format,
        contigs,
        info_ids: header.infos().keys().cloned().collect(),
        format_ids: header.formats().keys().cloned().collect(),
        samples,
        records,
    })
}

/// Parse a single tab-delimited data line
fn parse_record_line(line: &str, samples: &[String]) -> Result<Variant, String> {
    let fields: Vec<&str> = line.split('\t').collect();

    let expected = if samples.is_empty() {
        8
    } else {
        9 + samples.len()
    };
    if fields.len() != expected {
        return Err(format!(
            "expected {expected} columns, found {}",
            fields.len()
        ));
    }

    let position: u64 = fields[1]
        .parse()
        .map_err(|_| format!("invalid position '{}'", fields[1]))?;

    let reference = parse_allele(fields[3])?;
    let alternates = fields[4]
        .split(',')
        .map(parse_allele)
        .collect::<Result<Vec<_>, _>>()?;

    let mut variant = Variant {
        contig: fields[0].to_string(),
        position,
        reference,
        alternates,
        info: parse_info_field(fields[7])?,
        genotypes: std::collections::BTreeMap::new(),
    };

    if samples.is_empty() {
        return Ok(variant);
    }

    let gt_index = fields[8]
        .split(':')
        .position(|key| key == "GT")
        .ok_or_else(|| format!("FORMAT '{}' has no GT key", fields[8]))?;

    for (sample, value) in samples.iter().zip(&fields[9..]) {
        let gt = value.split(':').nth(gt_index).unwrap_or(".");
        // Missing calls (".", "./.") are absent from the map
        if gt.split(['/', '|']).all(|a| a == ".") {
            continue;
        }
        let genotype =
            Genotype::parse(gt).ok_or_else(|| format!("invalid genotype '{gt}' for {sample}"))?;
        variant = variant.with_genotype(sample.clone(), genotype);
    }

    Ok(variant)
}

fn parse_allele(s: &str) -> Result<Nucleotide, String> {
    Nucleotide::parse(s).ok_or_else(|| format!("unsupported allele '{s}'"))
}

/// Parse the INFO column (semicolon-separated key=value pairs).
/// Values that parse as integers are kept as integers.
fn parse_info_field(
    info: &str,
) -> Result<std::collections::BTreeMap<String, InfoValue>, String> {
    let mut values = std::collections::BTreeMap::new();

    if info == "." || info.is_empty() {
        return Ok(values);
    }

    for pair in info.split(';') {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("INFO entry '{pair}' has no value"))?;
        let value = match value.parse::<i64>() {
            Ok(n) => InfoValue::Integer(n),
            Err(_) => InfoValue::String(value.to_string()),
        };
        values.insert(key.to_string(), value);
    }

    Ok(values)
}
