use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::header::{Header, RecordError, GENOTYPE_KEY};
use crate::core::variant::Variant;

/// Fixed columns of the `#CHROM` line, before FORMAT and sample columns
const FIXED_COLUMNS: [&str; 8] = ["#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"];

/// Placeholder for missing ID, QUAL, FILTER and empty INFO values
const MISSING: &str = ".";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),
}

/// Streams a header and records to a sink as VCF text
pub struct VcfWriter<W: Write> {
    inner: W,
    records_written: usize,
}

impl<W: Write> VcfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            records_written: 0,
        }
    }

    /// Write the meta-information lines and the `#CHROM` column line
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the sink.
    pub fn write_header(&mut self, header: &Header) -> std::io::Result<()> {
        writeln!(self.inner, "##fileformat={}", header.file_format)?;
        if let Some(date) = header.file_date {
            writeln!(self.inner, "##fileDate={}", date.format("%Y%m%d"))?;
        }
        writeln!(self.inner, "##source={}", header.source)?;

        for contig in &header.contigs {
            writeln!(self.inner, "{}", contig.to_header_line())?;
        }
        for definition in &header.infos {
            writeln!(self.inner, "{}", definition.to_header_line("INFO"))?;
        }
        for definition in &header.formats {
            writeln!(self.inner, "{}", definition.to_header_line("FORMAT"))?;
        }

        write!(self.inner, "{}", FIXED_COLUMNS.join("\t"))?;
        if !header.samples.is_empty() {
            write!(self.inner, "\tFORMAT")?;
            for sample in &header.samples {
                write!(self.inner, "\t{sample}")?;
            }
        }
        writeln!(self.inner)
    }

    /// Write one data line. The record is checked against `header` first.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::InvalidRecord` if the record references anything the
    /// header does not declare, or `WriteError::Io` on sink failure.
    pub fn write_record(&mut self, header: &Header, variant: &Variant) -> Result<(), WriteError> {
        header.check_variant(variant)?;

        let alternates: Vec<String> = variant.alternates.iter().map(ToString::to_string).collect();

        write!(
            self.inner,
            "{}\t{}\t{MISSING}\t{}\t{}\t{MISSING}\t{MISSING}\t{}",
            variant.contig,
            variant.position,
            variant.reference,
            alternates.join(","),
            render_info(header, variant),
        )?;

        if !header.samples.is_empty() {
            write!(self.inner, "\t{}", render_format_keys(header))?;
            for sample in &header.samples {
                write!(self.inner, "\t{}", render_sample(header, variant, sample))?;
            }
        }
        writeln!(self.inner)?;

        self.records_written += 1;
        Ok(())
    }

    /// Returns the number of records written.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush and hand back the sink
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while flushing.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// FORMAT column: the declared FORMAT ids, `.` when none are declared
fn render_format_keys(header: &Header) -> String {
    if header.formats.is_empty() {
        return MISSING.to_string();
    }
    header
        .formats
        .iter()
        .map(|definition| definition.id.as_str())
        .collect::<Vec<_>>()
        .join(":")
}

/// One sample column, values in FORMAT declaration order. A sample without a
/// call renders as `./.`; fields other than GT carry no per-sample values.
fn render_sample(header: &Header, variant: &Variant, sample: &str) -> String {
    if header.formats.is_empty() {
        return MISSING.to_string();
    }
    header
        .formats
        .iter()
        .map(|definition| {
            if definition.id == GENOTYPE_KEY {
                variant
                    .genotypes
                    .get(sample)
                    .map_or_else(|| "./.".to_string(), ToString::to_string)
            } else {
                MISSING.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}

/// INFO column in header declaration order, `.` when the record has none
fn render_info(header: &Header, variant: &Variant) -> String {
    let fields: Vec<String> = header
        .infos
        .iter()
        .filter_map(|definition| {
            variant
                .info
                .get(&definition.id)
                .map(|value| format!("{}={value}", definition.id))
        })
        .collect();

    if fields.is_empty() {
        MISSING.to_string()
    } else {
        fields.join(";")
    }
}

/// Write `header` and `records` (in the given order) to `sink`, returning the
/// flushed sink.
///
/// # Errors
///
/// Returns `WriteError::Io` on any sink failure and `WriteError::InvalidRecord`
/// for records that disagree with the header. Output already written is left
/// as is.
pub fn write_vcf<W: Write>(sink: W, header: &Header, records: &[Variant]) -> Result<W, WriteError> {
    let mut writer = VcfWriter::new(sink);
    writer.write_header(header)?;
    for record in records {
        writer.write_record(header, record)?;
    }
    debug!("Wrote {} records", writer.records_written());
    Ok(writer.finish()?)
}

/// Check whether a destination should be gzip-compressed
#[must_use]
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Write a VCF file atomically.
///
/// Content goes to a temporary file in the destination directory, which is synced
/// and then renamed over `path`. On any failure the temporary file is removed and
/// `path` is left untouched.
///
/// # Errors
///
/// Returns `WriteError::Io` if the temporary file cannot be created, written or
/// persisted, and `WriteError::InvalidRecord` for records that disagree with the
/// header.
pub fn write_vcf_file(path: &Path, header: &Header, records: &[Variant]) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".varsynth-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    debug!("Writing to temporary file {}", temp.path().display());

    {
        let buffered = BufWriter::new(temp.as_file_mut());
        let buffered = if is_gzip_path(path) {
            let encoder = write_vcf(GzEncoder::new(buffered, Compression::default()), header, records)?;
            encoder.finish()?
        } else {
            write_vcf(buffered, header, records)?
        };
        buffered.into_inner().map_err(std::io::IntoInnerError::into_error)?;
    }

    temp.as_file().sync_all()?;

    // Temporary files are created owner-only; fixtures should be readable like any other output
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    temp.persist(path).map_err(|e| e.error)?;

    info!("Wrote {} variants to {}", records.len(), path.display());
    Ok(())
}
