use thiserror::Error;

use crate::catalog::ContigCatalog;
use crate::core::variant::Variant;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SortError {
    #[error("Variant on contig '{0}' which is not in the catalog")]
    UnknownContig(String),
}

/// Sort records by (catalog rank of contig, position).
///
/// The sort is stable: records sharing a key keep their input order, so a
/// fixed seed always yields the same output.
///
/// # Errors
///
/// Returns `SortError::UnknownContig` if any record references a contig missing
/// from the catalog. Nothing is reordered in that case.
pub fn sort_variants(
    records: Vec<Variant>,
    catalog: &ContigCatalog,
) -> Result<Vec<Variant>, SortError> {
    let mut keyed = records
        .into_iter()
        .map(|record| {
            let rank = catalog
                .rank(&record.contig)
                .ok_or_else(|| SortError::UnknownContig(record.contig.clone()))?;
            Ok(((rank, record.position), record))
        })
        .collect::<Result<Vec<_>, SortError>>()?;

    // slice::sort_by_key is stable
    keyed.sort_by_key(|(key, _)| *key);

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Check that records are in non-decreasing (contig rank, position) order.
/// Records on contigs missing from the catalog are never sorted.
#[must_use]
pub fn is_sorted(records: &[Variant], catalog: &ContigCatalog) -> bool {
    let keys: Option<Vec<(usize, u64)>> = records
        .iter()
        .map(|r| catalog.rank(&r.contig).map(|rank| (rank, r.position)))
        .collect();

    keys.is_some_and(|keys| keys.windows(2).all(|w| w[0] <= w[1]))
}
