use crate::record::TableRecord;

/// Returns `true` when any field of `record` contains `query`, ignoring case.
///
/// Every field is scanned, including fields a table may not display. An empty query matches.
pub fn record_matches<R>(record: &R, query: &str) -> bool
where
    R: TableRecord + ?Sized,
{
    contains_lowered(record, &query.to_lowercase())
}

fn contains_lowered<R>(record: &R, needle: &str) -> bool
where
    R: TableRecord + ?Sized,
{
    record.cells().iter().any(|cell| {
        cell.search_text()
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Keeps the records with at least one field containing `query`, ignoring case.
///
/// An empty query, or `searchable == false`, keeps every record in its original order.
pub fn filter_records<T>(records: &[T], query: &str, searchable: bool) -> Vec<T>
where
    T: TableRecord + Clone,
{
    if !searchable || query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| contains_lowered(*record, &needle))
        .cloned()
        .collect()
}
