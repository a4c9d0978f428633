//! Free-text search over a caller-declared set of fields.

use crate::record::Record;

/// Tests a single record against a free-text query.
///
/// A record matches when the lowercased string form of any named field
/// contains the lowercased query as a substring. Fields that resolve to
/// [`FieldValue::None`](crate::FieldValue::None) are skipped. A query that
/// trims to empty matches everything.
pub fn matches_query<T, S>(record: &T, query: &str, fields: &[S]) -> bool
where
    T: Record,
    S: AsRef<str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .field_value(field.as_ref())
            .to_search_string()
            .is_some_and(|s| s.to_lowercase().contains(&needle))
    })
}

/// Applies a free-text query to a collection.
///
/// Returns references to the matching records in their original order. An
/// empty or whitespace-only query returns every record (identity, not
/// "match nothing"). The input is never mutated.
pub fn apply_search<'a, T, S>(records: &'a [T], query: &str, fields: &[S]) -> Vec<&'a T>
where
    T: Record,
    S: AsRef<str>,
{
    records
        .iter()
        .filter(|record| matches_query(record, query, fields))
        .collect()
}
