//! Runtime value types for record fields.
//!
//! [`FieldValue`] is the runtime value of a single record field as seen by
//! the engine: the accessor on [`Record`](crate::Record) returns it for every
//! field a view's configuration names.

use chrono::NaiveDate;

/// Runtime value of a record field, borrowed from the source record.
///
/// # Example
///
/// ```
/// use tabula_engine::{FieldValue, Number, Record};
///
/// struct Consultant {
///     name: String,
///     fee: f64,
/// }
///
/// impl Record for Consultant {
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "name" => FieldValue::Str(&self.name),
///             "fee" => FieldValue::Number(Number::F64(self.fee)),
///             _ => FieldValue::None,
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// String value (borrowed).
    Str(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Calendar date value.
    Date(NaiveDate),
    /// Field not present, null, or of an unsupported shape.
    None,
}

impl FieldValue<'_> {
    /// Renders the value as the string form used by free-text search.
    ///
    /// `None` fields have no string form and are skipped by search.
    pub fn to_search_string(&self) -> Option<String> {
        match self {
            FieldValue::Str(s) => Some((*s).to_string()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::None => None,
        }
    }
}

/// Numeric field value.
///
/// Stored in one of three variants to preserve precision. Filtering never
/// compares numbers (the spec'd filter kinds are exact-match and
/// date-range); the engine only needs the string form free-text search
/// matches against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

/// Parses a date out of a field or filter string.
///
/// Accepts plain `YYYY-MM-DD` dates as well as longer timestamp strings
/// (RFC 3339 and friends) whose first ten characters form a date. Anything
/// else yields `None`; date-range predicates treat that as "never matches".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_string_forms() {
        assert_eq!(
            FieldValue::Str("ACME Corp").to_search_string(),
            Some("ACME Corp".to_string())
        );
        assert_eq!(
            FieldValue::Number(Number::I64(42)).to_search_string(),
            Some("42".to_string())
        );
        assert_eq!(
            FieldValue::Bool(false).to_search_string(),
            Some("false".to_string())
        );
        let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            FieldValue::Date(d).to_search_string(),
            Some("2024-01-15".to_string())
        );
        assert_eq!(FieldValue::None.to_search_string(), None);
    }

    #[test]
    fn every_number_variant_has_a_string_form() {
        assert_eq!(Number::I64(-7).to_string(), "-7");
        assert_eq!(Number::U64(7).to_string(), "7");
        assert_eq!(Number::F64(7.5).to_string(), "7.5");
    }

    #[test]
    fn parse_plain_date() {
        assert_eq!(
            parse_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_date(" 2024-01-15 "),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn parse_timestamp_prefix() {
        assert_eq!(
            parse_date("2024-01-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn parse_garbage_date() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-99"), None);
    }
}
