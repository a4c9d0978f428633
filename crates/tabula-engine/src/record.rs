//! The [`Record`] accessor trait.
//!
//! The engine never assumes a concrete record shape: every operation reaches
//! into records through `field_value`, using only the field names a view's
//! configuration declares. Implement the trait for your domain structs, or
//! use the built-in implementations for JSON objects when records arrive
//! straight off a REST payload.

use serde_json::{Map, Value as Json};

use crate::value::{FieldValue, Number};

/// Trait for record types the engine can query.
///
/// # Example
///
/// ```
/// use tabula_engine::{FieldValue, Number, Record};
///
/// struct Agreement {
///     client: String,
///     fee: f64,
///     signed: bool,
/// }
///
/// impl Record for Agreement {
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "client" => FieldValue::Str(&self.client),
///             "fee" => FieldValue::Number(Number::F64(self.fee)),
///             "signed" => FieldValue::Bool(self.signed),
///             _ => FieldValue::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`FieldValue::None`] when the field
    /// does not exist or holds nothing comparable.
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

impl<T: Record + ?Sized> Record for &T {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        (**self).field_value(field)
    }
}

fn json_field(value: &Json) -> FieldValue<'_> {
    match value {
        Json::String(s) => FieldValue::Str(s),
        Json::Bool(b) => FieldValue::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                FieldValue::Number(Number::U64(u))
            } else if let Some(f) = n.as_f64() {
                FieldValue::Number(Number::F64(f))
            } else {
                FieldValue::None
            }
        }
        // Null, arrays and nested objects are not comparable field values.
        _ => FieldValue::None,
    }
}

/// JSON objects deserialized from a backend list response are queryable
/// without an adapter struct. Date-valued fields stay strings here; the
/// date-range predicate parses them on demand.
impl Record for Map<String, Json> {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match self.get(field) {
            Some(v) => json_field(v),
            None => FieldValue::None,
        }
    }
}

impl Record for Json {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match self {
            Json::Object(map) => map.field_value(field),
            _ => FieldValue::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_object_fields() {
        let rec = json!({
            "companyName": "ACME Corp",
            "verified": true,
            "openings": 3,
            "fee": 1500.5,
            "notes": null,
        });

        assert_eq!(rec.field_value("companyName"), FieldValue::Str("ACME Corp"));
        assert_eq!(rec.field_value("verified"), FieldValue::Bool(true));
        assert_eq!(
            rec.field_value("openings"),
            FieldValue::Number(Number::I64(3))
        );
        assert_eq!(
            rec.field_value("fee"),
            FieldValue::Number(Number::F64(1500.5))
        );
        assert_eq!(rec.field_value("notes"), FieldValue::None);
        assert_eq!(rec.field_value("missing"), FieldValue::None);
    }

    #[test]
    fn non_object_json_has_no_fields() {
        assert_eq!(json!([1, 2, 3]).field_value("0"), FieldValue::None);
        assert_eq!(json!("scalar").field_value("len"), FieldValue::None);
    }

    #[test]
    fn reference_forwarding() {
        let rec = json!({"name": "x"});
        let by_ref: &Json = &rec;
        assert_eq!(by_ref.field_value("name"), FieldValue::Str("x"));
    }
}
