//! Typed filter predicates driven by per-view configuration.
//!
//! A view declares its filterable dimensions as a list of [`FilterSpec`]s;
//! the user's current choices live in a [`FilterState`]; and
//! [`apply_filters`] evaluates the two against a record collection. Specs
//! combine with logical AND.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::{parse_date, FieldValue};

/// Sentinel option value meaning "no constraint" for exact-match filters.
pub const ALL: &str = "all";

/// One selectable value of an exact-match filter, with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        FilterOption {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "all" sentinel option every exact-match select starts with.
    pub fn all() -> Self {
        FilterOption::new(ALL, "All")
    }
}

/// The kind of constraint a filter spec imposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterKind {
    /// Equality against a record field, with [`ALL`] meaning no constraint.
    ExactMatch {
        /// The closed set of selectable values. Always includes the
        /// sentinel; [`FilterSpec::exact_match`] prepends it.
        options: Vec<FilterOption>,
        /// The value selected when the view mounts.
        #[serde(default = "default_all")]
        default: String,
    },
    /// Inclusive lower/upper date bound against a date-valued field. State
    /// keys are `{name}From` and `{name}To`; either side may be absent.
    DateRange,
}

fn default_all() -> String {
    ALL.to_string()
}

/// One filterable dimension of a list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// The record field this spec targets (and its key in [`FilterState`]).
    pub name: String,
    #[serde(flatten)]
    pub kind: FilterKind,
}

impl FilterSpec {
    /// Creates an exact-match spec. The sentinel option is prepended so the
    /// rendered select always offers "All".
    pub fn exact_match<I>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = FilterOption>,
    {
        let mut all_options = vec![FilterOption::all()];
        all_options.extend(options);
        FilterSpec {
            name: name.into(),
            kind: FilterKind::ExactMatch {
                options: all_options,
                default: default_all(),
            },
        }
    }

    /// Creates a date-range spec.
    pub fn date_range(name: impl Into<String>) -> Self {
        FilterSpec {
            name: name.into(),
            kind: FilterKind::DateRange,
        }
    }

    /// Key holding the lower bound of a range spec.
    pub fn from_key(&self) -> String {
        format!("{}From", self.name)
    }

    /// Key holding the upper bound of a range spec.
    pub fn to_key(&self) -> String {
        format!("{}To", self.name)
    }
}

/// A single chosen filter value.
///
/// Select inputs emit strings, so boolean fields need the caller to coerce
/// "true"/"false" into `Flag` before filtering; a `Text` value never equals
/// a boolean field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Text(String),
}

impl FilterValue {
    fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            FilterValue::Flag(_) => None,
        }
    }

    /// Returns `true` when this is the [`ALL`] sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s == ALL)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Flag(b)
    }
}

/// The current choice for every filter dimension of a view.
///
/// Keys are spec names, plus `{name}From`/`{name}To` for ranges. Transient
/// state: re-initialized from the specs each time the owning view mounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState(BTreeMap<String, FilterValue>);

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Builds the default state for a spec list: every exact-match spec set
    /// to its declared default, range bounds left unset.
    pub fn defaults(specs: &[FilterSpec]) -> Self {
        let mut state = FilterState::new();
        for spec in specs {
            if let FilterKind::ExactMatch { default, .. } = &spec.kind {
                state.set(&spec.name, default.clone());
            }
        }
        state
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn unset(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    fn bound(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FilterValue::as_text)
    }
}

/// Tests a single record against every spec, combined with logical AND.
pub fn matches_filters<T: Record>(record: &T, state: &FilterState, specs: &[FilterSpec]) -> bool {
    specs.iter().all(|spec| matches_spec(record, state, spec))
}

fn matches_spec<T: Record>(record: &T, state: &FilterState, spec: &FilterSpec) -> bool {
    match &spec.kind {
        FilterKind::ExactMatch { .. } => {
            let chosen = match state.get(&spec.name) {
                // Absent or sentinel: the spec imposes no constraint.
                None => return true,
                Some(v) if v.is_all() => return true,
                Some(v) => v,
            };
            match (record.field_value(&spec.name), chosen) {
                (FieldValue::Str(field), FilterValue::Text(want)) => field == want.as_str(),
                (FieldValue::Bool(field), FilterValue::Flag(want)) => field == *want,
                // Strict equality only: a Text choice never matches a
                // boolean field, missing fields never match.
                _ => false,
            }
        }
        FilterKind::DateRange => {
            let from_raw = state.bound(&spec.from_key());
            let to_raw = state.bound(&spec.to_key());
            if from_raw.is_none() && to_raw.is_none() {
                return true;
            }

            // Fail closed: with an active bound, an unparseable record date
            // (or bound value) excludes the record rather than erroring.
            let field_date = match record.field_value(&spec.name) {
                FieldValue::Date(d) => Some(d),
                FieldValue::Str(s) => parse_date(s),
                _ => None,
            };
            let Some(date) = field_date else {
                return false;
            };

            if let Some(raw) = from_raw {
                match parse_date(raw) {
                    Some(from) if date >= from => {}
                    _ => return false,
                }
            }
            if let Some(raw) = to_raw {
                match parse_date(raw) {
                    Some(to) if date <= to => {}
                    _ => return false,
                }
            }
            true
        }
    }
}

/// Applies every spec to a collection, returning the surviving records in
/// their original order. A state where every spec resolves to "all"/unset
/// returns the whole collection.
pub fn apply_filters<'a, T: Record>(
    records: &'a [T],
    state: &FilterState,
    specs: &[FilterSpec],
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_filters(record, state, specs))
        .collect()
}
