//! Per-view configuration and the list-state controller.
//!
//! [`ListConfig`] is what a view declares once (searchable fields, filter
//! specs, pagination options); [`ListState`] owns the transient query,
//! filter, and page state for one mounted view, applies the renderer's
//! intents, and computes the visible [`ListView`] from whatever record
//! collection the host last fetched.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, Result};
use crate::filter::{matches_filters, FilterKind, FilterSpec, FilterState, FilterValue};
use crate::page::{
    build_page_numbers, paginate, PageMarker, PageState, DEFAULT_PAGE_WINDOW, PER_PAGE_OPTIONS,
};
use crate::record::Record;
use crate::search::matches_query;

/// Static configuration of one list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Fields free-text search looks at.
    #[serde(default)]
    pub searchable_fields: Vec<String>,
    /// The view's filterable dimensions.
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    /// Allowed items-per-page values; the first is the mount default.
    #[serde(default = "default_per_page_options")]
    pub per_page_options: Vec<usize>,
    /// Width of the compact page-number window.
    #[serde(default = "default_page_window")]
    pub page_window: usize,
}

fn default_per_page_options() -> Vec<usize> {
    PER_PAGE_OPTIONS.to_vec()
}

fn default_page_window() -> usize {
    DEFAULT_PAGE_WINDOW
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            searchable_fields: Vec::new(),
            filters: Vec::new(),
            per_page_options: default_per_page_options(),
            page_window: default_page_window(),
        }
    }
}

impl ListConfig {
    pub fn new() -> Self {
        ListConfig::default()
    }

    /// Adds a searchable field.
    pub fn search_field(mut self, field: impl Into<String>) -> Self {
        self.searchable_fields.push(field.into());
        self
    }

    /// Adds a filter spec.
    pub fn filter(mut self, spec: FilterSpec) -> Self {
        self.filters.push(spec);
        self
    }

    /// Replaces the per-page option set.
    pub fn per_page_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.per_page_options = options.into();
        self
    }

    /// Checks the configuration is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.per_page_options.is_empty() || self.per_page_options.contains(&0) {
            return Err(EngineError::InvalidPerPageOptions);
        }
        let mut seen = HashSet::new();
        for spec in &self.filters {
            if !seen.insert(spec.name.as_str()) {
                return Err(EngineError::DuplicateFilter(spec.name.clone()));
            }
        }
        Ok(())
    }

    fn spec(&self, name: &str) -> Result<&FilterSpec> {
        self.filters
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| EngineError::UnknownFilter(name.to_string()))
    }
}

/// The computed visible page of one list view.
#[derive(Debug)]
pub struct ListView<'a, T> {
    /// Records on the current page, in original collection order.
    pub page_items: Vec<&'a T>,
    /// Size of the whole filtered set.
    pub total_items: usize,
    /// Page count of the filtered set; 0 when it is empty.
    pub total_pages: usize,
    /// The page the view landed on after clamping.
    pub current_page: usize,
    /// Compact page-indicator sequence for the pagination control.
    pub page_numbers: Vec<PageMarker>,
}

/// Transient query/filter/page state of one mounted list view.
///
/// The host re-fetches records as it pleases and calls [`ListState::view`]
/// after every user interaction; the intents mirror what a table renderer
/// sends back (`set_query`, `set_filter`, `set_range`, `set_page`,
/// `set_items_per_page`). Any intent that can change the filtered set's
/// composition resets the view to page 1.
///
/// # Example
///
/// ```
/// use serde_json::{json, Value};
/// use tabula_engine::{FilterOption, FilterSpec, ListConfig, ListState};
///
/// let config = ListConfig::new()
///     .search_field("name")
///     .search_field("companyName")
///     .filter(FilterSpec::exact_match(
///         "status",
///         [FilterOption::new("placed", "Placed")],
///     ))
///     .filter(FilterSpec::date_range("joinedAt"));
///
/// let records: Vec<Value> = vec![
///     json!({"name": "Ada", "companyName": "ACME Corp", "status": "placed"}),
///     json!({"name": "Luis", "companyName": "Initech", "status": "bench"}),
/// ];
///
/// let mut list = ListState::new(config).unwrap();
/// list.set_query("acme");
/// let view = list.view(&records);
/// assert_eq!(view.total_items, 1);
/// assert_eq!(view.page_items[0]["name"], "Ada");
/// ```
#[derive(Debug, Clone)]
pub struct ListState {
    config: ListConfig,
    query: String,
    filters: FilterState,
    page: PageState,
}

impl ListState {
    /// Builds mount-time state for a view: empty query, every filter at its
    /// default, page 1 at the first per-page option.
    pub fn new(config: ListConfig) -> Result<Self> {
        config.validate()?;
        let filters = FilterState::defaults(&config.filters);
        let page = PageState::new(config.per_page_options[0]);
        Ok(ListState {
            config,
            query: String::new(),
            filters,
            page,
        })
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Replaces the free-text query. Resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page.reset();
    }

    /// Chooses a value for an exact-match filter. Resets to page 1.
    ///
    /// The value must be the sentinel or one of the spec's declared
    /// options; the option set is closed. Booleans must arrive pre-coerced
    /// as `FilterValue::Flag` (validated against the "true"/"false" option
    /// values); the select input's raw "true"/"false" strings never match a
    /// boolean field.
    pub fn set_filter(&mut self, name: &str, value: impl Into<FilterValue>) -> Result<()> {
        let spec = self.config.spec(name)?;
        let FilterKind::ExactMatch { options, .. } = &spec.kind else {
            return Err(EngineError::KindMismatch {
                name: name.to_string(),
                expected: "exact-match",
            });
        };
        let value = value.into();
        if !value.is_all() {
            let chosen = match &value {
                FilterValue::Text(s) => s.clone(),
                FilterValue::Flag(b) => b.to_string(),
            };
            if !options.iter().any(|option| option.value == chosen) {
                return Err(EngineError::OptionNotAllowed {
                    name: name.to_string(),
                    value: chosen,
                });
            }
        }
        self.filters.set(name, value);
        self.page.reset();
        Ok(())
    }

    /// Sets the bounds of a date-range filter; `None` clears a side.
    /// Resets to page 1.
    pub fn set_range(&mut self, name: &str, from: Option<&str>, to: Option<&str>) -> Result<()> {
        let spec = self.config.spec(name)?;
        if spec.kind != FilterKind::DateRange {
            return Err(EngineError::KindMismatch {
                name: name.to_string(),
                expected: "date-range",
            });
        }
        let (from_key, to_key) = (spec.from_key(), spec.to_key());
        match from {
            Some(v) => self.filters.set(from_key, v),
            None => self.filters.unset(&from_key),
        }
        match to {
            Some(v) => self.filters.set(to_key, v),
            None => self.filters.unset(&to_key),
        }
        self.page.reset();
        Ok(())
    }

    /// Drops the query and every filter back to mount defaults.
    pub fn clear(&mut self) {
        self.query.clear();
        self.filters = FilterState::defaults(&self.config.filters);
        self.page.reset();
    }

    /// Navigates to a page. The value is clamped into range against the
    /// filtered set on the next [`view`](ListState::view) call.
    pub fn set_page(&mut self, page: usize) {
        self.page.current_page = page.max(1);
    }

    /// Switches items-per-page; must be one of the declared options.
    /// Resets to page 1.
    pub fn set_items_per_page(&mut self, value: usize) -> Result<()> {
        if !self.config.per_page_options.contains(&value) {
            return Err(EngineError::PerPageNotAllowed {
                value,
                allowed: self.config.per_page_options.clone(),
            });
        }
        self.page.items_per_page = value;
        self.page.reset();
        Ok(())
    }

    /// Runs search, filters, clamping, and pagination over the host's
    /// current record collection.
    ///
    /// Pure with respect to `records`; only the page index is adjusted on
    /// `self` (the clamping contract the standalone `paginate` leaves to its
    /// caller).
    pub fn view<'a, T: Record>(&mut self, records: &'a [T]) -> ListView<'a, T> {
        let filtered: Vec<&'a T> = records
            .iter()
            .filter(|r| matches_query(r, &self.query, &self.config.searchable_fields))
            .filter(|r| matches_filters(r, &self.filters, &self.config.filters))
            .collect();

        self.page.total_items = filtered.len();
        self.page.clamp();

        let slice = paginate(&filtered, &self.page);
        let page_numbers = build_page_numbers(
            self.page.current_page,
            slice.total_pages,
            self.config.page_window,
        );
        ListView {
            page_items: slice.page_items.to_vec(),
            total_items: filtered.len(),
            total_pages: slice.total_pages,
            current_page: self.page.current_page,
            page_numbers,
        }
    }
}
