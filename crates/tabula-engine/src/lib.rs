//! Tabula engine - list query engine for admin table views.
//!
//! Every list screen of a CRM-style admin front end repeats the same
//! plumbing: free-text search over a few fields, a row of typed filters,
//! and a paginated table with a compact `1 ... 7 8 9 ... 20` pager. This
//! crate is that plumbing, once, behind one contract:
//!
//! - Records stay opaque: the engine reaches into them through the
//!   [`Record`] accessor trait (JSON objects work out of the box).
//! - [`apply_search`] does case-insensitive substring matching over a
//!   caller-declared field set; an empty query is the identity.
//! - [`apply_filters`] evaluates exact-match (with an "all" sentinel) and
//!   inclusive date-range specs, combined with AND, failing closed on
//!   unparseable dates.
//! - [`paginate`] and [`build_page_numbers`] turn the filtered set into a
//!   page slice plus the marker sequence a pagination control renders.
//! - [`ListState`] ties the pieces together for one mounted view: it
//!   consumes renderer intents, resets to page 1 whenever the filtered set
//!   can change, and clamps the page index.
//!
//! Everything is synchronous, in-memory, and side-effect-free. Fetching
//! records and drawing tables belong to the host.
//!
//! # Quick start
//!
//! ```rust
//! use serde_json::{json, Value};
//! use tabula_engine::{FilterOption, FilterSpec, ListConfig, ListState, PageMarker};
//!
//! let config = ListConfig::new()
//!     .search_field("name")
//!     .search_field("companyName")
//!     .filter(FilterSpec::exact_match(
//!         "status",
//!         [
//!             FilterOption::new("placed", "Placed"),
//!             FilterOption::new("bench", "On bench"),
//!         ],
//!     ))
//!     .filter(FilterSpec::date_range("joinedAt"))
//!     .per_page_options([10, 25, 50]);
//!
//! // Fetched from the backend by the hosting view.
//! let records: Vec<Value> = vec![
//!     json!({"name": "Ada Byrne", "companyName": "ACME Corp",
//!            "status": "placed", "joinedAt": "2024-01-15"}),
//!     json!({"name": "Luis Prado", "companyName": "Initech",
//!            "status": "bench", "joinedAt": "2024-02-01"}),
//! ];
//!
//! let mut list = ListState::new(config).unwrap();
//! list.set_query("acme");
//! list.set_range("joinedAt", Some("2024-01-01"), Some("2024-01-31")).unwrap();
//!
//! let view = list.view(&records);
//! assert_eq!(view.total_items, 1);
//! assert_eq!(view.page_items[0]["name"], "Ada Byrne");
//! assert_eq!(view.page_numbers, vec![PageMarker::Page(1)]);
//! ```

mod error;
mod filter;
mod page;
mod record;
mod search;
mod state;
mod value;

pub use error::{EngineError, Result};
pub use filter::{
    apply_filters, matches_filters, FilterKind, FilterOption, FilterSpec, FilterState,
    FilterValue, ALL,
};
pub use page::{
    build_page_numbers, paginate, PageMarker, PageSlice, PageState, DEFAULT_PAGE_WINDOW,
    PER_PAGE_OPTIONS,
};
pub use record::Record;
pub use search::{apply_search, matches_query};
pub use state::{ListConfig, ListState, ListView};
pub use value::{parse_date, FieldValue, Number};
