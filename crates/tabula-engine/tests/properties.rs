//! Property-based coverage of the engine's behavioral guarantees.

use proptest::prelude::*;
use serde_json::{json, Value};

use tabula_engine::{
    apply_filters, apply_search, build_page_numbers, paginate, FilterOption, FilterSpec,
    FilterState, PageMarker, PageState, DEFAULT_PAGE_WINDOW,
};

fn record_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z]{0,8}",
        prop_oneof![Just("placed"), Just("bench"), Just("offer")],
        1u32..=28,
    )
        .prop_map(|(name, status, day)| {
            json!({
                "name": name,
                "status": status,
                "joinedAt": format!("2024-01-{day:02}"),
            })
        })
}

fn roster_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(record_strategy(), 0..60)
}

fn specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::exact_match(
            "status",
            [
                FilterOption::new("placed", "Placed"),
                FilterOption::new("bench", "On bench"),
                FilterOption::new("offer", "Offer out"),
            ],
        ),
        FilterSpec::date_range("joinedAt"),
    ]
}

const SEARCH_FIELDS: &[&str] = &["name", "status"];

/// True when `subset` is `records` with zero or more elements removed,
/// order preserved (checked by address identity).
fn is_subsequence(records: &[Value], subset: &[&Value]) -> bool {
    let mut iter = records.iter();
    subset
        .iter()
        .all(|hit| iter.by_ref().any(|r| std::ptr::eq(r, *hit)))
}

proptest! {
    #[test]
    fn whitespace_query_is_identity(records in roster_strategy(), pad in "[ \t]{0,4}") {
        let hits = apply_search(&records, &pad, SEARCH_FIELDS);
        prop_assert_eq!(hits.len(), records.len());
        prop_assert!(is_subsequence(&records, &hits));
    }

    #[test]
    fn search_yields_ordered_subsequence(records in roster_strategy(), query in "[a-z]{0,4}") {
        let hits = apply_search(&records, &query, SEARCH_FIELDS);
        prop_assert!(hits.len() <= records.len());
        prop_assert!(is_subsequence(&records, &hits));
    }

    #[test]
    fn all_sentinel_filters_are_identity(records in roster_strategy()) {
        let state = FilterState::defaults(&specs());
        let hits = apply_filters(&records, &state, &specs());
        prop_assert_eq!(hits.len(), records.len());
    }

    #[test]
    fn active_filters_yield_ordered_subsequence(
        records in roster_strategy(),
        status in prop_oneof![Just("placed"), Just("bench"), Just("offer")],
        from_day in 1u32..=28,
        to_day in 1u32..=28,
    ) {
        let mut state = FilterState::defaults(&specs());
        state.set("status", status);
        state.set("joinedAtFrom", format!("2024-01-{from_day:02}"));
        state.set("joinedAtTo", format!("2024-01-{to_day:02}"));

        let hits = apply_filters(&records, &state, &specs());
        prop_assert!(is_subsequence(&records, &hits));
        for hit in hits {
            prop_assert_eq!(hit["status"].as_str(), Some(status));
        }
    }

    #[test]
    fn pages_partition_the_collection(
        len in 0usize..200,
        per_page in prop_oneof![Just(10usize), Just(25), Just(50)],
    ) {
        let records: Vec<u32> = (0..len as u32).collect();
        let mut state = PageState::new(per_page);
        state.total_items = len;

        let total_pages = paginate(&records, &state).total_pages;
        prop_assert_eq!(total_pages == 0, records.is_empty());

        let mut seen = 0;
        for page in 1..=total_pages {
            state.current_page = page;
            let slice = paginate(&records, &state);
            prop_assert!(slice.page_items.len() <= per_page);
            prop_assert_eq!(slice.page_items.first(), records.get(seen));
            seen += slice.page_items.len();
        }
        prop_assert_eq!(seen, records.len());
    }

    #[test]
    fn page_numbers_are_well_formed(total in 1usize..120, current_seed in 0usize..120) {
        let current = current_seed % total + 1;
        let markers = build_page_numbers(current, total, DEFAULT_PAGE_WINDOW);

        prop_assert_eq!(markers.first(), Some(&PageMarker::Page(1)));
        prop_assert_eq!(markers.last(), Some(&PageMarker::Page(total)));
        prop_assert!(markers.contains(&PageMarker::Page(current)));

        // Strictly increasing page numbers, gaps only between pages.
        let pages: Vec<usize> = markers
            .iter()
            .filter_map(|m| match m {
                PageMarker::Page(n) => Some(*n),
                PageMarker::Gap => None,
            })
            .collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert_ne!(markers.first(), Some(&PageMarker::Gap));
        prop_assert_ne!(markers.last(), Some(&PageMarker::Gap));

        // Deterministic for identical inputs.
        prop_assert_eq!(
            markers,
            build_page_numbers(current, total, DEFAULT_PAGE_WINDOW)
        );
    }
}
