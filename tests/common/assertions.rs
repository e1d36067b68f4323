//! Domain-specific assertion macros for psst harnesses.
//!
//! These wrap plain assertions with failure messages that name the search
//! contract being violated, so a red test reads as "which rule broke"
//! rather than "which vecs differ".

/// Assert that a slice of result entries has exactly the given titles, in
/// order.
///
/// ```rust
/// assert_result_titles!(results, ["Intro to Rust", "Parsing Without Tears"]);
/// ```
#[macro_export]
macro_rules! assert_result_titles {
    ($results:expr, [$($title:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.iter().map(|e| e.title.as_str()).collect();
        let expected: Vec<&str> = vec![$($title),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "result titles differ from expected (order matters)"
        );
    }};
}

/// Assert the filter contract on a result set: every result is drawn from
/// the index, there are at most `MAX_RESULTS` of them, and they preserve
/// index order.
#[macro_export]
macro_rules! assert_filter_contract {
    ($index:expr, $results:expr) => {{
        let index: &psst_core::SearchIndex = &$index;
        let results: &[&psst_core::IndexEntry] = &$results;
        assert!(
            results.len() <= psst_core::MAX_RESULTS,
            "filter returned {} results, cap is {}",
            results.len(),
            psst_core::MAX_RESULTS
        );
        let mut last_pos = None;
        for result in results {
            let pos = index
                .entries()
                .iter()
                .position(|e| std::ptr::eq(e, *result))
                .unwrap_or_else(|| {
                    panic!("result {:?} is not borrowed from the index", result.title)
                });
            if let Some(last) = last_pos {
                assert!(
                    pos > last,
                    "results out of index order: position {} after {}",
                    pos,
                    last
                );
            }
            last_pos = Some(pos);
        }
    }};
}
