use newsdesk_core::{pagination_range, PageEntry, TOTAL_PAGES};
use pretty_assertions::assert_eq;
use PageEntry::{Ellipsis, Page};

#[test]
fn first_and_last_always_present() {
    for page in 1..=TOTAL_PAGES {
        let entries = pagination_range(page, TOTAL_PAGES);
        assert_eq!(entries.first(), Some(&Page(1)), "page {page}");
        assert_eq!(entries.last(), Some(&Page(TOTAL_PAGES)), "page {page}");
    }
}

#[test]
fn middle_page_has_window_and_two_ellipses() {
    assert_eq!(
        pagination_range(5, TOTAL_PAGES),
        vec![
            Page(1),
            Ellipsis,
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Ellipsis,
            Page(10)
        ]
    );
}

#[test]
fn first_page_has_no_leading_ellipsis() {
    assert_eq!(
        pagination_range(1, TOTAL_PAGES),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
}

#[test]
fn last_page_mirrors_first() {
    assert_eq!(
        pagination_range(10, TOTAL_PAGES),
        vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
    );
}

#[test]
fn window_abuts_boundaries_without_ellipsis() {
    // page 3: window 1..=5 swallows the first entry, page-3 is out of range.
    assert_eq!(
        pagination_range(3, TOTAL_PAGES),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
    );
    // page 4: page-3 == 1, which is already a concrete entry.
    assert_eq!(
        pagination_range(4, TOTAL_PAGES),
        vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Ellipsis,
            Page(10)
        ]
    );
}

#[test]
fn entries_stay_in_range_and_ascending() {
    for page in 1..=TOTAL_PAGES + 5 {
        let pages: Vec<u32> = pagination_range(page, TOTAL_PAGES)
            .into_iter()
            .filter_map(|entry| match entry {
                Page(n) => Some(n),
                Ellipsis => None,
            })
            .collect();
        assert!(pages.iter().all(|n| (1..=TOTAL_PAGES).contains(n)));
        assert!(pages.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
