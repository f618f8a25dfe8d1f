/// Fixed page count shown in the pagination strip. The API's reported total
/// is not consulted.
pub const TOTAL_PAGES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

/// Compressed page strip: first, last, a window of +/-2 around `page`, and an
/// ellipsis at exactly `page-3` / `page+3` when those fall inside the range.
pub fn pagination_range(page: u32, total_pages: u32) -> Vec<PageEntry> {
    let page = i64::from(page);
    let total = i64::from(total_pages);
    let mut entries = Vec::new();

    for i in 1..=total {
        if i == 1 || i == total || (page - 2..=page + 2).contains(&i) {
            entries.push(PageEntry::Page(i as u32));
        } else if i == page - 3 || i == page + 3 {
            entries.push(PageEntry::Ellipsis);
        }
    }

    entries
}
