//! One page of a list query together with its navigation metadata.

use serde::Serialize;

/// Width of the page-number navigation window.
pub const NAVIGATE_PAGES: i64 = 5;

/// A page of rows plus everything a pager widget needs to render.
///
/// Page numbers are 1-based. `pre_page`, `next_page` and the navigation
/// bounds are 0 when there is nothing to point at.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo<T> {
    pub page_num: i64,
    pub page_size: i64,
    /// Number of rows on this page
    pub size: i64,
    pub start_row: i64,
    pub end_row: i64,
    /// Total number of rows across all pages
    pub total: i64,
    pub pages: i64,
    pub list: Vec<T>,
    pub pre_page: i64,
    pub next_page: i64,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub navigate_pages: i64,
    pub navigatepage_nums: Vec<i64>,
    pub navigate_first_page: i64,
    pub navigate_last_page: i64,
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// Clamp a requested page number into `1..=pages`.
///
/// With no rows at all the result is page 1.
pub fn reasonable_page(page_num: i64, page_size: i64, total: i64) -> i64 {
    let pages = page_count(total, page_size);
    if page_num <= 0 || pages == 0 {
        1
    } else {
        page_num.min(pages)
    }
}

/// Row offset of the first row on `page_num`.
pub fn page_offset(page_num: i64, page_size: i64) -> i64 {
    page_num.saturating_sub(1).saturating_mul(page_size).max(0)
}

impl<T> PageInfo<T> {
    /// Build page metadata for `list`, the rows of page `page_num`.
    ///
    /// `page_num` must already be clamped with [`reasonable_page`].
    pub fn new(list: Vec<T>, page_num: i64, page_size: i64, total: i64) -> Self {
        let pages = page_count(total, page_size);
        let size = list.len() as i64;

        let (start_row, end_row) = if size == 0 {
            (0, 0)
        } else {
            let start = page_offset(page_num, page_size).saturating_add(1);
            (start, start.saturating_add(size - 1))
        };

        let navigatepage_nums = navigate_window(page_num, pages, NAVIGATE_PAGES);
        let navigate_first_page = navigatepage_nums.first().copied().unwrap_or(0);
        let navigate_last_page = navigatepage_nums.last().copied().unwrap_or(0);

        Self {
            page_num,
            page_size,
            size,
            start_row,
            end_row,
            total,
            pages,
            list,
            pre_page: if page_num > 1 { page_num - 1 } else { 0 },
            next_page: if page_num < pages { page_num + 1 } else { 0 },
            is_first_page: page_num == 1,
            is_last_page: page_num == pages || pages == 0,
            has_previous_page: page_num > 1,
            has_next_page: page_num < pages,
            navigate_pages: NAVIGATE_PAGES,
            navigatepage_nums,
            navigate_first_page,
            navigate_last_page,
        }
    }
}

/// Page numbers to show around `page_num`, at most `width` of them.
fn navigate_window(page_num: i64, pages: i64, width: i64) -> Vec<i64> {
    if pages <= width {
        return (1..=pages).collect();
    }

    let start = page_num - width / 2;
    let end = page_num + width / 2;
    if start < 1 {
        (1..=width).collect()
    } else if end > pages {
        (pages - width + 1..=pages).collect()
    } else {
        (start..start + width).collect()
    }
}
