/// Pure list widget helpers: name search, page slicing and the pager window
use serde::Serialize;

use crate::utils::string_utils::{contains_ignore_case, normalize_whitespace};

/// Pagination settings for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    pub inner_window: usize,
    pub outer_window: usize,
}

/// A single entry in the pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    Page { number: usize, active: bool },
    Gap,
}

/// One page of a list after search and pagination
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub links: Vec<PageLink>,
}

/// Keep items whose searchable text contains the query, ignoring case
///
/// Runs of whitespace count as a single space on both sides.
pub fn search<T, F>(items: Vec<T>, query: Option<&str>, text_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let query = query.map(normalize_whitespace).unwrap_or_default();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| contains_ignore_case(&normalize_whitespace(text_of(item)), &query))
        .collect()
}

/// Number of pages needed for `total` items (at least one)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Slice out the requested page, clamping it into `[1, pages]`
pub fn paginate<T>(items: Vec<T>, requested_page: usize, pagination: Option<Pagination>) -> PageSlice<T> {
    let total = items.len();
    let Some(pagination) = pagination else {
        return PageSlice {
            items,
            page: 1,
            pages: 1,
            total,
            links: Vec::new(),
        };
    };

    let pages = page_count(total, pagination.page_size);
    let page = requested_page.clamp(1, pages);
    let items = items
        .into_iter()
        .skip((page - 1) * pagination.page_size)
        .take(pagination.page_size)
        .collect();

    PageSlice {
        items,
        page,
        pages,
        total,
        links: page_links(page, pages, pagination.inner_window, pagination.outer_window),
    }
}

/// Build the pager: outer pages at both ends, `current ± inner`, gaps collapsed
pub fn page_links(current: usize, pages: usize, inner: usize, outer: usize) -> Vec<PageLink> {
    if pages <= 1 {
        return Vec::new();
    }

    let mut links = Vec::new();
    for number in 1..=pages {
        let in_outer = number <= outer || number > pages.saturating_sub(outer);
        let in_inner = number + inner >= current && number <= current + inner;
        if in_outer || in_inner {
            links.push(PageLink::Page {
                number,
                active: number == current,
            });
        } else if links.last() != Some(&PageLink::Gap) {
            links.push(PageLink::Gap);
        }
    }
    links
}
