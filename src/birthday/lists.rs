/// Assembles a view into a rendered list: filter, search, then paginate
use chrono::NaiveDate;

use super::dataset::BirthdayDataset;
use super::views::{build_view, ViewError};
use crate::constants::{PAGE_ITEMS, PAGINATION_INNER_WINDOW, PAGINATION_OUTER_WINDOW};
use crate::models::{ListItem, ViewKind};
use crate::utils::listing::{paginate, search, PageSlice, Pagination};

/// One list on the board, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ListSection {
    pub view: ViewKind,
    pub query: String,
    pub slice: PageSlice<ListItem>,
}

/// What a caller asks of a single list
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRequest<'a> {
    pub month: Option<&'a str>,
    pub query: Option<&'a str>,
    pub page: Option<usize>,
}

/// Only the full list is paginated
pub fn pagination_for(view: ViewKind) -> Option<Pagination> {
    match view {
        ViewKind::All => Some(Pagination {
            page_size: PAGE_ITEMS,
            inner_window: PAGINATION_INNER_WINDOW,
            outer_window: PAGINATION_OUTER_WINDOW,
        }),
        ViewKind::Day | ViewKind::Soon | ViewKind::Month => None,
    }
}

pub fn build_section(
    dataset: &BirthdayDataset,
    view: ViewKind,
    today: NaiveDate,
    request: ListRequest<'_>,
) -> Result<ListSection, ViewError> {
    let items = build_view(dataset, view, today, request.month)?;
    let items = search(items, request.query, |item| item.name());
    let slice = paginate(items, request.page.unwrap_or(1), pagination_for(view));

    Ok(ListSection {
        view,
        query: request.query.unwrap_or_default().to_string(),
        slice,
    })
}
