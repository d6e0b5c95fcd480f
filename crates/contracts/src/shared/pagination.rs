//! Pagination helpers shared by every list screen

use crate::shared::error::DataError;
use serde::{Deserialize, Serialize};

/// Элемент строки постраничной навигации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Compute the visible page-number row for a paginated list.
///
/// A window of up to `max_visible` pages slides around `current_page`;
/// page 1 and the last page are always anchored. A gap of more than one page
/// between an anchor and the window collapses into a single ellipsis; a
/// window landing right next to an anchor joins it without one.
///
/// Returns an empty sequence when there are no pages at all.
pub fn page_window(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Result<Vec<PageItem>, DataError> {
    if current_page < 1 {
        return Err(DataError::range("current_page must be >= 1"));
    }
    if max_visible < 1 {
        return Err(DataError::range("max_visible must be >= 1"));
    }
    if total_pages == 0 {
        return Ok(Vec::new());
    }

    let mut start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    // Clamping at the last page can shorten the window; slide the start back
    if end.saturating_sub(start) + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }

    Ok(items)
}

/// Slice bounds `[start, end)` of the current page within a list of
/// `total_items`. Never returns out-of-range indices; a page past the end
/// yields an empty slice.
pub fn slice_bounds(
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
) -> Result<(usize, usize), DataError> {
    if current_page < 1 {
        return Err(DataError::range("current_page must be >= 1"));
    }
    if items_per_page == 0 {
        return Err(DataError::range("items_per_page must be > 0"));
    }

    let start = ((current_page - 1) * items_per_page).min(total_items);
    let end = (start + items_per_page).min(total_items);
    Ok((start, end))
}

/// Состояние пагинации списка. Страницы нумеруются с 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPagination {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl ListPagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total_count: 0,
        }
    }

    /// Количество страниц (ceiling); 0 для пустого списка
    pub fn total_pages(&self) -> usize {
        if self.total_count == 0 || self.page_size == 0 {
            0
        } else {
            (self.total_count + self.page_size - 1) / self.page_size
        }
    }

    /// Переход на страницу с зажимом в допустимый диапазон
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    /// Смена размера страницы всегда возвращает на первую страницу
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Обновить общее количество записей после загрузки списка
    pub fn set_total_count(&mut self, total_count: usize) {
        self.total_count = total_count;
        self.set_page(self.page);
    }

    pub fn window(&self, max_visible: usize) -> Result<Vec<PageItem>, DataError> {
        page_window(self.page, self.total_pages(), max_visible)
    }

    pub fn bounds(&self) -> Result<(usize, usize), DataError> {
        slice_bounds(self.page, self.page_size, self.total_count)
    }
}

impl Default for ListPagination {
    fn default() -> Self {
        Self::new(50)
    }
}
