use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Cards per page.
pub const PAGE_SIZE: usize = 9;
/// Cards are laid out in this many columns, filled row by row.
pub const GRID_COLUMNS: usize = 3;

/// `max(1, ceil(count / PAGE_SIZE))`.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// One-based page number held per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor(usize);

impl Default for PageCursor {
    fn default() -> Self {
        Self(1)
    }
}

impl PageCursor {
    pub fn new(page: usize) -> Self {
        Self(page.max(1))
    }

    pub fn page(&self) -> usize {
        self.0
    }

    /// Step back one page. Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.0 > 1 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page. Returns false when already on `total`.
    pub fn next(&mut self, total: usize) -> bool {
        if self.0 < total {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Pull the cursor back into `1..=total`.
    pub fn clamp(&mut self, total: usize) {
        self.0 = self.0.clamp(1, total.max(1));
    }
}

/// Index range of `page` within `count` items.
pub fn page_range(page: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(count);
    let end = (start + PAGE_SIZE).min(count);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    &items[page_range(page, items.len())]
}

/// Distribute items over the grid: item `i` goes to column `i % GRID_COLUMNS`.
pub fn grid_columns<T: Clone>(items: &[T]) -> [Vec<T>; GRID_COLUMNS] {
    let mut columns: [Vec<T>; GRID_COLUMNS] = Default::default();
    for (i, item) in items.iter().enumerate() {
        columns[i % GRID_COLUMNS].push(item.clone());
    }
    columns
}

pub fn page_label(page: usize, total: usize) -> String {
    format!("Halaman {} dari {}", page, total)
}
