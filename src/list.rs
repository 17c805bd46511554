//! Client-side list filtering and pagination
//!
//! List views fetch their collection once and derive the visible slice
//! synchronously from the current filter text and page number. The data
//! scale is tens to low hundreds of rows, so every recomputation is a
//! plain pass over the collection.

/// Items that can be matched by the list filter expose the fields the
/// filter searches across.
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<&str>;
}

/// Filter text and page position for one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    current_page: usize,
    items_per_page: usize,
}

impl FilterState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Change the filter text. Always snaps back to the first page so a
    /// narrowed result set is never viewed from a page that no longer
    /// exists.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Request a page; the value is clamped against the filtered item
    /// count on the next [`apply`](Self::apply).
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.current_page += 1;
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// The filtered subset: case-insensitive substring match against any
    /// searchable field. An empty term matches everything.
    pub fn filtered<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.search_term.is_empty() {
            return items.iter().collect();
        }
        let needle = self.search_term.to_lowercase();
        items
            .iter()
            .filter(|item| {
                item.searchable_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Filter, then slice the current page out of the result.
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> PageView<'a, T> {
        let filtered = self.filtered(items);
        let filtered_count = filtered.len();
        let total_pages = filtered_count.div_ceil(self.items_per_page).max(1);
        let page = self.current_page.clamp(1, total_pages);

        let start = (page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(filtered_count);
        let items = if start < filtered_count {
            filtered[start..end].to_vec()
        } else {
            Vec::new()
        };

        PageView {
            items,
            filtered_count,
            total_pages,
            page,
            items_per_page: self.items_per_page,
        }
    }
}

/// One derived page of a filtered list.
#[derive(Debug)]
pub struct PageView<'a, T> {
    /// The visible slice
    pub items: Vec<&'a T>,

    /// How many items survived the filter
    pub filtered_count: usize,

    /// Page count over the filtered set, never less than 1
    pub total_pages: usize,

    /// The effective (clamped) page number
    pub page: usize,

    /// The configured page size
    pub items_per_page: usize,
}

impl<'a, T> PageView<'a, T> {
    /// Whether a Previous control should be enabled
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a Next control should be enabled
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
