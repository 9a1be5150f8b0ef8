// stylestore_app/src/catalog.rs

//! Local catalog shaping: the product filter and the 1-based pagination
//! arithmetic shared by the storefront grid and the dashboard lists.
//!
//! The product list is fetched once (the API caps a page at 100 rows) and
//! filtered/windowed client-side; the dashboard lists instead page
//! server-side via `limit`/`skip`, using [`PageWindow::offset`].

use crate::api::types::Product;

/// Client-side product filter: optional category plus a free-text search.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
  /// `None` shows every category.
  pub category: Option<String>,
  /// Case-insensitive substring matched against title and description.
  pub search: String,
}

impl CatalogFilter {
  pub fn all() -> Self {
    Self::default()
  }

  pub fn category(category: impl Into<String>) -> Self {
    CatalogFilter {
      category: Some(category.into()),
      search: String::new(),
    }
  }

  pub fn search(search: impl Into<String>) -> Self {
    CatalogFilter {
      category: None,
      search: search.into(),
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    if let Some(wanted) = self.category.as_deref() {
      if !product.category.eq_ignore_ascii_case(wanted) {
        return false;
      }
    }
    if self.search.is_empty() {
      return true;
    }
    let needle = self.search.to_lowercase();
    product.title.to_lowercase().contains(&needle) || product.description.to_lowercase().contains(&needle)
  }

  /// Borrows the matching products, preserving catalog order.
  pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
    products.iter().filter(|product| self.matches(product)).collect()
  }
}

/// 1-based page arithmetic over a list of `total_items` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  total_items: usize,
  per_page: usize,
}

impl PageWindow {
  /// A `per_page` of 0 is treated as 1.
  pub fn new(total_items: usize, per_page: usize) -> Self {
    PageWindow {
      total_items,
      per_page: per_page.max(1),
    }
  }

  /// Number of pages needed to show every row; 0 when the list is empty
  /// (the pager simply renders no buttons).
  pub fn pages(&self) -> usize {
    (self.total_items + self.per_page - 1) / self.per_page
  }

  /// Forces `page` into the valid range. An empty list clamps to page 1.
  pub fn clamp(&self, page: usize) -> usize {
    page.max(1).min(self.pages().max(1))
  }

  /// Start/end indices (end exclusive) of the rows on `page`. The final
  /// page may be short.
  pub fn slice_bounds(&self, page: usize) -> (usize, usize) {
    let page = self.clamp(page);
    let start = ((page - 1) * self.per_page).min(self.total_items);
    let end = (start + self.per_page).min(self.total_items);
    (start, end)
  }

  /// The rows of `items` visible on `page`.
  pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
    let (start, end) = self.slice_bounds(page);
    &items[start.min(items.len())..end.min(items.len())]
  }

  /// The `skip` value a server-side paginated fetch uses for `page`.
  pub fn offset(&self, page: usize) -> usize {
    (self.clamp(page) - 1) * self.per_page
  }
}
