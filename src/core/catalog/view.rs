use super::CatalogAction;
use super::models::{CatalogItem, ItemId};
use crate::core::error::ApiError;

/// Items per page on the public catalogs
pub const PUBLIC_PAGE_SIZE: usize = 5;

/// Local copy of a catalog as a page renders it.
///
/// Failed operations only set the error message; the collection changes
/// only when the backend confirmed the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T: CatalogItem> Default for CatalogView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogItem> CatalogView<T> {
    /// Empty view waiting for its first load
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_list(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.fail(CatalogAction::Load, &e),
        }
    }

    /// Append the created item; returns it so the page can open it for editing.
    pub fn apply_created(&mut self, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(item) => {
                self.upsert(item.clone());
                Some(item)
            }
            Err(e) => {
                self.fail(CatalogAction::Create, &e);
                None
            }
        }
    }

    pub fn apply_updated(&mut self, result: Result<T, ApiError>) -> bool {
        match result {
            Ok(item) => {
                self.upsert(item);
                true
            }
            Err(e) => {
                self.fail(CatalogAction::Update, &e);
                false
            }
        }
    }

    pub fn apply_deleted(&mut self, id: ItemId, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                true
            }
            Err(e) => {
                self.fail(CatalogAction::Delete, &e);
                false
            }
        }
    }

    /// Items whose name contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<T> {
        let query = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| query.is_empty() || item.name().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    fn fail(&mut self, action: CatalogAction, error: &ApiError) {
        let resource = T::RESOURCE;
        tracing::warn!(%resource, ?action, "catalog operation failed: {}", error);
        self.error = Some(format!(
            "{}: {}",
            action.failure_message(T::RESOURCE),
            error.user_message()
        ));
    }
}

/// Number of pages needed for `total` items
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Items of 1-based `page`; out-of-range pages clamp to the first/last page.
pub fn page_items<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let pages = page_count(items.len(), per_page);
    if pages == 0 {
        return Vec::new();
    }
    let page = page.clamp(1, pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    items[start..end].to_vec()
}
