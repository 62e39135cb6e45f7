use crate::error::EditorResult;
use crate::page::PageId;
use crate::store::{ElementStore, PageStore};

/// Pages and the elements placed on them.
///
/// Elements refer to pages by id only; `delete_page` is the one place that
/// keeps the two stores consistent.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: ElementStore,
    pages: PageStore,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &ElementStore {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ElementStore {
        &mut self.elements
    }

    pub fn pages(&self) -> &PageStore {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut PageStore {
        &mut self.pages
    }

    /// Deletes a page and every element on it. Returns the number of
    /// elements removed.
    pub fn delete_page(&mut self, id: PageId) -> EditorResult<usize> {
        self.pages.delete(id)?;
        Ok(self.elements.remove_on_page(id))
    }
}
