use crate::error::{EditorError, EditorResult};
use crate::page::{Page, PageId};

/// Ordered list of pages plus the current-page selection.
///
/// Always holds at least one page, and `current` always names one of them.
#[derive(Debug, Clone)]
pub struct PageStore {
    pages: Vec<Page>,
    current: PageId,
    next_id: u32,
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStore {
    /// A store holding a single current page, "Page 1"
    pub fn new() -> Self {
        let first = PageId(1);
        Self {
            pages: vec![Page::new(first, Page::default_name(first))],
            current: first,
            next_id: 2,
        }
    }

    /// Appends a page named after its id. Does not change the selection.
    pub fn add(&mut self) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        self.pages.push(Page::new(id, Page::default_name(id)));
        id
    }

    pub fn select(&mut self, id: PageId) -> EditorResult {
        if !self.contains(id) {
            return Err(EditorError::PageNotFound(id));
        }
        self.current = id;
        Ok(())
    }

    /// Renames a page to the trimmed `name`, returning the stored name
    pub fn rename(&mut self, id: PageId, name: &str) -> EditorResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyPageName);
        }
        let page = self.get_mut(id).ok_or(EditorError::PageNotFound(id))?;
        page.set_name(name.to_owned());
        Ok(name.to_owned())
    }

    /// Removes a page. Elements on it are not touched here; see
    /// [`Document::delete_page`](crate::document::Document::delete_page).
    pub fn delete(&mut self, id: PageId) -> EditorResult {
        if self.pages.len() <= 1 {
            return Err(EditorError::LastPage);
        }
        let index = self
            .pages
            .iter()
            .position(|page| page.id() == id)
            .ok_or(EditorError::PageNotFound(id))?;
        self.pages.remove(index);

        if self.current == id {
            // Non-empty: we refused above when only one page was left.
            self.current = self.pages[0].id();
        }
        Ok(())
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.get(self.current)
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id() == id)
    }

    pub fn get_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|page| page.id() == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> + '_ {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
