use egui::{Pos2, pos2};
use rand::Rng;

use crate::element::{Element, ElementId, ElementKind};
use crate::error::{EditorError, EditorResult};
use crate::page::PageId;

/// Owns every element in the document, in insertion order
#[derive(Debug, Clone)]
pub struct ElementStore {
    elements: Vec<Element>,
    next_id: u64,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new element of `kind` to `page` at a random position in
    /// `[0, placement_range)` on both axes.
    pub fn add(
        &mut self,
        kind: ElementKind,
        page: PageId,
        placement_range: f32,
        rng: &mut impl Rng,
    ) -> ElementId {
        let position = if placement_range > 0.0 {
            pos2(
                rng.random_range(0.0..placement_range),
                rng.random_range(0.0..placement_range),
            )
        } else {
            Pos2::ZERO
        };
        self.insert(kind, page, position)
    }

    /// Appends a new element of `kind` at an explicit position
    pub fn insert(&mut self, kind: ElementKind, page: PageId, position: Pos2) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push(Element::new(id, kind, page, position));
        id
    }

    /// Moves an element's anchor to `position`
    pub fn update_position(&mut self, id: ElementId, position: Pos2) -> EditorResult {
        let element = self.get_mut(id).ok_or(EditorError::ElementNotFound(id))?;
        element.set_position(position);
        Ok(())
    }

    /// Removes every element on `page`, returning how many were removed
    pub fn remove_on_page(&mut self, page: PageId) -> usize {
        let before = self.elements.len();
        self.elements.retain(|element| element.page() != page);
        before - self.elements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    /// Elements on `page`, in drawing order
    pub fn on_page(&self, page: PageId) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(move |element| element.page() == page)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
