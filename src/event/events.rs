use egui::Pos2;

use crate::element::{ElementId, ElementKind};
use crate::page::PageId;

/// Emitted after a command has changed editor state
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ElementAdded {
        id: ElementId,
        kind: ElementKind,
        page: PageId,
    },
    ElementMoved {
        id: ElementId,
        position: Pos2,
    },
    PageAdded {
        id: PageId,
    },
    PageSelected {
        id: PageId,
    },
    PageRenamed {
        id: PageId,
        name: String,
    },
    PageDeleted {
        id: PageId,
        removed_elements: usize,
    },
    ScaleChanged {
        scale: f32,
    },
    RenameStarted {
        page: PageId,
    },
    RenameClosed,
}
