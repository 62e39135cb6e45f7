use egui::Pos2;

use crate::element::{ElementId, ElementKind};
use crate::page::PageId;
use crate::zoom::ZoomGesture;

/// One user intent, produced by a panel or the canvas and executed by
/// [`EditorContext::execute`](crate::state::EditorContext::execute).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Adds an element with default geometry to the current page
    AddElement { kind: ElementKind },
    /// Moves an element's anchor to an absolute canvas position
    MoveElement { id: ElementId, position: Pos2 },
    AddPage,
    SelectPage(PageId),
    /// Opens the rename dialog for a page
    BeginRename(PageId),
    /// Applies the rename dialog's input
    CommitRename,
    CancelRename,
    /// Deletes a page together with its elements
    DeletePage(PageId),
    ZoomIn,
    ZoomOut,
    Gesture(ZoomGesture),
}

impl Command {
    /// Short label used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "AddElement",
            Command::MoveElement { .. } => "MoveElement",
            Command::AddPage => "AddPage",
            Command::SelectPage(_) => "SelectPage",
            Command::BeginRename(_) => "BeginRename",
            Command::CommitRename => "CommitRename",
            Command::CancelRename => "CancelRename",
            Command::DeletePage(_) => "DeletePage",
            Command::ZoomIn => "ZoomIn",
            Command::ZoomOut => "ZoomOut",
            Command::Gesture(_) => "Gesture",
        }
    }
}
