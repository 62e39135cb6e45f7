//! Dialog state of the editor.
//!
//! ```text
//!            BeginRename(page)
//! ┌──────┐ ───────────────────► ┌──────────────────────┐
//! │ Idle │                      │ RenamingPage { .. }  │
//! └──────┘ ◄─────────────────── └──────────────────────┘
//!          CancelRename, a successful CommitRename,
//!          or deletion of the page being renamed
//! ```
use crate::page::PageId;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    /// No dialog open
    #[default]
    Idle,
    /// The rename dialog is open for `page`; `input` is the text field
    RenamingPage { page: PageId, input: String },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_renaming(&self) -> bool {
        matches!(self, EditorState::RenamingPage { .. })
    }

    /// Page the rename dialog is open for
    pub fn rename_target(&self) -> Option<PageId> {
        match self {
            EditorState::RenamingPage { page, .. } => Some(*page),
            EditorState::Idle => None,
        }
    }

    pub fn rename_input(&self) -> Option<&str> {
        match self {
            EditorState::RenamingPage { input, .. } => Some(input),
            EditorState::Idle => None,
        }
    }

    /// Text field contents, bound directly to the dialog's `TextEdit`
    pub fn rename_input_mut(&mut self) -> Option<&mut String> {
        match self {
            EditorState::RenamingPage { input, .. } => Some(input),
            EditorState::Idle => None,
        }
    }
}
